use crate::coffee::CoffeeRecord;
use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn header(text: &str) {
    println!("{} {}", Icons::COFFEE, text.style(theme().header.clone()));
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn info(label: &str, value: &str) {
    println!("{} {}: {}", Icons::INFO, label.style(theme().dim.clone()), value);
}

pub fn dim(text: &str) -> String {
    text.style(theme().dim.clone()).to_string()
}

pub fn record_created(record: &CoffeeRecord) {
    println!(
        "{} Created #{} {} / {} at {}",
        Icons::NEW.style(theme().success.clone()),
        record.id,
        record.roasting,
        record.flavor,
        format!("{:.2}", record.price).style(theme().figure.clone())
    );
}

pub fn record_updated(record: &CoffeeRecord) {
    println!(
        "{} Updated #{} {} / {} at {}",
        Icons::MOD.style(theme().warn.clone()),
        record.id,
        record.roasting,
        record.flavor,
        format!("{:.2}", record.price).style(theme().figure.clone())
    );
}
