//! Record form: collects the five mutable fields of a coffee record.
//!
//! Text fields take anything, the two numeric fields only accept finite
//! numbers, and the type selector offers exactly the two coffee types. An
//! empty answer keeps the prefilled value. Backing out of a field (Esc on the
//! selector, end of piped input) cancels the form.

use crate::coffee::{CoffeeFields, CoffeeType};
use crate::ui::format_volume;
use crate::ui::prompt::Prompter;
use crate::Result;

pub struct CoffeeForm {
    title: String,
    defaults: CoffeeFields,
}

impl CoffeeForm {
    /// Empty form for a new record
    pub fn create() -> Self {
        Self {
            title: "New coffee".to_string(),
            defaults: CoffeeFields::default(),
        }
    }

    /// Form prefilled with the current values of a record
    pub fn edit(id: i64, current: CoffeeFields) -> Self {
        Self {
            title: format!("Edit coffee #{}", id),
            defaults: current,
        }
    }

    /// Form for a new record with some values already chosen
    pub fn prefilled(defaults: CoffeeFields) -> Self {
        Self {
            title: "New coffee".to_string(),
            defaults,
        }
    }

    /// Run the form. Returns `None` when the user backs out before the last field.
    pub fn run(&self, prompter: &mut dyn Prompter) -> Result<Option<CoffeeFields>> {
        prompter.title(&self.title)?;

        let Some(roasting) = prompter.text("roasting", &self.defaults.roasting)? else {
            return Ok(None);
        };
        let Some(flavor) = prompter.text("flavor", &self.defaults.flavor)? else {
            return Ok(None);
        };
        let price_shown = format!("{:.2}", self.defaults.price);
        let Some(price) = prompter.number("price", self.defaults.price, &price_shown)? else {
            return Ok(None);
        };
        let size_shown = format_volume(self.defaults.size);
        let Some(size) = prompter.number("volume", self.defaults.size, &size_shown)? else {
            return Ok(None);
        };
        let Some(kind) = self.type_field(prompter)? else {
            return Ok(None);
        };

        Ok(Some(CoffeeFields { roasting, flavor, price, size, kind }))
    }

    fn type_field(&self, prompter: &mut dyn Prompter) -> Result<Option<CoffeeType>> {
        let kinds = CoffeeType::all();
        let items: Vec<String> = kinds.iter().map(ToString::to_string).collect();
        let default = kinds.iter().position(|k| *k == self.defaults.kind).unwrap_or(0);

        Ok(prompter
            .select("type", &items, default)?
            .and_then(|index| kinds.get(index).copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::prompt::LinePrompter;
    use std::io::Cursor;

    fn run_form(form: &CoffeeForm, answers: &str) -> (Option<CoffeeFields>, String) {
        let mut prompter = LinePrompter::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new());
        let fields = form.run(&mut prompter).unwrap();
        (fields, String::from_utf8(prompter.into_output()).unwrap())
    }

    #[test]
    fn test_create_form_collects_all_fields() {
        let (fields, _) = run_form(&CoffeeForm::create(), "medium\nnutty\n12.50\n250\nbeans\n");
        assert_eq!(
            fields,
            Some(CoffeeFields::new("medium", "nutty", 12.5, 250.0, CoffeeType::Beans))
        );
    }

    #[test]
    fn test_spinner_reprompts_on_bad_number() {
        let (fields, out) = run_form(&CoffeeForm::create(), "light\nfloral\ncheap\n7,5\n100\n2\n");

        let fields = fields.unwrap();
        assert_eq!(fields.price, 7.5);
        assert_eq!(fields.kind, CoffeeType::Ground);
        assert!(out.contains("cheap is not a number"));
        assert_eq!(out.matches("price [").count(), 2);
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        let (fields, out) = run_form(&CoffeeForm::create(), "a\nb\ninf\n1\nNaN\n2\n1\n");

        let fields = fields.unwrap();
        assert_eq!(fields.price, 1.0);
        assert_eq!(fields.size, 2.0);
        assert!(out.contains("inf is not a number"));
        assert!(out.contains("NaN is not a number"));
    }

    #[test]
    fn test_type_selector_only_offers_two_values() {
        let (fields, out) = run_form(&CoffeeForm::create(), "a\nb\n1\n1\n3\ninstant\nground\n");

        assert_eq!(fields.unwrap().kind, CoffeeType::Ground);
        assert_eq!(out.matches("choose one of").count(), 2);
    }

    #[test]
    fn test_edit_form_keeps_prefilled_values() {
        let current = CoffeeFields::new("medium", "nutty", 12.5, 250.0, CoffeeType::Beans);
        let (fields, out) = run_form(&CoffeeForm::edit(1, current), "dark\n\n13\n\n\n");

        assert_eq!(
            fields,
            Some(CoffeeFields::new("dark", "nutty", 13.0, 250.0, CoffeeType::Beans))
        );
        assert!(out.contains("Edit coffee #1"));
        assert!(out.contains("roasting [medium]"));
        assert!(out.contains("price [12.50]"));
    }

    #[test]
    fn test_type_selector_prefills_current_kind() {
        let current = CoffeeFields::new("dark", "smoky", 9.0, 500.0, CoffeeType::Ground);
        let (fields, out) = run_form(&CoffeeForm::edit(4, current.clone()), "\n\n\n\n\n");

        assert_eq!(fields, Some(current));
        assert!(out.contains("[ground]: "));
    }

    #[test]
    fn test_end_of_input_cancels() {
        let (fields, _) = run_form(&CoffeeForm::create(), "medium\nnutty\n");
        assert!(fields.is_none());
    }
}
