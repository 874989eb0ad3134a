//! Answer sources for the form and the inventory window.
//!
//! On a terminal the fields are `dialoguer` widgets. When stdin is piped the
//! same questions are asked line by line, so scripted input keeps working.

use crate::Result;
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::io::{BufRead, IsTerminal, Write};

/// Where the form and the window get their answers from.
///
/// Every method returns `None` when the user backs out or the input ends.
pub trait Prompter {
    /// Print a heading above the next group of questions
    fn title(&mut self, text: &str) -> Result<()>;

    /// One free-form command line
    fn line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Text field; an empty answer keeps `default`
    fn text(&mut self, label: &str, default: &str) -> Result<Option<String>>;

    /// Numeric field that only accepts finite numbers. `shown` is how the
    /// default is displayed.
    fn number(&mut self, label: &str, default: f64, shown: &str) -> Result<Option<f64>>;

    /// Pick one of `items`; returns its index
    fn select(&mut self, label: &str, items: &[String], default: usize) -> Result<Option<usize>>;
}

/// Prompter for the current process: widgets on a terminal, lines otherwise
pub fn stdin_prompter() -> Box<dyn Prompter> {
    if std::io::stdin().is_terminal() && Term::stderr().is_term() {
        Box::new(TerminalPrompter::new())
    } else {
        tracing::debug!("stdin is not a terminal, reading answers line by line");
        Box::new(LinePrompter::new(std::io::stdin().lock(), std::io::stdout()))
    }
}

/// Accepts `12.5` as well as `12,5`. Infinities and NaN are rejected.
pub fn parse_number(answer: &str) -> Option<f64> {
    answer
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// `parse_number` with an error message, for validators and `clap`
pub fn parse_finite(answer: &str) -> std::result::Result<f64, String> {
    parse_number(answer).ok_or_else(|| format!("{} is not a number", answer.trim()))
}

/// A 1-based position or the item's name (any case)
pub fn parse_choice(answer: &str, items: &[String]) -> Option<usize> {
    let answer = answer.trim();
    if let Ok(index) = answer.parse::<usize>() {
        return index.checked_sub(1).filter(|i| *i < items.len());
    }
    items.iter().position(|item| item.eq_ignore_ascii_case(answer))
}

pub struct TerminalPrompter {
    theme: ColorfulTheme,
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stderr(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn title(&mut self, text: &str) -> Result<()> {
        self.term.write_line(&format!("── {} ──", text))?;
        Ok(())
    }

    fn line(&mut self, prompt: &str) -> Result<Option<String>> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn text(&mut self, label: &str, default: &str) -> Result<Option<String>> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .default(default.to_string())
            .show_default(!default.is_empty())
            .allow_empty(true)
            .interact_text_on(&self.term)?;
        Ok(Some(answer.trim().to_string()))
    }

    fn number(&mut self, label: &str, _default: f64, shown: &str) -> Result<Option<f64>> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .default(shown.to_string())
            .validate_with(|input: &String| parse_finite(input).map(|_| ()))
            .interact_text_on(&self.term)?;
        Ok(Some(parse_finite(&answer).map_err(|e| crate::Error::Io(std::io::Error::other(e)))?))
    }

    fn select(&mut self, label: &str, items: &[String], default: usize) -> Result<Option<usize>> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(items)
            .default(default)
            .interact_on_opt(&self.term)?;
        Ok(choice)
    }
}

/// Reads one answer per line from `input` and writes prompts to `output`
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn title(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "── {} ──", text)?;
        Ok(())
    }

    fn line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.ask(prompt)
    }

    fn text(&mut self, label: &str, default: &str) -> Result<Option<String>> {
        let prompt = if default.is_empty() {
            format!("{}: ", label)
        } else {
            format!("{} [{}]: ", label, default)
        };

        Ok(self.ask(&prompt)?.map(|answer| {
            if answer.is_empty() { default.to_string() } else { answer }
        }))
    }

    fn number(&mut self, label: &str, default: f64, shown: &str) -> Result<Option<f64>> {
        loop {
            let Some(answer) = self.ask(&format!("{} [{}]: ", label, shown))? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(default));
            }
            match parse_finite(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(message) => writeln!(self.output, "  {}", message)?,
            }
        }
    }

    fn select(&mut self, label: &str, items: &[String], default: usize) -> Result<Option<usize>> {
        let choices: Vec<String> = items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("({}) {}", i + 1, item))
            .collect();
        let shown = items.get(default).map(String::as_str).unwrap_or_default();

        loop {
            let Some(answer) = self.ask(&format!("{} {} [{}]: ", label, choices.join(" "), shown))? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(Some(default));
            }
            match parse_choice(&answer, items) {
                Some(index) => return Ok(Some(index)),
                None => writeln!(self.output, "  choose one of: {}", choices.join(", "))?,
            }
        }
    }
}
