use serde::Serialize;
use std::io::Write;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn from_flag(json: bool) -> Self {
        if json { OutputMode::Json } else { OutputMode::Human }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, OutputMode::Human)
    }
}

#[derive(Debug, Serialize)]
struct Envelope<'a, T: Serialize> {
    ok: bool,
    command: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorBody<'a>>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: String,
}

pub fn write_success<W: Write, T: Serialize>(out: &mut W, command: &str, data: T) -> anyhow::Result<()> {
    let envelope = Envelope { ok: true, command, data: Some(data), error: None };
    serde_json::to_writer(&mut *out, &envelope)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_error<W: Write>(out: &mut W, command: &str, code: &str, message: String) -> anyhow::Result<()> {
    let envelope: Envelope<'_, ()> = Envelope {
        ok: false,
        command,
        data: None,
        error: Some(ErrorBody { code, message }),
    };
    serde_json::to_writer(&mut *out, &envelope)?;
    writeln!(out)?;
    Ok(())
}

/// Print a success envelope to stdout; a no-op in human mode.
pub fn emit_success<T: Serialize>(mode: OutputMode, command: &str, data: T) -> anyhow::Result<()> {
    if mode.is_human() {
        return Ok(());
    }
    write_success(&mut std::io::stdout().lock(), command, data)
}

pub fn emit_error(mode: OutputMode, command: &str, code: &str, message: String) -> anyhow::Result<()> {
    if mode.is_human() {
        return Ok(());
    }
    write_error(&mut std::io::stdout().lock(), command, code, message)
}
