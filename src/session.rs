//! Line-oriented driver for [`GaugeForm`].
//!
//! Each input line is either a command (`table`, `help`, `quit`) or a field
//! entry of the form `<field> <value>`. After every entry the full form is
//! written back, followed by the error banner when one is raised.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::DisplayConfig;
use crate::errors::Result;
use crate::form::{render_reading, FormField, GaugeForm};
use crate::gauge::{compute, Awg};

const PROMPT: &str = "awg> ";

const HELP: &str = "\
enter <field> <value> to edit a field, or <field> alone to clear the form
fields: awg, mm, in, mm2, in2, kcmil
commands: table, help, quit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Text typed into a field; empty text clears the form.
    Entry {
        /// Edited field.
        field: FormField,
        /// Raw text after the field name.
        text: String,
    },
    /// Print every gauge.
    Table,
    /// Print usage.
    Help,
    /// End the session.
    Quit,
}

impl Command {
    /// Parses one input line; `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let command = match head.to_ascii_lowercase().as_str() {
            "quit" | "exit" => Self::Quit,
            "table" => Self::Table,
            "help" | "?" => Self::Help,
            _ => Self::Entry {
                field: head.parse()?,
                text: rest.trim().to_string(),
            },
        };
        Ok(Some(command))
    }
}

/// Writes the rendered form, one field per line, then the banner if raised.
pub fn write_form<W: Write>(out: &mut W, form: &GaugeForm) -> Result<()> {
    for (field, text) in form.render() {
        writeln!(out, "{:>6}: {text}", field.name())?;
    }
    if let Some(error) = form.error() {
        writeln!(out, "error: {error}")?;
    }
    Ok(())
}

/// Writes every gauge from 0 to 40 as a table.
pub fn write_table<W: Write>(out: &mut W, display: &DisplayConfig) -> Result<()> {
    let header: Vec<&str> = FormField::ALL.iter().map(|f| f.label()).collect();
    writeln!(out, "{}", header.join(" | "))?;
    for awg in Awg::all() {
        let row: Vec<String> = render_reading(&compute(awg), display)
            .into_iter()
            .map(|(_, text)| text)
            .collect();
        writeln!(out, "{}", row.join(" | "))?;
    }
    Ok(())
}

/// Runs the interactive loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(form: &mut GaugeForm, input: R, out: &mut W) -> Result<()> {
    info!("gauge session started");
    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Table)) => write_table(out, form.display())?,
            Ok(Some(Command::Help)) => writeln!(out, "{HELP}")?,
            Ok(Some(Command::Entry { field, text })) => {
                let outcome = form.submit(field, &text);
                debug!(?outcome, "entry applied");
                write_form(out, form)?;
            }
            Ok(None) => {}
            Err(err) => writeln!(out, "error: {err}")?,
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    info!("gauge session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn session(script: &str) -> String {
        let mut form = GaugeForm::default();
        let mut out = Vec::new();
        run(&mut form, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_entries_and_commands() {
        assert_eq!(Command::parse("  ").unwrap(), None);
        assert_eq!(Command::parse("QUIT").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("table").unwrap(), Some(Command::Table));
        assert_eq!(
            Command::parse("mm 2.05 (mm φ)").unwrap(),
            Some(Command::Entry {
                field: FormField::DiameterMm,
                text: "2.05 (mm φ)".to_string(),
            })
        );
        assert_eq!(
            Command::parse("kcmil").unwrap(),
            Some(Command::Entry {
                field: FormField::AreaKcmil,
                text: String::new(),
            })
        );
        assert!(Command::parse("volts 12").is_err());
    }

    #[test]
    fn entry_prints_all_fields() {
        let output = session("awg 12\n");
        assert!(output.contains("   awg: 12 (AWG)"));
        assert!(output.contains("    mm: 2.0525 (mm φ)"));
        assert!(output.contains(" kcmil: 6.5299 (KCMIL)"));
    }

    #[test]
    fn out_of_range_prints_banner() {
        let output = session("awg 12\nawg 41\n");
        assert!(output.contains("error: value out of range [0-40]: 41"));
    }

    #[test]
    fn unknown_field_is_reported_and_session_continues() {
        let output = session("ohms 5\nawg 0\n");
        assert!(output.contains("error: unknown field: ohms"));
        assert!(output.contains("0 (AWG)"));
    }

    #[test]
    fn quit_stops_reading_input() {
        let output = session("quit\nawg 12\n");
        assert!(!output.contains("(AWG)"));
    }

    #[test]
    fn table_lists_every_gauge() {
        let mut out = Vec::new();
        write_table(&mut out, &DisplayConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 42);
        assert!(text.lines().nth(1).unwrap().starts_with("0 (AWG) | 8.2515 (mm φ)"));
        assert!(text.lines().last().unwrap().starts_with("40 (AWG)"));
    }
}
