use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

use crate::args::OutputFormat;
use crate::presentation::view_models::{CommandResultViewModel, CsvExport, StatusLevel};

pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    pub fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display + CsvExport,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.render_to(&result, &mut out)?;
        out.flush()?;
        Ok(())
    }

    pub fn render_to<T, W>(&self, result: &CommandResultViewModel<T>, out: &mut W) -> Result<()>
    where
        T: Serialize + Display + CsvExport,
        W: Write,
    {
        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            }
            OutputFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(out);
                wtr.write_record(result.content.csv_header())?;
                for row in result.content.csv_rows() {
                    wtr.write_record(&row)?;
                }
                wtr.flush()?;
            }
            OutputFormat::Plain => self.render_plain(result, out)?,
        }
        Ok(())
    }

    fn render_plain<T, W>(&self, result: &CommandResultViewModel<T>, out: &mut W) -> Result<()>
    where
        T: Serialize + Display,
        W: Write,
    {
        if let Some(badge) = &result.badge {
            if self.color {
                let label = match badge.level {
                    StatusLevel::Success => badge.label.green().bold().to_string(),
                    StatusLevel::Info => badge.label.cyan().bold().to_string(),
                    StatusLevel::Warning => badge.label.yellow().bold().to_string(),
                    StatusLevel::Error => badge.label.red().bold().to_string(),
                };
                writeln!(out, "{} {}", badge.icon(), label)?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content)?;

        if !result.suggestions.is_empty() {
            if self.color {
                writeln!(out, "\n{}", "Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\nTips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if self.color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}
