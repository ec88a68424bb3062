use std::io::{stdout, Write};

use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::{Error, Result};

fn terminal_error<E: std::fmt::Display>(e: E) -> Error {
    Error::Terminal(e.to_string())
}

/// Single line status indicator, `Querying registry... done`.
///
/// The message is written without a newline when started and the
/// outcome completes the line.
pub struct Status {
    active: bool,
}

impl Status {
    pub fn start(message: &str) -> Result<Self> {
        let mut out = stdout();
        execute!(out, Print(format!("{}... ", message))).map_err(terminal_error)?;
        out.flush()?;
        Ok(Self { active: true })
    }

    pub fn done(&mut self, outcome: &str) -> Result<()> {
        self.finish(outcome, None)
    }

    pub fn fail(&mut self, outcome: &str) -> Result<()> {
        self.finish(outcome, Some(Color::Red))
    }

    fn finish(&mut self, outcome: &str, color: Option<Color>) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let mut out = stdout();
        if let Some(color) = color {
            execute!(
                out,
                SetForegroundColor(color),
                Print(outcome),
                ResetColor,
                Print("\n")
            )
            .map_err(terminal_error)?;
        } else {
            execute!(out, Print(outcome), Print("\n")).map_err(terminal_error)?;
        }
        Ok(())
    }
}

/// Format key and value pairs with the values aligned.
pub fn key_values(pairs: &[(String, String)]) -> Vec<String> {
    let width = pairs.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    pairs
        .iter()
        .map(|(k, v)| format!("{:width$} {}", format!("{}:", k), v, width = width + 1))
        .collect()
}
