//! Command output.
//!
//! Human readable lines go to stdout; in JSON mode they are
//! suppressed and only the final result object is printed.
use serde::Serialize;
use serde_json::json;

use utils::terminal::{self, Status};

use crate::{Error, Result};

pub struct Ux {
    json: bool,
    status: Option<Status>,
}

impl Ux {
    pub fn new(json: bool) -> Self {
        Self { json, status: None }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn log<S: AsRef<str>>(&self, line: S) {
        if !self.json {
            println!("{}", line.as_ref());
        }
    }

    pub fn blank(&self) {
        self.log("");
    }

    /// Lines the user must see even in JSON mode, where they go to stderr.
    pub fn alert<S: AsRef<str>>(&self, line: S) {
        if self.json {
            eprintln!("{}", line.as_ref());
        } else {
            println!("{}", line.as_ref());
        }
    }

    pub fn styled(&self, pairs: &[(String, String)]) {
        for line in terminal::key_values(pairs) {
            self.log(line);
        }
    }

    pub fn start_status(&mut self, message: &str) -> Result<()> {
        if !self.json {
            self.status = Some(Status::start(message)?);
        }
        Ok(())
    }

    pub fn stop_status(&mut self, outcome: &str) -> Result<()> {
        if let Some(mut status) = self.status.take() {
            status.done(outcome)?;
        }
        Ok(())
    }

    pub fn fail_status(&mut self, outcome: &str) -> Result<()> {
        if let Some(mut status) = self.status.take() {
            status.fail(outcome)?;
        }
        Ok(())
    }

    /// Print the result object of a successful command in JSON mode.
    pub fn result<T: Serialize>(&self, value: &T) -> Result<()> {
        if self.json {
            let output = json!({"status": 0, "result": value});
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Ok(())
    }

    /// Print a failure object in JSON mode.
    pub fn failure(&self, e: &Error) {
        if self.json {
            let output = json!({
                "status": 1,
                "name": e.name(),
                "message": e.to_string(),
            });
            println!("{}", output);
        }
    }
}
