use std::ffi::{OsStr, OsString};
use std::process::Stdio;

use log::debug;
use thiserror::Error;
use tokio::process::Command;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not execute process: {0} ({1})")]
    Spawn(String, std::io::Error),

    #[error("Process {0} exited with error code: {1}")]
    Exit(String, i32),

    #[error("Process {0} was terminated by a signal")]
    Signal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A helper function to create a `ProcessBuilder`.
pub fn process<T: AsRef<OsStr>>(cmd: T) -> ProcessBuilder {
    ProcessBuilder {
        program: cmd.as_ref().to_os_string(),
        args: Vec::new(),
        inherit_stdio: true,
    }
}

/// A builder object for an external process, similar to `std::process::Command`.
#[derive(Clone, Debug)]
pub struct ProcessBuilder {
    /// The program to execute.
    program: OsString,
    /// A list of arguments to pass to the program.
    args: Vec<OsString>,
    /// Hand our standard streams to the child.
    inherit_stdio: bool,
}

impl ProcessBuilder {
    /// (chainable) Adds multiple `args` to the args list.
    pub fn args<T: AsRef<OsStr>>(&mut self, args: &[T]) -> &mut ProcessBuilder {
        self.args
            .extend(args.iter().map(|t| t.as_ref().to_os_string()));
        self
    }

    /// (chainable) Whether the child uses our stdin, stdout and stderr.
    ///
    /// When disabled the child streams are connected to the null device.
    pub fn inherit_stdio(&mut self, inherit: bool) -> &mut ProcessBuilder {
        self.inherit_stdio = inherit;
        self
    }

    /// The command line as it would be typed in a shell.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.to_string_lossy().to_string()];
        parts.extend(self.args.iter().map(|a| a.to_string_lossy().to_string()));
        parts.join(" ")
    }

    /// Runs the process, waiting for completion, and mapping non-success exit codes to an error.
    pub async fn exec(&self) -> Result<()> {
        let mut command = self.build_command();
        let name = self.program.to_string_lossy().to_string();
        debug!("Exec {}", self.display());

        let status = command
            .status()
            .await
            .map_err(|e| Error::Spawn(name.clone(), e))?;

        if status.success() {
            Ok(())
        } else {
            match status.code() {
                Some(code) => Err(Error::Exit(name, code)),
                None => Err(Error::Signal(name)),
            }
        }
    }

    /// Converts `ProcessBuilder` into a `tokio::process::Command`.
    fn build_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if self.inherit_stdio {
            command
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        } else {
            command
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
        }
        command
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn display_command_line() {
        let mut builder = process("sfdx");
        builder
            .args(&["force:package:install"])
            .args(&["--package", "04t5p000001BloG"]);
        assert_eq!(
            "sfdx force:package:install --package 04t5p000001BloG",
            builder.display()
        );
    }

    #[tokio::test]
    async fn zero_exit_is_success() {
        let result = process("true").inherit_stdio(false).exec().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn nonzero_exit_carries_code() {
        let result = process("sh")
            .args(&["-c", "exit 3"])
            .inherit_stdio(false)
            .exec()
            .await;
        match result {
            Err(Error::Exit(name, code)) => {
                assert_eq!("sh", name);
                assert_eq!(3, code);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_program_is_spawn_error() {
        let result = process("spm-no-such-program-xyz")
            .inherit_stdio(false)
            .exec()
            .await;
        assert!(matches!(result, Err(Error::Spawn(_, _))));
    }
}
