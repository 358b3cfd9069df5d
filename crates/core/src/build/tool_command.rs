use crate::error::{Error, Result};
use std::ffi::{OsStr, OsString};
use std::process::{Command, Output};
use tracing::debug;

/// An external program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<OsString>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Shell-style rendering for logs and error messages
    pub fn to_shell_command(&self) -> String {
        let mut cmd = self.program.clone();
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            cmd.push(' ');
            if arg.contains(' ') {
                cmd.push_str(&format!("'{arg}'"));
            } else {
                cmd.push_str(&arg);
            }
        }
        cmd
    }

    /// Run to completion, capturing output.
    ///
    /// A program missing from `PATH` is [`Error::ToolNotFound`]; a non-zero
    /// exit is [`Error::ExternalTool`] carrying the tool's stderr.
    pub fn execute(&self) -> Result<Output> {
        let program =
            which::which(&self.program).map_err(|_| Error::ToolNotFound(self.program.clone()))?;

        let mut cmd = Command::new(program);
        cmd.args(&self.args);

        debug!("Running: {}", self.to_shell_command());
        let output = cmd.output()?;
        if !output.status.success() {
            let mut stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            if stderr.trim().is_empty() {
                stderr = String::from_utf8_lossy(&output.stdout).into_owned();
            }
            return Err(Error::ExternalTool {
                tool: self.program.clone(),
                status: output.status.to_string(),
                stderr,
            });
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_shell_command_quotes_spaces() {
        let cmd = ToolCommand::new("javac")
            .arg("-cp")
            .arg("/my dir")
            .arg("Plugin.java");
        assert_eq!(cmd.to_shell_command(), "javac -cp '/my dir' Plugin.java");
    }

    #[test]
    fn test_missing_program_is_tool_not_found() {
        let err = ToolCommand::new("plugsmith-definitely-not-installed")
            .execute()
            .unwrap_err();
        assert!(matches!(err, Error::ToolNotFound(name) if name == "plugsmith-definitely-not-installed"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_external_tool_error() {
        let err = ToolCommand::new("sh")
            .args(["-c", "echo broken >&2; exit 3"])
            .execute()
            .unwrap_err();
        match err {
            Error::ExternalTool { tool, stderr, .. } => {
                assert_eq!(tool, "sh");
                assert_eq!(stderr.trim(), "broken");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_run_captures_stdout() {
        let output = ToolCommand::new("sh")
            .args(["-c", "echo hi"])
            .execute()
            .unwrap();
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "hi");
    }
}
