//! Handler signature extraction from the callback's first line

use crate::error::{Error, Result};

/// Java signature of `CommandExecutor#onCommand` with parameter-name placeholders
pub const HANDLER_SIGNATURE_TEMPLATE: &str = "public boolean onCommand(CommandSender %sender%, Command %cmd%, String %label%, String[] %args%)";

const PLACEHOLDERS: [&str; 4] = ["%sender%", "%cmd%", "%label%", "%args%"];

/// The four positional parameter names declared by a callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerParams {
    pub sender: String,
    pub command: String,
    pub label: String,
    pub args: String,
}

impl HandlerParams {
    /// Extract parameter names from a line such as `(sender, cmd, label, args) => {`.
    ///
    /// Whitespace inside each name is removed; parameters past the fourth are
    /// ignored.
    pub fn parse(line: &str) -> Result<Self> {
        let open = line
            .find('(')
            .ok_or_else(|| Error::MalformedSignature(format!("no parameter list in `{}`", line.trim())))?;
        let close = line[open..]
            .find(')')
            .map(|i| open + i)
            .ok_or_else(|| Error::MalformedSignature(format!("unclosed parameter list in `{}`", line.trim())))?;

        let names: Vec<String> = line[open + 1..close]
            .split(',')
            .map(|p| p.chars().filter(|c| !c.is_whitespace()).collect())
            .collect();

        if names.len() < 4 || names[..4].iter().any(String::is_empty) {
            return Err(Error::MalformedSignature(format!(
                "expected four parameters (sender, command, label, args), found `{}`",
                &line[open..=close]
            )));
        }

        let mut names = names.into_iter();
        let mut next = || names.next().unwrap_or_default();
        Ok(Self {
            sender: next(),
            command: next(),
            label: next(),
            args: next(),
        })
    }

    /// Substitute the parameter names into [`HANDLER_SIGNATURE_TEMPLATE`]
    pub fn render(&self) -> String {
        let values = [&self.sender, &self.command, &self.label, &self.args];
        PLACEHOLDERS
            .iter()
            .zip(values)
            .fold(HANDLER_SIGNATURE_TEMPLATE.to_string(), |sig, (placeholder, value)| {
                sig.replacen(placeholder, value, 1)
            })
    }
}
