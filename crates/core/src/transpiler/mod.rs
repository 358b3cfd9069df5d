//! Callback-to-Java transpiler.
//!
//! A callback is written as a scripting-style function:
//!
//! ```text
//! (sender, cmd, label, args) => {
//!     let greeting = 'hi';
//!     sender.sendMessage(greeting);
//! }
//! ```
//!
//! The first line supplies the four parameter names, the last line is the
//! closing brace and is dropped, and every line between holds exactly one
//! statement. The result is a Java `onCommand` signature plus method body.
//! No validation of the produced Java happens here; the compiler reports it.

pub mod emit;
pub mod literal;
pub mod signature;
pub mod statement;

use crate::error::{Error, Result};
use tracing::debug;

pub use literal::{INT_WIDTH_THRESHOLD, JavaType, Literal, LiteralKind, ScalarType};
pub use signature::{HANDLER_SIGNATURE_TEMPLATE, HandlerParams};
pub use statement::Statement;

/// Java text produced from one callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspiledHandler {
    pub params: HandlerParams,
    pub signature: String,
    pub body: String,
}

/// Translate a callback's source into a handler signature and body
pub fn transpile(source: &str) -> Result<TranspiledHandler> {
    let source = source.trim();
    let lines: Vec<&str> = source.lines().collect();
    let Some(first) = lines.first() else {
        return Err(Error::MalformedSignature("callback source is empty".to_string()));
    };

    let params = HandlerParams::parse(first)?;
    let body_lines = if lines.len() > 2 {
        &lines[1..lines.len() - 1]
    } else {
        &[][..]
    };

    let statements = body_lines
        .iter()
        .enumerate()
        .map(|(i, line)| statement::parse_line(line, i + 2))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Transpiled callback with sender '{}' ({} statements)",
        params.sender,
        statements.len()
    );

    Ok(TranspiledHandler {
        signature: params.render(),
        body: emit::emit_body(&statements),
        params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_scenario() {
        let handler = transpile(
            "(sender, cmd, label, args) => {\n    let greeting = 'hi';\n    sender.sendMessage(greeting)\n}",
        )
        .unwrap();

        assert_eq!(
            handler.signature,
            "public boolean onCommand(CommandSender sender, Command cmd, String label, String[] args)"
        );
        assert_eq!(
            handler.body,
            "String greeting=\"hi\";\nsender.sendMessage(greeting);\nreturn true;"
        );
    }

    #[test]
    fn test_zero_body_lines() {
        let handler = transpile("(s, c, l, a) => {\n}").unwrap();
        assert_eq!(handler.body, "return true;");

        let handler = transpile("(s, c, l, a) => {}").unwrap();
        assert_eq!(handler.body, "return true;");
    }

    #[test]
    fn test_body_ends_with_single_return() {
        let handler = transpile(
            "(s, c, l, a) => {\n  if (a.length == 0) {\n    s.sendMessage('none');\n  }\n}",
        )
        .unwrap();
        assert!(handler.body.ends_with("}\nreturn true;"));
        assert_eq!(handler.body.matches("return true;").count(), 1);
    }

    #[test]
    fn test_quotes_inside_send_statement() {
        let handler =
            transpile("(sender, cmd, label, args) => {\n    sender.sendMessage('hello ' + args[0]);\n}")
                .unwrap();
        assert_eq!(
            handler.body,
            "sender.sendMessage(\"hello \" + args[0]);\nreturn true;"
        );
    }

    #[test]
    fn test_error_line_numbers_are_source_lines() {
        let err = transpile("(s, c, l, a) => {\n  let x = 1;\n  let y = s.getName();\n}").unwrap_err();
        assert!(matches!(err, Error::UninferableDeclaration { line: 3, .. }));
    }

    #[test]
    fn test_empty_source() {
        assert!(matches!(transpile(""), Err(Error::MalformedSignature(_))));
    }

    #[test]
    fn test_trailing_whitespace_lines_are_ignored() {
        let handler = transpile(
            "\n(sender, cmd, label, args) => {\n    sender.sendMessage('hi');\n}\n   \n\t",
        )
        .unwrap();
        assert_eq!(handler.body, "sender.sendMessage(\"hi\");\nreturn true;");
    }
}
