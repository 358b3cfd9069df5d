//! Template-driven emission of parsed statements as Java handler text

use super::statement::Statement;

/// Appended after every transpiled body
pub const SUCCESS_RETURN: &str = "return true;";

/// Whether a passed-through line needs a `;` appended.
///
/// Lines that already contain one, bare closing braces, conditionals and
/// other block openers are left alone.
pub fn needs_terminator(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() || text.contains(';') || text == "}" || text.ends_with('{') {
        return false;
    }
    let opens_conditional = text
        .strip_prefix("if")
        .is_some_and(|rest| rest.starts_with('(') || rest.starts_with(char::is_whitespace));
    !opens_conditional
}

fn emit_statement(statement: &Statement, strip: usize) -> String {
    match statement {
        Statement::Declaration {
            indent,
            ty,
            name,
            value,
        } => format!("{}{ty} {name}={value};", &indent[strip..]),
        Statement::Raw { indent, text } => {
            let terminator = if needs_terminator(text) { ";" } else { "" };
            format!("{}{text}{terminator}", &indent[strip..])
        }
        Statement::Blank => String::new(),
    }
}

/// Render a handler body: statements dedented by their common indentation,
/// followed by [`SUCCESS_RETURN`].
pub fn emit_body(statements: &[Statement]) -> String {
    let strip = statements
        .iter()
        .filter_map(Statement::indent)
        .map(str::len)
        .min()
        .unwrap_or(0);

    let mut lines: Vec<String> = statements
        .iter()
        .map(|s| emit_statement(s, strip))
        .collect();
    lines.push(SUCCESS_RETURN.to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transpiler::literal::{JavaType, ScalarType};

    fn raw(indent: &str, text: &str) -> Statement {
        Statement::Raw {
            indent: indent.into(),
            text: text.into(),
        }
    }

    #[test]
    fn test_needs_terminator() {
        assert!(needs_terminator("sender.sendMessage(\"hi\")"));
        assert!(!needs_terminator("sender.sendMessage(\"hi\");"));
        assert!(!needs_terminator("}"));
        assert!(!needs_terminator("  }  "));
        assert!(!needs_terminator("if (args.length == 0) {"));
        assert!(!needs_terminator("if(ok)"));
        assert!(!needs_terminator("} else {"));
        assert!(needs_terminator("iffy()"));
    }

    #[test]
    fn test_empty_body_is_just_return() {
        assert_eq!(emit_body(&[]), "return true;");
    }

    #[test]
    fn test_body_is_dedented() {
        let body = emit_body(&[
            raw("    ", "if (ok) {"),
            raw("        ", "sender.sendMessage(\"ok\")"),
            raw("    ", "}"),
            Statement::Blank,
            Statement::Declaration {
                indent: "    ".into(),
                ty: JavaType::Scalar(ScalarType::Int),
                name: "n".into(),
                value: "1".into(),
            },
        ]);
        assert_eq!(
            body,
            "if (ok) {\n    sender.sendMessage(\"ok\");\n}\n\nint n=1;\nreturn true;"
        );
    }
}
