//! Line-level statement parser producing the transpiler's intermediate form.
//!
//! Input is restricted to one statement per line, and only the first `=` of a
//! line is considered when looking for a declaration.

use super::literal::{JavaType, Literal, ScalarType};
use crate::error::{Error, Result};
use crate::utils::is_java_identifier;

/// Prefix that marks an explicit Java type in callback source, e.g. `java.int.count`
pub const TYPE_TAG_PREFIX: &str = "java.";

const IMPLICIT_KEYWORDS: [&str; 3] = ["let", "const", "var"];

/// One parsed body line
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A declaration whose type or initializer was rewritten
    Declaration {
        indent: String,
        ty: JavaType,
        name: String,
        value: String,
    },
    /// Any other line, passed through after quote and tag normalization
    Raw { indent: String, text: String },
    Blank,
}

impl Statement {
    pub fn indent(&self) -> Option<&str> {
        match self {
            Statement::Declaration { indent, .. } | Statement::Raw { indent, .. } => Some(indent),
            Statement::Blank => None,
        }
    }
}

/// Replace single quotes with the double quotes Java string literals use
pub fn normalize_quotes(line: &str) -> String {
    line.replace('\'', "\"")
}

/// Replace `java.<T>.` and `java.Array.<T>.` tags with `T ` and `T[] `
pub fn replace_type_tags(line: &str) -> String {
    let mut out = line.to_string();
    for ty in ScalarType::ALL {
        let name = ty.java_name();
        out = out.replace(
            &format!("{TYPE_TAG_PREFIX}Array.{name}."),
            &format!("{name}[] "),
        );
        out = out.replace(&format!("{TYPE_TAG_PREFIX}{name}."), &format!("{name} "));
    }
    out
}

/// Parse one body line. `line_no` is 1-based and only used in errors.
pub fn parse_line(line: &str, line_no: usize) -> Result<Statement> {
    let line = replace_type_tags(&normalize_quotes(line));
    let text = line.trim_start_matches([' ', '\t']);
    if text.trim().is_empty() {
        return Ok(Statement::Blank);
    }
    let indent = line[..line.len() - text.len()].to_string();
    let text = text.trim_end().to_string();

    let Some((lhs, rhs)) = text.split_once('=') else {
        return Ok(Statement::Raw { indent, text });
    };

    if let Some((element, name)) = explicit_array_target(lhs) {
        if let Some(segment) = bracketed_segment(rhs) {
            let value = array_construction(element, segment);
            return Ok(Statement::Declaration {
                indent,
                ty: JavaType::Array(element),
                name,
                value,
            });
        }
        return Ok(Statement::Raw { indent, text });
    }

    if let Some(name) = implicit_target(lhs) {
        let value = rhs.split(';').next().unwrap_or_default().trim();
        let literal = Literal::parse(value).ok_or_else(|| Error::UninferableDeclaration {
            line: line_no,
            message: format!("`{value}` is not a literal value"),
        })?;
        let ty = literal.infer_type().ok_or_else(|| Error::UninferableDeclaration {
            line: line_no,
            message: format!("`{value}` is not a homogeneous, non-empty array"),
        })?;
        return Ok(Statement::Declaration {
            indent,
            ty,
            value: literal.to_java(ty),
            name,
        });
    }

    Ok(Statement::Raw { indent, text })
}

/// `String[] names` -> (String, "names")
fn explicit_array_target(lhs: &str) -> Option<(ScalarType, String)> {
    let (ty, name) = lhs.trim().split_once(char::is_whitespace)?;
    let element = ScalarType::from_java_name(ty.strip_suffix("[]")?)?;
    let name = name.trim();
    is_java_identifier(name).then(|| (element, name.to_string()))
}

/// `let  my name ` -> "myname"
fn implicit_target(lhs: &str) -> Option<String> {
    let lhs = lhs.trim();
    let (keyword, rest) = lhs.split_once(char::is_whitespace)?;
    if !IMPLICIT_KEYWORDS.contains(&keyword) {
        return None;
    }
    let name: String = rest.chars().filter(|c| !c.is_whitespace()).collect();
    is_java_identifier(&name).then_some(name)
}

/// The contents of a right-hand side that is exactly one bracketed list,
/// optionally followed by `;`.
///
/// The list ends at the first `]`, so a string element containing `]` makes
/// the line pass through unchanged.
fn bracketed_segment(rhs: &str) -> Option<&str> {
    let inner = rhs.trim().strip_prefix('[')?;
    let end = inner.find(']')?;
    let rest = inner[end + 1..].trim();
    (rest.is_empty() || rest == ";").then(|| &inner[..end])
}

fn array_construction(element: ScalarType, segment: &str) -> String {
    let values = match element {
        ScalarType::String => segment
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| format!("\"{}\"", v.trim_matches('"')))
            .collect::<Vec<_>>()
            .join(", "),
        _ => segment.trim().to_string(),
    };
    format!("new {}[]{{{}}}", element.java_name(), values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declaration(line: &str) -> (String, String, String) {
        match parse_line(line, 1).unwrap() {
            Statement::Declaration { ty, name, value, .. } => (ty.to_string(), name, value),
            other => panic!("expected declaration, got {other:?}"),
        }
    }

    #[test]
    fn test_normalize_quotes_is_idempotent() {
        let once = normalize_quotes("sender.sendMessage('hi' + \"there\");");
        assert_eq!(once, "sender.sendMessage(\"hi\" + \"there\");");
        assert_eq!(normalize_quotes(&once), once);
    }

    #[test]
    fn test_replace_type_tags() {
        assert_eq!(replace_type_tags("java.int.count = 5;"), "int count = 5;");
        assert_eq!(replace_type_tags("java.long.big = 5;"), "long big = 5;");
        assert_eq!(replace_type_tags("java.double.d = 1.5;"), "double d = 1.5;");
        assert_eq!(replace_type_tags("java.String.s = \"x\";"), "String s = \"x\";");
        assert_eq!(replace_type_tags("java.boolean.b = true;"), "boolean b = true;");
        assert_eq!(
            replace_type_tags("java.Array.String.names = [];"),
            "String[] names = [];"
        );
        assert_eq!(replace_type_tags("java.Array.int.xs = [];"), "int[] xs = [];");
    }

    #[test]
    fn test_explicit_scalar_passes_through() {
        let stmt = parse_line("    java.int.count = 5;", 1).unwrap();
        assert_eq!(
            stmt,
            Statement::Raw {
                indent: "    ".into(),
                text: "int count = 5;".into()
            }
        );
    }

    #[test]
    fn test_explicit_arrays() {
        assert_eq!(
            declaration("java.Array.int.xs = [1, 2, 3];"),
            ("int[]".into(), "xs".into(), "new int[]{1, 2, 3}".into())
        );
        assert_eq!(
            declaration("java.Array.double.ds = [1.5, 2];"),
            ("double[]".into(), "ds".into(), "new double[]{1.5, 2}".into())
        );
        assert_eq!(
            declaration("java.Array.boolean.flags = [true, false];"),
            (
                "boolean[]".into(),
                "flags".into(),
                "new boolean[]{true, false}".into()
            )
        );
        assert_eq!(
            declaration("java.Array.String.names = ['a', 'b'];"),
            (
                "String[]".into(),
                "names".into(),
                r#"new String[]{"a", "b"}"#.into()
            )
        );
    }

    #[test]
    fn test_explicit_array_without_literal_is_raw() {
        let stmt = parse_line("java.Array.int.copy = other;", 1).unwrap();
        assert!(matches!(stmt, Statement::Raw { ref text, .. } if text == "int[] copy = other;"));
    }

    #[test]
    fn test_explicit_array_from_indexed_expression_is_raw() {
        let stmt = parse_line("java.Array.String.parts = args[0].split(':');", 1).unwrap();
        assert_eq!(
            stmt,
            Statement::Raw {
                indent: String::new(),
                text: "String[] parts = args[0].split(\":\");".into()
            }
        );

        let stmt = parse_line("java.Array.int.xs = [1, 2][0];", 1).unwrap();
        assert!(matches!(stmt, Statement::Raw { .. }));
    }

    #[test]
    fn test_implicit_declarations() {
        assert_eq!(
            declaration("let greeting = \"hi\";"),
            ("String".into(), "greeting".into(), "\"hi\"".into())
        );
        assert_eq!(
            declaration("const n = 12;"),
            ("int".into(), "n".into(), "12".into())
        );
        assert_eq!(
            declaration("var big = 1000;"),
            ("long".into(), "big".into(), "1000".into())
        );
        assert_eq!(
            declaration("let ratio = 0.5"),
            ("double".into(), "ratio".into(), "0.5".into())
        );
        assert_eq!(
            declaration("let ok = true;"),
            ("boolean".into(), "ok".into(), "true".into())
        );
        assert_eq!(
            declaration("let names = ['a', 'b'];"),
            (
                "String[]".into(),
                "names".into(),
                r#"new String[]{"a", "b"}"#.into()
            )
        );
    }

    #[test]
    fn test_only_first_assignment_matters() {
        let stmt = parse_line("if (a == b) {", 1).unwrap();
        assert!(matches!(stmt, Statement::Raw { ref text, .. } if text == "if (a == b) {"));
    }

    #[test]
    fn test_keyword_must_be_a_whole_token() {
        let stmt = parse_line("outlet = 5;", 1).unwrap();
        assert!(matches!(stmt, Statement::Raw { .. }));
    }

    #[test]
    fn test_uninferable_declaration_reports_line() {
        let err = parse_line("let name = sender.getName();", 7).unwrap_err();
        match err {
            Error::UninferableDeclaration { line, .. } => assert_eq!(line, 7),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(parse_line("let empty = [];", 1).is_err());
        assert!(parse_line("let mixed = [1, 'a'];", 1).is_err());
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_line("   ", 1).unwrap(), Statement::Blank);
    }
}
