//! Java identifier checks for plugin, package and command names

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid identifier regex"));

const RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while", "_",
];

/// Whether `name` can be used as a Java class, package segment or local name
pub fn is_java_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name) && !RESERVED.contains(&name)
}

pub fn validate_identifier(name: &str) -> Result<()> {
    if is_java_identifier(name) {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier(name.to_string()))
    }
}

/// Validate a dotted package qualifier such as `com` or `dev.example`
pub fn validate_qualified_name(name: &str) -> Result<()> {
    if !name.is_empty() && name.split('.').all(is_java_identifier) {
        Ok(())
    } else {
        Err(Error::InvalidIdentifier(name.to_string()))
    }
}

/// Whether `c` may appear inside a Java identifier
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        assert!(is_java_identifier("hello"));
        assert!(is_java_identifier("Test_Plugin"));
        assert!(is_java_identifier("$cmd2"));
        assert!(!is_java_identifier("2fast"));
        assert!(!is_java_identifier("Test Plugin"));
        assert!(!is_java_identifier("class"));
        assert!(!is_java_identifier(""));
    }

    #[test]
    fn test_qualified_names() {
        assert!(validate_qualified_name("com").is_ok());
        assert!(validate_qualified_name("dev.example").is_ok());
        assert!(validate_qualified_name("dev..example").is_err());
        assert!(validate_qualified_name("com.new").is_err());
        assert!(validate_qualified_name("").is_err());
    }
}
