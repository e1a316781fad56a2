//! Identifier helpers

use crate::error::{Result, SyntaxError};

/// Check that `name` is a plain identifier (letters, digits, `_`, optional
/// leading `@`, not starting with a digit).
pub fn validate_identifier(name: &str) -> Result<()> {
    let body = name.strip_prefix('@').unwrap_or(name);
    let mut chars = body.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_alphabetic() || first == '_') && chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(SyntaxError::InvalidIdentifier(name.to_string()))
    }
}

/// Reserved C# keywords; contextual keywords are valid identifiers.
const RESERVED_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

fn is_reserved_keyword(name: &str) -> bool {
    RESERVED_KEYWORDS.contains(&name)
}

/// Turn an arbitrary file or folder name into an identifier.
///
/// Characters outside `[A-Za-z0-9_]` become `_`; a leading digit (or an
/// empty result) gets a `_` prefix, and a reserved keyword gets `@`.
pub fn sanitize_identifier(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    } else if is_reserved_keyword(&out) {
        out.insert(0, '@');
    }
    out
}
