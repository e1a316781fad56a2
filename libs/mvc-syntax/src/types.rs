//! Structural type references
//!
//! Types coming from the declaration model are plain strings such as
//! `Task<IActionResult>` or `Dictionary<string, List<int>>`. They are parsed
//! once into a [`TypeRef`] so generic shape questions ("is this a wrapper
//! over one inner type?") are answered structurally instead of by substring.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SyntaxError};

/// A named type with optional generic arguments.
///
/// Array (`[]`) and nullable (`?`) suffixes as well as qualification dots are
/// kept in `name`; only the generic argument list is decomposed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeRef {
    pub name: String,
    pub args: Vec<TypeRef>,
}

impl TypeRef {
    /// A non-generic type.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// A generic type with the given arguments.
    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        let mut parser = TypeParser {
            input,
            chars: input.char_indices().peekable(),
        };
        let ty = parser.parse_type()?;
        if let Some((pos, c)) = parser.chars.next() {
            return Err(SyntaxError::invalid_type(
                input,
                format!("unexpected '{}' at offset {}", c, pos),
            ));
        }
        Ok(ty)
    }

    pub fn is_generic(&self) -> bool {
        !self.args.is_empty()
    }

    /// If this type is one of `wrappers` applied to exactly one argument,
    /// return that argument.
    ///
    /// Names are compared on whole dotted segments with any `global::`
    /// alias dropped, so `global::System.Threading.Tasks.Task<T>` and
    /// `Tasks.Task<T>` both match a configured `System.Threading.Tasks.Task`.
    pub fn unwrap_single<S: AsRef<str>>(&self, wrappers: &[S]) -> Option<&TypeRef> {
        match self.args.as_slice() {
            [inner] if wrappers.iter().any(|w| same_type_name(&self.name, w.as_ref())) => {
                Some(inner)
            }
            _ => None,
        }
    }
}

fn strip_global(name: &str) -> &str {
    name.strip_prefix("global::").unwrap_or(name)
}

/// Whether one name is the other, or a dotted suffix of it.
fn same_type_name(a: &str, b: &str) -> bool {
    let (a, b) = (strip_global(a), strip_global(b));
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    long == short
        || long
            .strip_suffix(short)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Suffixes were captured after the argument list; render them after it too.
        let (base, suffix) = split_suffix(&self.name);
        f.write_str(base)?;
        if !self.args.is_empty() {
            f.write_str("<")?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", arg)?;
            }
            f.write_str(">")?;
        }
        f.write_str(suffix)
    }
}

fn split_suffix(name: &str) -> (&str, &str) {
    let idx = name
        .find(|c: char| c == '[' || c == '?')
        .unwrap_or(name.len());
    name.split_at(idx)
}

impl FromStr for TypeRef {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TypeRef {
    type Error = SyntaxError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

struct TypeParser<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl TypeParser<'_> {
    fn skip_ws(&mut self) {
        while matches!(self.chars.peek(), Some((_, c)) if c.is_whitespace()) {
            self.chars.next();
        }
    }

    fn parse_type(&mut self) -> Result<TypeRef> {
        self.skip_ws();
        let mut name = String::new();
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_alphanumeric() || c == '_' || c == '.' || c == '@' || c == ':' {
                name.push(c);
                self.chars.next();
            } else {
                break;
            }
        }
        if name.is_empty() {
            return Err(SyntaxError::invalid_type(self.input, "missing type name"));
        }

        let mut args = Vec::new();
        self.skip_ws();
        if let Some((_, '<')) = self.chars.peek() {
            self.chars.next();
            loop {
                args.push(self.parse_type()?);
                self.skip_ws();
                match self.chars.next() {
                    Some((_, ',')) => continue,
                    Some((_, '>')) => break,
                    Some((pos, c)) => {
                        return Err(SyntaxError::invalid_type(
                            self.input,
                            format!("unexpected '{}' at offset {}", c, pos),
                        ))
                    }
                    None => {
                        return Err(SyntaxError::invalid_type(
                            self.input,
                            "unterminated generic argument list",
                        ))
                    }
                }
            }
        }

        // Nullable and array suffixes, e.g. `int?`, `string[]`, `int[,]`.
        loop {
            self.skip_ws();
            match self.chars.peek() {
                Some((_, '?')) => {
                    name.push('?');
                    self.chars.next();
                }
                Some((_, '[')) => {
                    self.chars.next();
                    name.push('[');
                    loop {
                        match self.chars.next() {
                            Some((_, ']')) => break,
                            Some((_, ',')) => name.push(','),
                            Some((_, c)) if c.is_whitespace() => {}
                            _ => {
                                return Err(SyntaxError::invalid_type(
                                    self.input,
                                    "unterminated array rank specifier",
                                ))
                            }
                        }
                    }
                    name.push(']');
                }
                _ => break,
            }
        }

        Ok(TypeRef { name, args })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_type() {
        let ty = TypeRef::parse("IActionResult").unwrap();
        assert_eq!(ty, TypeRef::named("IActionResult"));
        assert!(!ty.is_generic());
    }

    #[test]
    fn parses_nested_generics() {
        let ty = TypeRef::parse("Dictionary<string, List<int>>").unwrap();
        assert_eq!(ty.name, "Dictionary");
        assert_eq!(ty.args.len(), 2);
        assert_eq!(ty.args[1], TypeRef::generic("List", vec![TypeRef::named("int")]));
        assert_eq!(ty.to_string(), "Dictionary<string, List<int>>");
    }

    #[test]
    fn keeps_suffixes_in_name() {
        let ty = TypeRef::parse("int?").unwrap();
        assert_eq!(ty.name, "int?");
        let ty = TypeRef::parse("List<string>[]").unwrap();
        assert_eq!(ty.name, "List[]");
        assert_eq!(ty.to_string(), "List<string>[]");
    }

    #[test]
    fn rejects_unbalanced_input() {
        assert!(TypeRef::parse("Task<IActionResult").is_err());
        assert!(TypeRef::parse("Task<>").is_err());
        assert!(TypeRef::parse("").is_err());
        assert!(TypeRef::parse("Task>").is_err());
    }

    #[test]
    fn unwraps_configured_wrappers_only() {
        let wrappers = ["Task", "System.Threading.Tasks.Task"];
        let task = TypeRef::parse("Task<IActionResult>").unwrap();
        assert_eq!(
            task.unwrap_single(&wrappers),
            Some(&TypeRef::named("IActionResult"))
        );

        let qualified = TypeRef::parse("System.Threading.Tasks.Task<ViewResult>").unwrap();
        assert!(qualified.unwrap_single(&wrappers).is_some());

        // A type merely mentioning Task is not a wrapper.
        let lookalike = TypeRef::parse("TaskListResult<int>").unwrap();
        assert!(lookalike.unwrap_single(&wrappers).is_none());

        let bare = TypeRef::parse("Task").unwrap();
        assert!(bare.unwrap_single(&wrappers).is_none());
    }

    #[test]
    fn unwraps_global_and_partly_qualified_wrappers() {
        let wrappers = ["Task", "System.Threading.Tasks.Task"];
        let inner = TypeRef::named("IActionResult");

        let global = TypeRef::parse("global::System.Threading.Tasks.Task<IActionResult>").unwrap();
        assert_eq!(global.unwrap_single(&wrappers), Some(&inner));

        let partial = TypeRef::parse("Tasks.Task<IActionResult>").unwrap();
        assert_eq!(partial.unwrap_single(&wrappers), Some(&inner));

        let only_qualified = ["System.Threading.Tasks.Task"];
        let short = TypeRef::parse("Task<IActionResult>").unwrap();
        assert_eq!(short.unwrap_single(&only_qualified), Some(&inner));

        // Segment boundaries matter.
        let other = TypeRef::parse("System.Threading.Tasks.MyTask<IActionResult>").unwrap();
        assert!(other.unwrap_single(&wrappers).is_none());
        let elsewhere = TypeRef::parse("Other.Tasks.Task<IActionResult>").unwrap();
        assert!(elsewhere.unwrap_single(&only_qualified).is_none());
    }

    #[test]
    fn serde_uses_textual_form() {
        let ty: TypeRef = serde_json::from_str("\"Task<ActionResult<int>>\"").unwrap();
        assert_eq!(ty.args[0].args[0], TypeRef::named("int"));
        assert_eq!(
            serde_json::to_string(&ty).unwrap(),
            "\"Task<ActionResult<int>>\""
        );
    }
}
