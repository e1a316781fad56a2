//! Expressions and statements used in generated member bodies

use serde::{Deserialize, Serialize};

use crate::types::TypeRef;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    Ident {
        name: String,
    },
    StringLiteral {
        value: String,
    },
    /// `target.member`
    MemberAccess {
        target: Box<Expr>,
        member: String,
    },
    /// `target(args)`
    Invocation {
        target: Box<Expr>,
        args: Vec<Expr>,
    },
    /// `new ty(args)`
    ObjectCreation {
        ty: TypeRef,
        args: Vec<Expr>,
    },
    /// `expr as ty`
    As {
        expr: Box<Expr>,
        ty: TypeRef,
    },
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident { name: name.into() }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::StringLiteral {
            value: value.into(),
        }
    }

    /// `a.b.c` from a dotted path; the first component is an identifier.
    pub fn path(dotted: &str) -> Self {
        let mut parts = dotted.split('.');
        let head = Self::ident(parts.next().unwrap_or_default());
        parts.fold(head, |acc, part| acc.member(part))
    }

    pub fn member(self, member: impl Into<String>) -> Self {
        Self::MemberAccess {
            target: Box::new(self),
            member: member.into(),
        }
    }

    pub fn invoke(self, args: Vec<Expr>) -> Self {
        Self::Invocation {
            target: Box::new(self),
            args,
        }
    }

    pub fn new_object(ty: TypeRef, args: Vec<Expr>) -> Self {
        Self::ObjectCreation { ty, args }
    }

    pub fn cast_as(self, ty: TypeRef) -> Self {
        Self::As {
            expr: Box::new(self),
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stmt {
    /// `var name = init;`
    Local { name: String, init: Expr },
    /// `expr;`
    Expr { expr: Expr },
    /// `return expr;`
    Return { expr: Expr },
}

impl Stmt {
    pub fn local(name: impl Into<String>, init: Expr) -> Self {
        Self::Local {
            name: name.into(),
            init,
        }
    }

    pub fn expr(expr: Expr) -> Self {
        Self::Expr { expr }
    }

    pub fn ret(expr: Expr) -> Self {
        Self::Return { expr }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_builds_nested_member_access() {
        let expr = Expr::path("MVC.Admin.Home");
        assert_eq!(expr, Expr::ident("MVC").member("Admin").member("Home"));
    }

    #[test]
    fn single_component_path_is_identifier() {
        assert_eq!(Expr::path("callInfo"), Expr::ident("callInfo"));
    }
}
