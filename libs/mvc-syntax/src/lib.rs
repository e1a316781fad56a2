//! Synthetic declaration tree
//!
//! Language-neutral model of the declarations the controller generator
//! produces: namespaces, classes and their members, plus the small
//! expression/statement language used in generated bodies. Everything is a
//! plain owned value that serializes with serde, ready for an external
//! renderer.
//!
//! ## Modules
//!
//! - [`types`]: structural type references parsed from type names
//! - [`expr`]: expressions and statements
//! - [`decl`]: declaration nodes and tree queries
//! - [`builder`]: constructors and `with_*` builder primitives

pub mod builder;
pub mod decl;
pub mod error;
pub mod expr;
pub mod ident;
pub mod types;

pub use decl::{
    Attribute, ClassDecl, ConstructorDecl, ConstructorInitializer, FieldDecl, Member, MethodDecl,
    Modifier, NamespaceDecl, Parameter, PropertyDecl,
};
pub use error::{Result, SyntaxError};
pub use expr::{Expr, Stmt};
pub use ident::{sanitize_identifier, validate_identifier};
pub use types::TypeRef;
