//! Declaration model
//!
//! Language-agnostic view of the controller classes found in the host
//! project, as supplied by an upstream parser. The generator only ever reads
//! this model through [`DeclarationModel`].

mod json;

pub use json::JsonDeclarationModel;

use r4mvc_syntax::TypeRef;
use serde::{Deserialize, Serialize};

/// Read access to the parsed controllers of a project.
pub trait DeclarationModel {
    /// Controllers in declaration (discovery) order.
    fn controllers(&self) -> &[ParsedController];
}

impl DeclarationModel for Vec<ParsedController> {
    fn controllers(&self) -> &[ParsedController] {
        self
    }
}

impl DeclarationModel for [ParsedController] {
    fn controllers(&self) -> &[ParsedController] {
        self
    }
}

/// Declared accessibility of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    #[default]
    Public,
    Protected,
    Internal,
    ProtectedInternal,
    PrivateProtected,
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedConstructor {
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default)]
    pub parameter_count: usize,
    /// Produced by an earlier generation pass
    #[serde(default)]
    pub generated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

impl ParsedParameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMethod {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<ParsedParameter>,
    pub return_type: TypeRef,
    #[serde(default)]
    pub accessibility: Accessibility,
    /// Produced by an earlier generation pass
    #[serde(default)]
    pub generated: bool,
}

impl ParsedMethod {
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type,
            accessibility: Accessibility::Public,
            generated: false,
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.parameters.push(ParsedParameter::new(name, ty));
        self
    }

    pub fn generated(mut self) -> Self {
        self.generated = true;
        self
    }

    /// Public and not produced by a previous pass.
    pub fn is_action(&self) -> bool {
        self.accessibility == Accessibility::Public && !self.generated
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedController {
    /// Declared simple name, e.g. `HomeController`
    pub name: String,
    /// Fully qualified enclosing namespace; `None` when unresolved
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub base_type: Option<TypeRef>,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    #[serde(default)]
    pub constructors: Vec<ParsedConstructor>,
    #[serde(default)]
    pub methods: Vec<ParsedMethod>,
}

impl ParsedController {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: Some(namespace.into()),
            base_type: Some(TypeRef::named("Controller")),
            type_parameters: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_method(mut self, method: ParsedMethod) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_constructor(mut self, constructor: ParsedConstructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Namespace, if the provider resolved a non-blank one.
    pub fn resolved_namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|ns| !ns.trim().is_empty())
    }

    /// Public, non-generated methods in declaration order.
    pub fn action_methods(&self) -> impl Iterator<Item = &ParsedMethod> {
        self.methods.iter().filter(|m| m.is_action())
    }

    /// Distinct action names in first-occurrence order.
    pub fn action_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for method in self.action_methods() {
            if !names.contains(&method.name.as_str()) {
                names.push(&method.name);
            }
        }
        names
    }

    /// Whether the user declared a public constructor (generated ones don't count).
    pub fn has_public_constructor(&self) -> bool {
        self.constructors
            .iter()
            .any(|c| c.accessibility == Accessibility::Public && !c.generated)
    }

    /// The controller's own type, including its type parameters.
    pub fn self_type(&self) -> TypeRef {
        TypeRef::generic(
            self.name.clone(),
            self.type_parameters.iter().map(TypeRef::named).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(s: &str) -> TypeRef {
        TypeRef::parse(s).unwrap()
    }

    #[test]
    fn action_filter_excludes_generated_and_non_public() {
        let mut hidden = ParsedMethod::new("Helper", ty("void"));
        hidden.accessibility = Accessibility::Private;
        let controller = ParsedController::new("HomeController", "App.Controllers")
            .with_method(ParsedMethod::new("Index", ty("IActionResult")))
            .with_method(ParsedMethod::new("About", ty("IActionResult")).generated())
            .with_method(hidden);
        let names: Vec<&str> = controller.action_methods().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Index"]);
    }

    #[test]
    fn action_names_are_distinct_in_declaration_order() {
        let controller = ParsedController::new("OrdersController", "App.Controllers")
            .with_method(ParsedMethod::new("Save", ty("IActionResult")).with_parameter("id", ty("int")))
            .with_method(ParsedMethod::new("List", ty("IActionResult")))
            .with_method(
                ParsedMethod::new("Save", ty("IActionResult"))
                    .with_parameter("id", ty("int"))
                    .with_parameter("note", ty("string")),
            );
        assert_eq!(controller.action_names(), vec!["Save", "List"]);
    }

    #[test]
    fn generated_constructors_do_not_count_as_public() {
        let controller = ParsedController::new("HomeController", "App.Controllers").with_constructor(
            ParsedConstructor {
                accessibility: Accessibility::Public,
                parameter_count: 0,
                generated: true,
            },
        );
        assert!(!controller.has_public_constructor());
    }

    #[test]
    fn blank_namespace_is_unresolved() {
        let mut controller = ParsedController::new("HomeController", "  ");
        assert_eq!(controller.resolved_namespace(), None);
        controller.namespace = None;
        assert_eq!(controller.resolved_namespace(), None);
    }

    #[test]
    fn self_type_carries_type_parameters() {
        let mut controller = ParsedController::new("CrudController", "App.Controllers");
        controller.type_parameters = vec!["TEntity".to_string()];
        assert_eq!(controller.self_type().to_string(), "CrudController<TEntity>");
    }
}
