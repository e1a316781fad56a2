//! Builder primitives for synthetic declarations
//!
//! Free constructors for namespaces and classes plus consuming `with_*`
//! methods, so a class can be assembled in one expression:
//!
//! ```rust
//! use r4mvc_syntax::{builder, Modifier};
//!
//! let class = builder::create_class("HomeController", &[], &[Modifier::Public, Modifier::Partial])
//!     .with_default_constructor(&[Modifier::Public], Vec::new())
//!     .with_string_field("Name", "Home", &[Modifier::Public, Modifier::Readonly]);
//! assert_eq!(class.members.len(), 2);
//! ```

use crate::decl::{
    Attribute, ClassDecl, ConstructorDecl, ConstructorInitializer, FieldDecl, Member, MethodDecl,
    Modifier, NamespaceDecl, Parameter, PropertyDecl,
};
use crate::expr::{Expr, Stmt};
use crate::types::TypeRef;

pub const GENERATED_CODE_ATTRIBUTE: &str = "GeneratedCode";
pub const DEBUGGER_NON_USER_CODE_ATTRIBUTE: &str = "DebuggerNonUserCode";
pub const NON_ACTION_ATTRIBUTE: &str = "NonAction";

/// Parameter name used by marker-argument constructors.
pub const DUMMY_PARAMETER: &str = "d";

pub fn create_namespace(name: impl Into<String>) -> NamespaceDecl {
    NamespaceDecl {
        name: name.into(),
        classes: Vec::new(),
    }
}

pub fn create_class(
    name: impl Into<String>,
    type_parameters: &[String],
    modifiers: &[Modifier],
) -> ClassDecl {
    ClassDecl {
        name: name.into(),
        modifiers: modifiers.to_vec(),
        type_parameters: type_parameters.to_vec(),
        base_types: Vec::new(),
        attributes: Vec::new(),
        members: Vec::new(),
    }
}

/// `[GeneratedCode("tool", "version")]`
pub fn generated_code_attribute(tool: &str, version: &str) -> Attribute {
    Attribute::new(
        GENERATED_CODE_ATTRIBUTE,
        vec![Expr::string(tool), Expr::string(version)],
    )
}

/// `[DebuggerNonUserCode]`
pub fn debugger_non_user_code_attribute() -> Attribute {
    Attribute::new(DEBUGGER_NON_USER_CODE_ATTRIBUTE, Vec::new())
}

/// `[NonAction]`
pub fn non_action_attribute() -> Attribute {
    Attribute::new(NON_ACTION_ATTRIBUTE, Vec::new())
}

impl NamespaceDecl {
    pub fn with_class(mut self, class: ClassDecl) -> Self {
        self.classes.push(class);
        self
    }
}

impl ClassDecl {
    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn with_base_types(mut self, base_types: impl IntoIterator<Item = TypeRef>) -> Self {
        self.base_types.extend(base_types);
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_members(mut self, members: impl IntoIterator<Item = Member>) -> Self {
        self.members.extend(members);
        self
    }

    pub fn with_method(self, method: MethodDecl) -> Self {
        self.with_member(Member::Method(method))
    }

    pub fn with_methods(self, methods: impl IntoIterator<Item = MethodDecl>) -> Self {
        self.with_members(methods.into_iter().map(Member::Method))
    }

    pub fn with_class(self, class: ClassDecl) -> Self {
        self.with_member(Member::Class(class))
    }

    /// Parameterless constructor with an empty body.
    pub fn with_default_constructor(self, modifiers: &[Modifier], attributes: Vec<Attribute>) -> Self {
        let ctor = ConstructorDecl {
            class_name: self.name.clone(),
            modifiers: modifiers.to_vec(),
            parameters: Vec::new(),
            initializer: None,
            body: Vec::new(),
            attributes,
        };
        self.with_member(Member::Constructor(ctor))
    }

    /// Constructor taking a single marker-type argument and doing nothing.
    ///
    /// It exists only as a distinct overload that subclasses can chain to
    /// without running the real constructor.
    pub fn with_dummy_constructor(
        self,
        marker_type: &TypeRef,
        modifiers: &[Modifier],
        attributes: Vec<Attribute>,
    ) -> Self {
        let ctor = ConstructorDecl {
            class_name: self.name.clone(),
            modifiers: modifiers.to_vec(),
            parameters: vec![Parameter::new(DUMMY_PARAMETER, marker_type.clone())],
            initializer: None,
            body: Vec::new(),
            attributes,
        };
        self.with_member(Member::Constructor(ctor))
    }

    /// Parameterless constructor chaining to `base(marker_instance)`.
    pub fn with_default_dummy_base_constructor(
        self,
        marker_instance: Expr,
        modifiers: &[Modifier],
        attributes: Vec<Attribute>,
    ) -> Self {
        let ctor = ConstructorDecl {
            class_name: self.name.clone(),
            modifiers: modifiers.to_vec(),
            parameters: Vec::new(),
            initializer: Some(ConstructorInitializer::Base(vec![marker_instance])),
            body: Vec::new(),
            attributes,
        };
        self.with_member(Member::Constructor(ctor))
    }

    pub fn with_field(
        self,
        name: impl Into<String>,
        ty: TypeRef,
        modifiers: &[Modifier],
        initializer: Option<Expr>,
    ) -> Self {
        self.with_member(Member::Field(FieldDecl {
            name: name.into(),
            ty,
            modifiers: modifiers.to_vec(),
            initializer,
        }))
    }

    /// `string` field initialized with a literal.
    pub fn with_string_field(
        self,
        name: impl Into<String>,
        value: impl Into<String>,
        modifiers: &[Modifier],
    ) -> Self {
        self.with_field(
            name,
            TypeRef::named("string"),
            modifiers,
            Some(Expr::string(value)),
        )
    }

    /// Field of type `ty` initialized with `new ty()`.
    pub fn with_new_instance_field(
        self,
        name: impl Into<String>,
        ty: TypeRef,
        modifiers: &[Modifier],
    ) -> Self {
        let init = Expr::new_object(ty.clone(), Vec::new());
        self.with_field(name, ty, modifiers, Some(init))
    }

    pub fn with_property(
        self,
        name: impl Into<String>,
        ty: TypeRef,
        getter: Expr,
        modifiers: &[Modifier],
    ) -> Self {
        self.with_member(Member::Property(PropertyDecl {
            name: name.into(),
            ty,
            modifiers: modifiers.to_vec(),
            getter,
        }))
    }
}

impl MethodDecl {
    /// Method with no modifiers, parameters, attributes or body.
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            return_type,
            modifiers: Vec::new(),
            parameters: Vec::new(),
            body: None,
            attributes: Vec::new(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: &[Modifier]) -> Self {
        self.modifiers.extend_from_slice(modifiers);
        self
    }

    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn with_parameters(mut self, parameters: impl IntoIterator<Item = Parameter>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    pub fn with_body(mut self, body: Vec<Stmt>) -> Self {
        self.body = Some(body);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_constructor_takes_marker_argument() {
        let class = create_class("HomeController", &[], &[Modifier::Public])
            .with_dummy_constructor(&TypeRef::named("Dummy"), &[Modifier::Protected], Vec::new());
        let ctor = class.constructors().next().unwrap();
        assert_eq!(ctor.class_name, "HomeController");
        assert_eq!(ctor.parameters, vec![Parameter::new("d", TypeRef::named("Dummy"))]);
        assert!(ctor.body.is_empty());
        assert_eq!(ctor.modifiers, vec![Modifier::Protected]);
    }

    #[test]
    fn base_constructor_chains_marker_instance() {
        let class = create_class("R4MVC_HomeController", &[], &[Modifier::Public])
            .with_default_dummy_base_constructor(
                Expr::path("Dummy.Instance"),
                &[Modifier::Public],
                Vec::new(),
            );
        let ctor = class.constructors().next().unwrap();
        assert!(ctor.parameters.is_empty());
        assert_eq!(
            ctor.initializer,
            Some(ConstructorInitializer::Base(vec![Expr::path("Dummy.Instance")]))
        );
    }

    #[test]
    fn method_builder_collects_parts() {
        let method = MethodDecl::new("Index", TypeRef::named("IActionResult"))
            .with_modifiers(&[Modifier::Public, Modifier::Virtual])
            .with_attributes([non_action_attribute()])
            .with_parameters([Parameter::new("id", TypeRef::named("int"))])
            .with_body(vec![Stmt::ret(Expr::ident("callInfo"))]);
        assert!(method.has_modifier(Modifier::Virtual));
        assert!(method.has_attribute(NON_ACTION_ATTRIBUTE));
        assert_eq!(method.parameters.len(), 1);
        assert!(method.body.is_some());
    }

    #[test]
    fn class_queries_find_members() {
        let nested = create_class("ActionNamesClass", &[], &[Modifier::Public]);
        let class = create_class("HomeController", &["T".to_string()], &[Modifier::Public])
            .with_string_field("Name", "Home", &[Modifier::Public, Modifier::Readonly])
            .with_property(
                "ActionNames",
                TypeRef::named("ActionNamesClass"),
                Expr::ident("s_actions"),
                &[Modifier::Public],
            )
            .with_class(nested);
        assert_eq!(class.type_parameters, vec!["T".to_string()]);
        assert_eq!(
            class.field("Name").and_then(|f| f.initializer.clone()),
            Some(Expr::string("Home"))
        );
        assert!(class.property("ActionNames").is_some());
        assert!(class.nested_class("ActionNamesClass").is_some());
        assert!(class.declares("Name"));
        assert!(!class.declares("Area"));
    }
}
