//! Override-hook subclass

use r4mvc_syntax::{builder, ClassDecl, Expr, MethodDecl, Modifier, Parameter, Stmt, TypeRef};

use super::{call_info_local, ControllerGenerator};
use crate::error::{Error, Result};
use crate::model::{ParsedController, ParsedMethod};

impl ControllerGenerator {
    /// Build `R4MVC_<Controller>`, which overrides every action so that it
    /// returns call-info instead of executing.
    ///
    /// Fails with [`Error::UnresolvedNamespace`] when the controller has no
    /// namespace to qualify its base type with.
    pub fn generate_override_controller(&self, controller: &ParsedController) -> Result<ClassDecl> {
        let namespace = controller
            .resolved_namespace()
            .ok_or_else(|| Error::UnresolvedNamespace {
                controller: controller.name.clone(),
            })?;

        let base = TypeRef::generic(
            format!("{}.{}", namespace, controller.name),
            controller
                .type_parameters
                .iter()
                .map(TypeRef::named)
                .collect(),
        );

        let mut class = builder::create_class(
            format!("{}{}", self.config.override_class_prefix, controller.name),
            &controller.type_parameters,
            &[Modifier::Public, Modifier::Partial],
        )
        .with_base_types([base])
        .with_attributes(self.generated_code_attributes())
        .with_default_dummy_base_constructor(
            Expr::path(&self.config.marker_instance),
            &[Modifier::Public],
            Vec::new(),
        );

        for method in controller.action_methods() {
            let [hook, overridden] = self.override_pair(method);
            class = class.with_method(hook).with_method(overridden);
        }

        Ok(class)
    }

    /// The `partial void <Action>Override(..)` hook and the override that calls it.
    fn override_pair(&self, method: &ParsedMethod) -> [MethodDecl; 2] {
        let parameters: Vec<Parameter> = method
            .parameters
            .iter()
            .map(|p| Parameter::new(p.name.clone(), p.ty.clone()))
            .collect();
        let local = call_info_local(&parameters);
        let hook_name = format!("{}{}", method.name, self.config.override_method_suffix);

        let hook = MethodDecl::new(hook_name.clone(), TypeRef::named("void"))
            .with_modifiers(&[Modifier::Partial])
            .with_attributes([builder::non_action_attribute()])
            .with_parameters([Parameter::new(local.clone(), self.call_info.clone())])
            .with_parameters(parameters.iter().cloned());

        let mut hook_args = vec![Expr::ident(local.clone())];
        hook_args.extend(parameters.iter().map(|p| Expr::ident(p.name.clone())));

        let result = match method.return_type.unwrap_single(&self.config.async_wrappers) {
            // Task.FromResult(callInfo as T)
            Some(inner) => Expr::path(&method.return_type.name)
                .member("FromResult")
                .invoke(vec![Expr::ident(local.clone()).cast_as(inner.clone())]),
            None => Expr::ident(local.clone()),
        };

        let overridden = MethodDecl::new(method.name.clone(), method.return_type.clone())
            .with_modifiers(&[Modifier::Public, Modifier::Override])
            .with_attributes([builder::non_action_attribute()])
            .with_parameters(parameters)
            .with_body(vec![
                Stmt::local(local, self.call_info_expr(&method.name)),
                Stmt::expr(Expr::ident(hook_name).invoke(hook_args)),
                Stmt::ret(result),
            ]);

        [hook, overridden]
    }
}
