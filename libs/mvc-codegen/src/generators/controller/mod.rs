//! Controller companion generator
//!
//! For every parsed controller this produces two classes inside one
//! namespace node per controller namespace:
//!
//! - a partial class with typed action stubs, name constants, redirect
//!   helpers and a nested view-path class ([`partial`])
//! - an override-hook subclass that routes every action through a
//!   `<Action>Override` partial method ([`overrides`])

mod overrides;
mod partial;
mod views;

use std::collections::HashMap;

use r4mvc_syntax::{builder, Attribute, Expr, NamespaceDecl, Parameter, TypeRef};
use r4mvc_views::View;

use crate::area;
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::generators::Generator;
use crate::model::{DeclarationModel, ParsedController};

const CALL_INFO_LOCAL: &str = "callInfo";

/// Generates companion declarations for MVC controllers
#[derive(Debug, Clone)]
pub struct ControllerGenerator {
    config: GeneratorConfig,
    action_result: TypeRef,
    call_info: TypeRef,
    redirect_result: TypeRef,
    marker: TypeRef,
}

impl ControllerGenerator {
    /// Fails when a configured type name does not parse.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let parse = |field: &str, value: &str| {
            TypeRef::parse(value).map_err(|e| Error::Config(format!("{}: {}", field, e)))
        };
        Ok(Self {
            action_result: parse("action_result_type", &config.action_result_type)?,
            call_info: parse("call_info_type", &config.call_info_type)?,
            redirect_result: parse("redirect_result_type", &config.redirect_result_type)?,
            marker: parse("marker_type", &config.marker_type)?,
            config,
        })
    }

    pub fn new_default() -> Self {
        Self {
            action_result: TypeRef::named("IActionResult"),
            call_info: TypeRef::named("R4Mvc_Microsoft_AspNetCore_Mvc_ActionResult"),
            redirect_result: TypeRef::named("RedirectToRouteResult"),
            marker: TypeRef::named("Dummy"),
            config: GeneratorConfig::default(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Area inferred from a controller namespace; `""` when none matches.
    pub fn controller_area(&self, namespace: &str) -> String {
        area::controller_area(namespace, &self.config.areas)
    }

    /// Generate one namespace node per controller namespace, in discovery order.
    pub fn generate_controllers(
        &self,
        controllers: &[ParsedController],
        views: &[View],
    ) -> Result<Vec<NamespaceDecl>> {
        let groups = group_by_namespace(controllers)?;

        // Shared by every controller of this pass.
        let views_class = self.views_class(views);

        let mut namespaces = Vec::with_capacity(groups.len());
        for (namespace, members) in groups {
            let area = self.controller_area(namespace);
            tracing::debug!(
                namespace,
                area = %area,
                controllers = members.len(),
                "Generating controller namespace"
            );

            let mut node = builder::create_namespace(namespace);
            for controller in members {
                tracing::debug!(controller = %controller.name, "Generating controller companions");
                let partial = self.generate_partial_controller(controller, &area, &views_class);
                let overrides = self.generate_override_controller(controller)?;
                node = node.with_class(partial).with_class(overrides);
            }
            namespaces.push(node);
        }

        tracing::info!(
            namespaces = namespaces.len(),
            controllers = controllers.len(),
            views = views.len(),
            "Controller generation complete"
        );

        Ok(namespaces)
    }

    /// `new CallInfo(Area, Name, ActionNames.<action>)`
    fn call_info_expr(&self, action: &str) -> Expr {
        Expr::new_object(
            self.call_info.clone(),
            vec![
                Expr::ident("Area"),
                Expr::ident("Name"),
                Expr::ident("ActionNames").member(action),
            ],
        )
    }

    fn generated_code_attributes(&self) -> Vec<Attribute> {
        vec![
            builder::generated_code_attribute(&self.config.tool_name, &self.config.tool_version),
            builder::debugger_non_user_code_attribute(),
        ]
    }
}

impl Default for ControllerGenerator {
    fn default() -> Self {
        Self::new_default()
    }
}

impl Generator for ControllerGenerator {
    type Output = Vec<NamespaceDecl>;

    fn generate(&self, model: &dyn DeclarationModel, views: &[View]) -> Result<Self::Output> {
        self.generate_controllers(model.controllers(), views)
    }
}

/// Group controllers by namespace, keeping first-seen group order and
/// declaration order within each group.
fn group_by_namespace(
    controllers: &[ParsedController],
) -> Result<Vec<(&str, Vec<&ParsedController>)>> {
    let mut groups: Vec<(&str, Vec<&ParsedController>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for controller in controllers {
        let namespace =
            controller
                .resolved_namespace()
                .ok_or_else(|| Error::UnresolvedNamespace {
                    controller: controller.name.clone(),
                })?;
        match index.get(namespace) {
            Some(&i) => groups[i].1.push(controller),
            None => {
                index.insert(namespace, groups.len());
                groups.push((namespace, vec![controller]));
            }
        }
    }

    Ok(groups)
}

/// A local name for the call-info value that no parameter already uses.
fn call_info_local(parameters: &[Parameter]) -> String {
    let mut name = CALL_INFO_LOCAL.to_string();
    while parameters.iter().any(|p| p.name == name) {
        name.push('_');
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_keep_discovery_order() {
        let controllers = vec![
            ParsedController::new("HomeController", "App.Controllers"),
            ParsedController::new("UsersController", "App.Areas.Admin.Controllers"),
            ParsedController::new("AboutController", "App.Controllers"),
        ];
        let groups = group_by_namespace(&controllers).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "App.Controllers");
        let names: Vec<&str> = groups[0].1.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["HomeController", "AboutController"]);
        assert_eq!(groups[1].0, "App.Areas.Admin.Controllers");
    }

    #[test]
    fn unresolved_namespace_is_fatal() {
        let mut orphan = ParsedController::new("OrphanController", "");
        orphan.namespace = None;
        let controllers = vec![ParsedController::new("HomeController", "App.Controllers"), orphan];
        let err = group_by_namespace(&controllers).unwrap_err();
        assert!(matches!(err, Error::UnresolvedNamespace { ref controller } if controller == "OrphanController"));
    }

    #[test]
    fn call_info_local_avoids_parameter_names() {
        let params = vec![Parameter::new("callInfo", TypeRef::named("string"))];
        assert_eq!(call_info_local(&params), "callInfo_");
        assert_eq!(call_info_local(&[]), "callInfo");
    }

    #[test]
    fn invalid_configured_type_is_rejected() {
        let config = GeneratorConfig {
            call_info_type: "Broken<".to_string(),
            ..GeneratorConfig::default()
        };
        assert!(matches!(ControllerGenerator::new(config), Err(Error::Config(_))));
    }
}
