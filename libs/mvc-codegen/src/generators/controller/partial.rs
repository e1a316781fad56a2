//! Partial companion class

use r4mvc_syntax::{builder, ClassDecl, Expr, MethodDecl, Modifier, Parameter, Stmt, TypeRef};

use super::views::VIEWS_CLASS;
use super::ControllerGenerator;
use crate::area::controller_name;
use crate::model::ParsedController;

const ACTION_NAMES_CLASS: &str = "ActionNamesClass";
const ACTION_NAME_CONSTANTS_CLASS: &str = "ActionNameConstants";

impl ControllerGenerator {
    /// Build the partial class that sits next to the user's controller.
    ///
    /// `views_class` is the pass-wide view tree built by
    /// [`ControllerGenerator::views_class`].
    pub fn generate_partial_controller(
        &self,
        controller: &ParsedController,
        area: &str,
        views_class: &ClassDecl,
    ) -> ClassDecl {
        let name = controller_name(&controller.name);

        let mut class = builder::create_class(
            controller.name.clone(),
            &controller.type_parameters,
            &[Modifier::Public, Modifier::Partial],
        );

        if !controller.has_public_constructor() {
            class = class
                .with_default_constructor(&[Modifier::Public], self.generated_code_attributes());
        }
        class = class.with_dummy_constructor(
            &self.marker,
            &[Modifier::Protected],
            self.generated_code_attributes(),
        );

        let action_names = TypeRef::named(ACTION_NAMES_CLASS);
        let views = TypeRef::named(VIEWS_CLASS);

        class
            .with_methods(self.redirect_methods())
            .with_methods(self.action_stubs(controller))
            .with_property(
                "Actions",
                controller.self_type(),
                self.actions_slot(area, name),
                &[Modifier::Public],
            )
            .with_string_field("Area", area, &[Modifier::Public, Modifier::Readonly])
            .with_string_field("Name", name, &[Modifier::Public, Modifier::Readonly])
            .with_string_field("NameConst", name, &[Modifier::Public, Modifier::Const])
            .with_new_instance_field(
                "s_actions",
                action_names.clone(),
                &[Modifier::Static, Modifier::Readonly],
            )
            .with_property(
                "ActionNames",
                action_names,
                Expr::ident("s_actions"),
                &[Modifier::Public],
            )
            .with_class(self.action_names_class(controller))
            .with_class(self.action_constants_class(controller))
            .with_new_instance_field("s_views", views.clone(), &[Modifier::Static, Modifier::Readonly])
            .with_property("Views", views, Expr::ident("s_views"), &[Modifier::Public])
            .with_class(views_class.clone())
    }

    /// `MVC.<Name>`, or `MVC.<Area>.<Name>` for area controllers.
    fn actions_slot(&self, area: &str, name: &str) -> Expr {
        let root = Expr::ident(self.config.helpers_class.clone());
        let root = if area.is_empty() { root } else { root.member(area) };
        root.member(name)
    }

    /// `RedirectToAction` / `RedirectToActionPermanent`, each taking either a
    /// result or an asynchronously produced one.
    fn redirect_methods(&self) -> Vec<MethodDecl> {
        [
            ("RedirectToAction", "RedirectToRoute"),
            ("RedirectToActionPermanent", "RedirectToRoutePermanent"),
        ]
        .into_iter()
        .flat_map(|(method, route_primitive)| {
            let direct = self
                .redirect_method(method)
                .with_parameters([Parameter::new("result", self.action_result.clone())])
                .with_body(vec![
                    // var callInfo = result.GetR4MvcResult();
                    Stmt::local(
                        "callInfo",
                        Expr::ident("result").member("GetR4MvcResult").invoke(Vec::new()),
                    ),
                    // return RedirectToRoute(callInfo.RouteValueDictionary);
                    Stmt::ret(
                        Expr::ident(route_primitive)
                            .invoke(vec![Expr::ident("callInfo").member("RouteValueDictionary")]),
                    ),
                ]);

            let task_of_result = TypeRef::generic("Task", vec![self.action_result.clone()]);
            let from_task = self
                .redirect_method(method)
                .with_parameters([Parameter::new("taskResult", task_of_result)])
                .with_body(vec![
                    // return RedirectToAction(taskResult.Result);
                    Stmt::ret(
                        Expr::ident(method)
                            .invoke(vec![Expr::ident("taskResult").member("Result")]),
                    ),
                ]);

            [direct, from_task]
        })
        .collect()
    }

    fn redirect_method(&self, name: &str) -> MethodDecl {
        MethodDecl::new(name, self.redirect_result.clone())
            .with_modifiers(&[Modifier::Protected])
            .with_attributes(self.generated_code_attributes())
    }

    /// Parameterless stubs for action names that have no parameterless overload.
    fn action_stubs(&self, controller: &ParsedController) -> Vec<MethodDecl> {
        controller
            .action_names()
            .into_iter()
            .filter(|name| {
                !controller
                    .action_methods()
                    .any(|m| m.name == *name && m.parameters.is_empty())
            })
            .map(|name| {
                MethodDecl::new(name, self.action_result.clone())
                    .with_modifiers(&[Modifier::Public, Modifier::Virtual])
                    .with_attributes([builder::non_action_attribute()])
                    .with_attributes(self.generated_code_attributes())
                    .with_body(vec![Stmt::ret(self.call_info_expr(name))])
            })
            .collect()
    }

    /// One readonly string per distinct action name.
    fn action_names_class(&self, controller: &ParsedController) -> ClassDecl {
        controller.action_names().into_iter().fold(
            builder::create_class(ACTION_NAMES_CLASS, &[], &[Modifier::Public]),
            |class, name| class.with_string_field(name, name, &[Modifier::Public, Modifier::Readonly]),
        )
    }

    /// One compile-time constant per distinct action name.
    fn action_constants_class(&self, controller: &ParsedController) -> ClassDecl {
        controller.action_names().into_iter().fold(
            builder::create_class(ACTION_NAME_CONSTANTS_CLASS, &[], &[Modifier::Public]),
            |class, name| class.with_string_field(name, name, &[Modifier::Public, Modifier::Const]),
        )
    }
}
