//! Nested view-path class

use r4mvc_syntax::{builder, sanitize_identifier, ClassDecl, Modifier, TypeRef};
use r4mvc_views::View;

use super::ControllerGenerator;

pub(super) const VIEWS_CLASS: &str = "ViewsClass";
const VIEW_NAMES_CLASS: &str = "_ViewNamesClass";
const VIEW_NAMES_FIELD: &str = "ViewNames";

/// Views grouped by folder, both in discovery order.
#[derive(Debug, Default)]
struct ViewTree<'a> {
    views: Vec<&'a View>,
    children: Vec<(String, ViewTree<'a>)>,
}

impl<'a> ViewTree<'a> {
    fn build(views: &'a [View]) -> Self {
        let mut root = Self::default();
        for view in views {
            let mut node = &mut root;
            for segment in &view.segments {
                let index = match node.children.iter().position(|(name, _)| name == segment) {
                    Some(i) => i,
                    None => {
                        node.children.push((segment.clone(), Self::default()));
                        node.children.len() - 1
                    }
                };
                node = &mut node.children[index].1;
            }
            node.views.push(view);
        }
        root
    }

    fn into_class(self, name: String, path: &str) -> ClassDecl {
        let readonly = [Modifier::Public, Modifier::Readonly];
        let mut class = builder::create_class(name, &[], &[Modifier::Public]);

        if !self.views.is_empty() {
            let names = self.views.iter().fold(
                builder::create_class(VIEW_NAMES_CLASS, &[], &[Modifier::Public]),
                |names, view| {
                    let ident = sanitize_identifier(&view.view_name);
                    if names.declares(&ident) {
                        names
                    } else {
                        names.with_string_field(ident, view.view_name.clone(), &readonly)
                    }
                },
            );
            class = class.with_class(names).with_new_instance_field(
                VIEW_NAMES_FIELD,
                TypeRef::named(VIEW_NAMES_CLASS),
                &readonly,
            );
        }

        for (segment, child) in self.children {
            let field = sanitize_identifier(&segment);
            let class_name = format!("_{}Class", field.trim_start_matches('@'));
            if class.declares(&field) || class.declares(&class_name) {
                tracing::warn!(
                    path,
                    folder = %segment,
                    "Skipping view folder whose name collides with an existing member"
                );
                continue;
            }
            let child_path = format!("{}/{}", path, segment);
            class = class
                .with_class(child.into_class(class_name.clone(), &child_path))
                .with_new_instance_field(field, TypeRef::named(class_name), &readonly);
        }

        for view in self.views {
            let ident = sanitize_identifier(&view.view_name);
            if class.declares(&ident) {
                tracing::warn!(
                    path,
                    view = %view.relative_path,
                    "Skipping view whose name collides with an existing member"
                );
                continue;
            }
            class = class.with_string_field(ident, view.exposed_path(), &readonly);
        }

        class
    }
}

impl ControllerGenerator {
    /// `ViewsClass` mirroring the folder hierarchy of `views`, so that
    /// `Views.Admin.Users.Index` names the `Admin/Users/Index` template.
    pub fn views_class(&self, views: &[View]) -> ClassDecl {
        let class = ViewTree::build(views).into_class(VIEWS_CLASS.to_string(), "");
        tracing::debug!(views = views.len(), members = class.members.len(), "Built views class");
        class
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use r4mvc_syntax::Expr;
    use r4mvc_views::VirtualPath;

    use super::*;

    fn page(path: &str) -> View {
        let relative = format!("Pages/{}.cshtml", path);
        let name = path.rsplit('/').next().unwrap_or(path);
        View::new(
            name,
            format!("/app/{}", relative),
            VirtualPath::from_relative(Path::new(&relative)).unwrap(),
            format!("/{}", path),
            true,
            None,
        )
    }

    fn initializer(class: &ClassDecl, field: &str) -> Option<Expr> {
        class.field(field).and_then(|f| f.initializer.clone())
    }

    #[test]
    fn folders_become_nested_classes() {
        let generator = ControllerGenerator::default();
        let views = vec![page("Admin/Users/Index"), page("Admin/Users/Edit"), page("Privacy")];
        let root = generator.views_class(&views);

        assert_eq!(root.name, "ViewsClass");
        assert_eq!(initializer(&root, "Privacy"), Some(Expr::string("/Privacy")));

        let admin = root.nested_class("_AdminClass").unwrap();
        assert!(root.field("Admin").is_some());
        assert!(admin.nested_class(VIEW_NAMES_CLASS).is_none());

        let users = admin.nested_class("_UsersClass").unwrap();
        assert_eq!(initializer(users, "Index"), Some(Expr::string("/Admin/Users/Index")));
        assert_eq!(initializer(users, "Edit"), Some(Expr::string("/Admin/Users/Edit")));

        let names = users.nested_class(VIEW_NAMES_CLASS).unwrap();
        assert_eq!(initializer(names, "Index"), Some(Expr::string("Index")));
        assert!(users.field(VIEW_NAMES_FIELD).is_some());
    }

    #[test]
    fn view_colliding_with_folder_is_skipped() {
        let generator = ControllerGenerator::default();
        let views = vec![page("Admin/Index"), page("Admin")];
        let root = generator.views_class(&views);

        let admin = root.field("Admin").unwrap();
        assert_eq!(admin.ty, TypeRef::named("_AdminClass"));
        assert_eq!(root.fields().filter(|f| f.name == "Admin").count(), 1);
    }

    #[test]
    fn names_are_sanitized() {
        let generator = ControllerGenerator::default();
        let root = generator.views_class(&[page("2fa/Sign-In")]);
        let folder = root.nested_class("__2faClass").unwrap();
        assert_eq!(initializer(folder, "Sign_In"), Some(Expr::string("/2fa/Sign-In")));
    }

    #[test]
    fn keyword_names_are_escaped() {
        let generator = ControllerGenerator::default();
        let root = generator.views_class(&[page("class/new")]);
        assert!(root.field("@class").is_some());
        let folder = root.nested_class("_classClass").unwrap();
        assert_eq!(initializer(folder, "@new"), Some(Expr::string("/class/new")));
    }

    #[test]
    fn no_views_yields_empty_class() {
        let root = ControllerGenerator::default().views_class(&[]);
        assert!(root.members.is_empty());
    }
}
