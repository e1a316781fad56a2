//! Area and controller-name inference

use crate::config::AreaConvention;

const CONTROLLER_SUFFIX: &str = "Controller";

/// Area named by a `<..>.Areas.<X>.Controllers` namespace, or `""`.
///
/// Matching is done on whole dot-separated segments, anywhere in the path.
pub fn controller_area(namespace: &str, convention: &AreaConvention) -> String {
    let segments: Vec<&str> = namespace.split('.').map(str::trim).collect();
    segments
        .windows(3)
        .find(|w| {
            w[0] == convention.areas_segment
                && w[2] == convention.controllers_segment
                && !w[1].is_empty()
        })
        .map(|w| w[1].to_string())
        .unwrap_or_default()
}

/// Declared name without its trailing `Controller` suffix.
///
/// A class named exactly `Controller` keeps its name.
pub fn controller_name(declared: &str) -> &str {
    match declared.strip_suffix(CONTROLLER_SUFFIX) {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => declared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(ns: &str) -> String {
        controller_area(ns, &AreaConvention::default())
    }

    #[test]
    fn extracts_area_from_convention() {
        assert_eq!(area("App.Areas.Admin.Controllers"), "Admin");
        assert_eq!(area("Company.Web.Areas.Billing.Controllers.Api"), "Billing");
        assert_eq!(area("Areas.Admin.Controllers"), "Admin");
    }

    #[test]
    fn missing_convention_defaults_to_empty() {
        assert_eq!(area("App.Controllers"), "");
        assert_eq!(area("App.Areas.Controllers"), "");
        assert_eq!(area("App.AreasX.Admin.Controllers"), "");
        assert_eq!(area(""), "");
    }

    #[test]
    fn custom_convention() {
        let convention = AreaConvention {
            areas_segment: "Modules".to_string(),
            controllers_segment: "Endpoints".to_string(),
        };
        assert_eq!(controller_area("Shop.Modules.Cart.Endpoints", &convention), "Cart");
        assert_eq!(controller_area("Shop.Areas.Cart.Controllers", &convention), "");
    }

    #[test]
    fn strips_one_controller_suffix() {
        assert_eq!(controller_name("HomeController"), "Home");
        assert_eq!(controller_name("ControllerController"), "Controller");
        assert_eq!(controller_name("Controller"), "Controller");
        assert_eq!(controller_name("Dashboard"), "Dashboard");
    }
}
