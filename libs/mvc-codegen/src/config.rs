//! Generator configuration
//!
//! Every framework-specific name the generator emits lives here so the
//! generator itself stays free of string constants. All structs deserialize
//! with per-field defaults.

use std::fs;
use std::path::Path;

use r4mvc_views::ViewLocatorConfig;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Namespace convention used to infer a controller's area
/// (`<..>.Areas.<X>.Controllers`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaConvention {
    pub areas_segment: String,
    pub controllers_segment: String,
}

impl Default for AreaConvention {
    fn default() -> Self {
        Self {
            areas_segment: "Areas".to_string(),
            controllers_segment: "Controllers".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub areas: AreaConvention,
    /// Return type of generated action stubs
    pub action_result_type: String,
    /// Call-info type constructed by stubs and overrides
    pub call_info_type: String,
    /// Return type of the redirect helpers
    pub redirect_result_type: String,
    /// Marker type taken by the no-op constructor
    pub marker_type: String,
    /// Expression passed to the marker constructor from the override class
    pub marker_instance: String,
    pub override_class_prefix: String,
    pub override_method_suffix: String,
    /// Root class of the generated controller slots (`MVC.Home`)
    pub helpers_class: String,
    /// Single-argument wrapper types treated as asynchronous results
    pub async_wrappers: Vec<String>,
    /// Values of the generated-code attribute
    pub tool_name: String,
    pub tool_version: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            areas: AreaConvention::default(),
            action_result_type: "IActionResult".to_string(),
            call_info_type: "R4Mvc_Microsoft_AspNetCore_Mvc_ActionResult".to_string(),
            redirect_result_type: "RedirectToRouteResult".to_string(),
            marker_type: "Dummy".to_string(),
            marker_instance: "Dummy.Instance".to_string(),
            override_class_prefix: "R4MVC_".to_string(),
            override_method_suffix: "Override".to_string(),
            helpers_class: "MVC".to_string(),
            async_wrappers: vec![
                "Task".to_string(),
                "System.Threading.Tasks.Task".to_string(),
            ],
            tool_name: "R4Mvc".to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Complete configuration for one project run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub generator: GeneratorConfig,
    pub views: ViewLocatorConfig,
}

impl ProjectConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ProjectConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ProjectConfig::default());
        assert_eq!(config.generator.override_class_prefix, "R4MVC_");
        assert_eq!(config.views.pages_folder, "Pages");
    }

    #[test]
    fn nested_overrides_merge_with_defaults() {
        let config = ProjectConfig::from_json_str(
            r#"{
                "generator": { "areas": { "areas_segment": "Modules" }, "helpers_class": "Links" },
                "views": { "views_folder": "Templates" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.generator.areas.areas_segment, "Modules");
        assert_eq!(config.generator.areas.controllers_segment, "Controllers");
        assert_eq!(config.generator.helpers_class, "Links");
        assert_eq!(config.generator.call_info_type, GeneratorConfig::default().call_info_type);
        assert_eq!(config.views.views_folder, "Templates");
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            ProjectConfig::from_json_str("{ not json"),
            Err(crate::Error::Json(_))
        ));
    }
}
