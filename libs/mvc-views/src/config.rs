//! View discovery conventions

use serde::{Deserialize, Serialize};

/// Folder and file conventions used to recognize templates.
///
/// Deserializes with per-field defaults, so a config file only needs to name
/// what differs from the ASP.NET Core layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewLocatorConfig {
    /// Convention folder holding page-routed templates
    pub pages_folder: String,
    /// Convention folder holding classic controller views
    pub views_folder: String,
    /// Folder whose children are area names (`Areas/<X>/Views/...`)
    pub areas_folder: String,
    /// Template file extensions, without the dot
    pub extensions: Vec<String>,
    /// Directory names never descended into
    pub excluded_directories: Vec<String>,
    /// File stems that are layout infrastructure rather than views
    pub excluded_files: Vec<String>,
}

impl Default for ViewLocatorConfig {
    fn default() -> Self {
        Self {
            pages_folder: "Pages".to_string(),
            views_folder: "Views".to_string(),
            areas_folder: "Areas".to_string(),
            extensions: vec!["cshtml".to_string()],
            excluded_directories: vec![
                "bin".to_string(),
                "obj".to_string(),
                "node_modules".to_string(),
            ],
            excluded_files: vec!["_ViewImports".to_string(), "_ViewStart".to_string()],
        }
    }
}

impl ViewLocatorConfig {
    pub fn is_template_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: ViewLocatorConfig =
            serde_json::from_str(r#"{ "extensions": ["cshtml", "razor"] }"#).unwrap();
        assert_eq!(config.pages_folder, "Pages");
        assert!(config.is_template_extension("razor"));
        assert!(config.is_template_extension("CSHTML"));
        assert!(!config.is_template_extension("cs"));
    }
}
