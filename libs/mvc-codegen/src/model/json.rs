//! JSON-backed declaration model
//!
//! Reads the document an upstream source parser writes:
//!
//! ```json
//! {
//!   "controllers": [
//!     {
//!       "name": "HomeController",
//!       "namespace": "App.Controllers",
//!       "base_type": "Controller",
//!       "constructors": [{ "accessibility": "public", "parameter_count": 1 }],
//!       "methods": [
//!         { "name": "Index", "return_type": "Task<IActionResult>",
//!           "parameters": [{ "name": "page", "type": "int" }] }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use r4mvc_syntax::validate_identifier;
use serde::{Deserialize, Serialize};

use super::{DeclarationModel, ParsedController};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonDeclarationModel {
    #[serde(default)]
    controllers: Vec<ParsedController>,
}

impl JsonDeclarationModel {
    pub fn new(controllers: Vec<ParsedController>) -> Result<Self> {
        let model = Self { controllers };
        model.validate()?;
        Ok(model)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Every name that ends up as a generated identifier must already be one,
    /// and a controller may appear only once per namespace.
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for controller in &self.controllers {
            if !seen.insert((controller.namespace.as_deref(), controller.name.as_str())) {
                return Err(Error::InvalidModel(format!(
                    "controller '{}' is declared more than once in namespace '{}'",
                    controller.name,
                    controller.namespace.as_deref().unwrap_or_default()
                )));
            }
            validate_identifier(&controller.name)?;
            for param in &controller.type_parameters {
                validate_identifier(param)?;
            }
            for method in &controller.methods {
                validate_identifier(&method.name)?;
                for param in &method.parameters {
                    validate_identifier(&param.name)?;
                }
            }
        }
        Ok(())
    }
}

impl DeclarationModel for JsonDeclarationModel {
    fn controllers(&self) -> &[ParsedController] {
        &self.controllers
    }
}
