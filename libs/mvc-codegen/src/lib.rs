//! R4MVC Controller Generator
//!
//! Produces strongly-typed companion declarations for MVC controllers so that
//! actions and views can be referenced without magic strings.
//!
//! ## Architecture
//!
//! Generation is a synchronous three-stage pipeline:
//! 1. **Model**: controllers as parsed from the host project ([`model`])
//! 2. **Views**: templates discovered under the project root (`r4mvc_views`)
//! 3. **Generators**: declaration trees built from both ([`generators`])
//!
//! The output is a list of `r4mvc_syntax::NamespaceDecl` nodes, one per
//! controller namespace, each holding a partial companion class and an
//! override-hook subclass per controller.

pub mod area;
pub mod config;
pub mod error;
pub mod generators;
pub mod model;
pub mod utils;

use std::path::Path;

use r4mvc_views::{FileSystemViewLocator, View, ViewLocator};

pub use config::{AreaConvention, GeneratorConfig, ProjectConfig};
pub use error::{Error, Result};
pub use generators::controller::ControllerGenerator;
pub use generators::Generator;
pub use model::{DeclarationModel, JsonDeclarationModel, ParsedController};

/// Main entry point for code generation
pub struct CodeGenerator {
    model: JsonDeclarationModel,
    views: Vec<View>,
}

impl CodeGenerator {
    pub fn new(model: JsonDeclarationModel, views: Vec<View>) -> Self {
        Self { model, views }
    }

    /// Load the declaration model from `model_path` and discover the views
    /// under `project_root`.
    pub fn from_project(model_path: &Path, project_root: &Path, config: &ProjectConfig) -> Result<Self> {
        let model = JsonDeclarationModel::load(model_path)?;
        let views = FileSystemViewLocator::new(project_root, config.views.clone()).find_views()?;
        tracing::info!(
            controllers = model.controllers().len(),
            views = views.len(),
            "Loaded project"
        );
        Ok(Self::new(model, views))
    }

    pub fn model(&self) -> &JsonDeclarationModel {
        &self.model
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    /// Run a generator over the loaded model and views
    pub fn generate<G: Generator>(&self, generator: G) -> Result<G::Output> {
        generator.generate(&self.model, &self.views)
    }
}

/// Convenience helper to run the controller generator over a project.
///
/// Returns the number of namespace documents written.
pub fn generate_from_project(
    model_path: &Path,
    project_root: &Path,
    output_dir: &Path,
    config: &ProjectConfig,
) -> Result<usize> {
    let codegen = CodeGenerator::from_project(model_path, project_root, config)?;

    let generator = ControllerGenerator::new(config.generator.clone())?;
    let namespaces = codegen.generate(generator)?;

    let written = utils::write_namespaces(output_dir, &namespaces)?;
    tracing::info!(
        files = written.len(),
        output = %output_dir.display(),
        "Wrote generated declarations"
    );

    Ok(written.len())
}
