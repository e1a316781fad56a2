use std::fs;
use std::path::{Path, PathBuf};

use heck::ToSnakeCase;
use r4mvc_syntax::NamespaceDecl;

use crate::error::Result;

/// File name for a namespace node: `App.Areas.Admin.Controllers` becomes
/// `app_areas_admin_controllers.json`.
pub fn namespace_file_name(namespace: &str) -> String {
    format!("{}.json", namespace.to_snake_case())
}

/// Write each namespace node as a pretty-printed JSON document.
/// Creates the directory if it does not exist.
pub fn write_namespaces(output_dir: &Path, namespaces: &[NamespaceDecl]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(namespaces.len());
    for namespace in namespaces {
        let path = output_dir.join(namespace_file_name(&namespace.name));
        let contents = serde_json::to_string_pretty(namespace)?;
        fs::write(&path, contents)?;
        tracing::debug!(path = %path.display(), "Wrote namespace document");
        written.push(path);
    }

    Ok(written)
}
