//! Discovered view records

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewError};

/// Application-relative virtual path, always of the form `~/a/b/file.ext`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VirtualPath(String);

impl VirtualPath {
    /// Build a virtual path from a path relative to the project root.
    ///
    /// Every component must be a plain UTF-8 name; parent, root and prefix
    /// components as well as `?`, `#` and control characters are rejected.
    pub fn from_relative(relative: &Path) -> Result<Self> {
        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    let part = part
                        .to_str()
                        .ok_or_else(|| ViewError::malformed(relative, "path is not valid UTF-8"))?;
                    check_segment(relative, part)?;
                    segments.push(part);
                }
                Component::CurDir => {}
                _ => {
                    return Err(ViewError::malformed(
                        relative,
                        "path must be relative to the project root",
                    ))
                }
            }
        }
        if segments.is_empty() {
            return Err(ViewError::malformed(relative, "path is empty"));
        }
        Ok(Self(format!("~/{}", segments.join("/"))))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path components after the `~/` marker.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.trim_start_matches("~/").split('/')
    }
}

fn check_segment(relative: &Path, part: &str) -> Result<()> {
    if let Some(bad) = part.chars().find(|c| matches!(c, '?' | '#' | '\\') || c.is_control()) {
        return Err(ViewError::malformed(
            relative,
            format!("character {:?} cannot appear in a virtual path", bad),
        ));
    }
    Ok(())
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for VirtualPath {
    type Error = ViewError;

    fn try_from(value: String) -> Result<Self> {
        if let Some(rest) = value.strip_prefix("~/") {
            return Self::from_relative(Path::new(rest));
        }
        Err(ViewError::malformed(value, "virtual path must start with '~/'"))
    }
}

impl From<VirtualPath> for String {
    fn from(value: VirtualPath) -> Self {
        value.0
    }
}

/// A view or page template found on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub view_name: String,
    pub file_path: PathBuf,
    pub relative_path: VirtualPath,
    pub page_path: String,
    pub is_page: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    pub segments: Vec<String>,
}

impl View {
    /// `segments` is derived from `page_path`: its non-empty `/` parts with
    /// the last one (the file itself) dropped.
    pub fn new(
        view_name: impl Into<String>,
        file_path: impl Into<PathBuf>,
        relative_path: VirtualPath,
        page_path: impl Into<String>,
        is_page: bool,
        area: Option<String>,
    ) -> Self {
        let page_path = page_path.into();
        let mut segments: Vec<String> = page_path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        segments.pop();

        Self {
            view_name: view_name.into(),
            file_path: file_path.into(),
            relative_path,
            page_path,
            is_page,
            area,
            segments,
        }
    }

    /// The path a generated leaf member exposes: the route path for pages,
    /// the virtual file path for classic views.
    pub fn exposed_path(&self) -> &str {
        if self.is_page {
            &self.page_path
        } else {
            self.relative_path.as_str()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vpath(s: &str) -> VirtualPath {
        VirtualPath::from_relative(Path::new(s)).unwrap()
    }

    #[test]
    fn segments_drop_file_leaf() {
        let view = View::new(
            "Index",
            "/app/Pages/Admin/Users/Index.cshtml",
            vpath("Pages/Admin/Users/Index.cshtml"),
            "/Admin/Users/Index",
            true,
            None,
        );
        assert_eq!(view.segments, vec!["Admin", "Users"]);
        assert_eq!(view.exposed_path(), "/Admin/Users/Index");
    }

    #[test]
    fn top_level_view_has_no_segments() {
        let view = View::new(
            "Index",
            "/app/Pages/Index.cshtml",
            vpath("Pages/Index.cshtml"),
            "/Index",
            true,
            None,
        );
        assert!(view.segments.is_empty());
    }

    #[test]
    fn empty_entries_are_ignored() {
        let view = View::new(
            "About",
            "/app/Views/Home/About.cshtml",
            vpath("Views/Home/About.cshtml"),
            "//Home//About",
            false,
            None,
        );
        assert_eq!(view.segments, vec!["Home"]);
        assert_eq!(view.exposed_path(), "~/Views/Home/About.cshtml");
    }

    #[test]
    fn virtual_path_is_slash_normalized() {
        let path: PathBuf = ["Views", "Home", "Index.cshtml"].iter().collect();
        let vp = VirtualPath::from_relative(&path).unwrap();
        assert_eq!(vp.as_str(), "~/Views/Home/Index.cshtml");
        assert_eq!(vp.segments().collect::<Vec<_>>(), vec!["Views", "Home", "Index.cshtml"]);
    }

    #[test]
    fn virtual_path_rejects_malformed_input() {
        assert!(VirtualPath::from_relative(Path::new("../Views/Index.cshtml")).is_err());
        assert!(VirtualPath::from_relative(Path::new("/abs/Index.cshtml")).is_err());
        assert!(VirtualPath::from_relative(Path::new("Views/What?.cshtml")).is_err());
        assert!(VirtualPath::from_relative(Path::new("Views/a#b.cshtml")).is_err());
        assert!(VirtualPath::from_relative(Path::new("")).is_err());
    }

    #[test]
    fn virtual_path_deserializes_with_marker_only() {
        let ok: VirtualPath = serde_json::from_str("\"~/Views/Index.cshtml\"").unwrap();
        assert_eq!(ok.as_str(), "~/Views/Index.cshtml");
        assert!(serde_json::from_str::<VirtualPath>("\"Views/Index.cshtml\"").is_err());
    }
}
