//! Filesystem view discovery

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::ViewLocatorConfig;
use crate::error::{Result, ViewError};
use crate::view::{View, VirtualPath};

/// Source of discovered views.
pub trait ViewLocator {
    fn find_views(&self) -> Result<Vec<View>>;
}

/// In-memory view lists, used when views are already known.
impl ViewLocator for Vec<View> {
    fn find_views(&self) -> Result<Vec<View>> {
        Ok(self.clone())
    }
}

/// Walks a project root and yields one [`View`] per template under a
/// `Pages` or `Views` convention folder, sorted by path.
#[derive(Debug, Clone)]
pub struct FileSystemViewLocator {
    root: PathBuf,
    config: ViewLocatorConfig,
}

impl FileSystemViewLocator {
    pub fn new(root: impl Into<PathBuf>, config: ViewLocatorConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        let Some(name) = entry.file_name().to_str() else {
            return false;
        };
        if name.starts_with('.') {
            return true;
        }
        entry.file_type().is_dir() && self.config.excluded_directories.iter().any(|d| d == name)
    }

    /// Whether `relative` sits below the page or view folder, optionally
    /// inside `Areas/<X>/`, compared on raw path components.
    fn in_convention_folder(&self, relative: &Path) -> bool {
        let components: Vec<&OsStr> = relative.iter().collect();
        let rest = match components.as_slice() {
            [areas, _, rest @ ..]
                if *areas == OsStr::new(&self.config.areas_folder) && rest.len() > 1 =>
            {
                rest
            }
            _ => components.as_slice(),
        };
        match rest {
            [folder, _, ..] => {
                *folder == OsStr::new(&self.config.pages_folder)
                    || *folder == OsStr::new(&self.config.views_folder)
            }
            _ => false,
        }
    }

    /// Build a view from a template path relative to the root, or `None`
    /// when the file is not under a convention folder.
    fn classify(&self, file_path: &Path, relative: &Path) -> Result<Option<View>> {
        // Only files under a convention folder are views; anything else is
        // skipped before its path is validated.
        if !self.in_convention_folder(relative) {
            return Ok(None);
        }

        let virtual_path = VirtualPath::from_relative(relative)?;
        let segments: Vec<&str> = virtual_path.segments().collect();

        let (area, rest) = match segments.as_slice() {
            [areas, area, rest @ ..] if *areas == self.config.areas_folder && rest.len() > 1 => {
                (Some(area.to_string()), rest)
            }
            _ => (None, segments.as_slice()),
        };

        let is_page = match rest.first() {
            Some(folder) if *folder == self.config.pages_folder => true,
            Some(folder) if *folder == self.config.views_folder => false,
            _ => return Ok(None),
        };
        let below = &rest[1..];
        let Some((file_name, dirs)) = below.split_last() else {
            return Ok(None);
        };

        let view_name = Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ViewError::malformed(relative, "template has no file name"))?
            .to_string();

        let mut page_path = String::new();
        for part in area.iter().map(String::as_str).chain(dirs.iter().copied()) {
            page_path.push('/');
            page_path.push_str(part);
        }
        page_path.push('/');
        page_path.push_str(&view_name);

        Ok(Some(View::new(
            view_name,
            file_path,
            virtual_path,
            page_path,
            is_page,
            area,
        )))
    }
}

impl ViewLocator for FileSystemViewLocator {
    fn find_views(&self) -> Result<Vec<View>> {
        let root = fs::canonicalize(&self.root)?;
        let mut views = Vec::new();

        let walker = WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();

            let is_template = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| self.config.is_template_extension(e));
            if !is_template {
                continue;
            }

            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            if self.config.excluded_files.iter().any(|f| f == stem) {
                tracing::trace!(path = %path.display(), "skipping layout file");
                continue;
            }

            let relative = path
                .strip_prefix(&root)
                .map_err(|_| ViewError::malformed(path, "file is outside the project root"))?;

            match self.classify(path, relative)? {
                Some(view) => views.push(view),
                None => {
                    tracing::debug!(path = %relative.display(), "template outside convention folders");
                }
            }
        }

        tracing::info!(
            root = %root.display(),
            views = views.len(),
            pages = views.iter().filter(|v| v.is_page).count(),
            "View scan complete"
        );

        Ok(views)
    }
}
