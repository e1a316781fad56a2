//! View and page discovery
//!
//! Scans a project root for template files, classifies each one as a page
//! (under `Pages/`) or a classic view (under `Views/`), and records the
//! project-relative virtual path plus the directory segments used to build
//! a nested path class hierarchy.
//!
//! # Example
//!
//! ```rust,no_run
//! use r4mvc_views::{FileSystemViewLocator, ViewLocator, ViewLocatorConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let locator = FileSystemViewLocator::new("./MyApp", ViewLocatorConfig::default());
//! for view in locator.find_views()? {
//!     println!("{} -> {:?}", view.relative_path, view.segments);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod locator;
pub mod view;

pub use config::ViewLocatorConfig;
pub use error::{Result, ViewError};
pub use locator::{FileSystemViewLocator, ViewLocator};
pub use view::{View, VirtualPath};
