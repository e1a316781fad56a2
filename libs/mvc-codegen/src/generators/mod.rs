//! Code generators
//!
//! Each generator turns the declaration model plus the discovered views into
//! some output by implementing [`Generator`].

pub mod controller;

use r4mvc_views::View;

use crate::error::Result;
use crate::model::DeclarationModel;

/// Trait that all generators implement
pub trait Generator {
    /// The output type of this generator
    type Output;

    /// Generate output from the declaration model and the discovered views
    fn generate(&self, model: &dyn DeclarationModel, views: &[View]) -> Result<Self::Output>;
}
