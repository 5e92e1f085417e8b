mod context;
mod passthrough;
mod registry;


pub use context::{RenderContext, RenderError};
pub use passthrough::Passthrough;
pub use registry::TransformRegistry;

/// Name of the host's standard content-rendering transform
pub const DEFAULT_TRANSFORM: &str = "render";

/// A named post-processing step applied to a chunk's raw text before display
///
/// The pipeline is opaque to the chunk logic: the host registers whatever
/// `(name, text) -> text` functions its rendering stack provides.
pub trait Transform: Send + Sync {
    /// Transform raw chunk text into its display form
    fn apply(&self, text: &str) -> String;
}
