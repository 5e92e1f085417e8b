// Public API exports
pub mod document;
pub mod render;
pub mod splitter;

// Re-export main types for convenience
pub use splitter::{DEFAULT_SEPARATOR, SplitError, split_content};

pub use document::{
    ChunkError, ChunkState, DefaultSeparator, Document, DocumentId, FixedSeparator,
    SeparatorResolver,
};

pub use render::{
    DEFAULT_TRANSFORM, Passthrough, RenderContext, RenderError, Transform, TransformRegistry,
};
