mod error;
mod state;

#[cfg(test)]
mod tests;

pub use error::ChunkError;
pub use state::ChunkState;

use crate::splitter::{DEFAULT_SEPARATOR, SplitError, split_content};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a document instance
pub type DocumentId = Uuid;

/// A content item prepared for one render pass
///
/// Chunk state is render-scoped: it is created by [`Document::attach_chunks`]
/// and discarded with the instance, so only `id` and `content` take part in
/// serialization when exchanging documents with the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Instance identity for this render pass
    pub id: DocumentId,
    /// Raw document text
    pub content: String,
    /// Split results plus read cursor, set at most once per instance
    #[serde(skip)]
    chunks: Option<ChunkState>,
}

/// Strategy for resolving the separator marker for a given document
///
/// This indirection is the only configurability point: the host can swap the
/// marker per document without touching the split logic.
pub trait SeparatorResolver: Send + Sync {
    /// Produce the separator to split this document at
    fn resolve(&self, document: &Document) -> String;
}

/// Resolves to [`DEFAULT_SEPARATOR`] for every document
pub struct DefaultSeparator;

impl SeparatorResolver for DefaultSeparator {
    fn resolve(&self, _document: &Document) -> String {
        DEFAULT_SEPARATOR.to_string()
    }
}

/// Resolves to a fixed separator override
pub struct FixedSeparator(pub String);

impl SeparatorResolver for FixedSeparator {
    fn resolve(&self, _document: &Document) -> String {
        self.0.clone()
    }
}

impl<F> SeparatorResolver for F
where
    F: Fn(&Document) -> String + Send + Sync,
{
    fn resolve(&self, document: &Document) -> String {
        self(document)
    }
}

impl Document {
    /// Create a document with a fresh instance id
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            chunks: None,
        }
    }

    /// Split the content and attach the chunk state, once per instance
    ///
    /// Idempotent: a render pipeline may invoke the attach hook more than once
    /// per document, so re-attaching is a silent no-op, not an error.
    pub fn attach_chunks(&mut self, resolver: &dyn SeparatorResolver) -> Result<(), SplitError> {
        if self.chunks.is_some() {
            return Ok(());
        }

        let separator = resolver.resolve(self);
        let chunks = split_content(&self.content, &separator)?;
        self.chunks = Some(ChunkState::new(chunks));

        Ok(())
    }

    /// Get the attached chunk state, if any
    pub fn chunk_state(&self) -> Option<&ChunkState> {
        self.chunks.as_ref()
    }

    /// Mutable access to the attached chunk state, if any
    pub fn chunk_state_mut(&mut self) -> Option<&mut ChunkState> {
        self.chunks.as_mut()
    }
}
