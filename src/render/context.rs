use super::{DEFAULT_TRANSFORM, TransformRegistry};
use crate::document::{ChunkError, Document};
use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Chunk(#[from] ChunkError),

    #[error("failed to write chunk to output: {0}")]
    Io(#[from] std::io::Error),
}

/// Template-facing accessor surface for one document's chunks
///
/// The host render context constructs one of these per render pass instead of
/// exposing an ambient current-document reference; template code calls the
/// accessors zero or more times while rendering.
pub struct RenderContext<'a> {
    document: &'a mut Document,
    transforms: &'a TransformRegistry,
}

impl<'a> RenderContext<'a> {
    /// Wrap a document and transform registry for one render pass
    pub fn new(document: &'a mut Document, transforms: &'a TransformRegistry) -> Self {
        Self {
            document,
            transforms,
        }
    }

    /// Return a chunk through the default "render" transform
    ///
    /// # Arguments
    /// * `index` - 1-indexed chunk number; `None` reads at the cursor and
    ///   advances it by 1
    pub fn chunk(&mut self, index: Option<usize>) -> Result<String, RenderError> {
        self.chunk_with(index, DEFAULT_TRANSFORM)
    }

    /// Return a chunk through a named transform
    pub fn chunk_with(
        &mut self,
        index: Option<usize>,
        transform: &str,
    ) -> Result<String, RenderError> {
        let raw = self.raw_chunk(index)?;
        Ok(self.transforms.select(transform).apply(&raw))
    }

    /// Return a chunk's raw text, skipping the transform pipeline
    pub fn raw_chunk(&mut self, index: Option<usize>) -> Result<String, RenderError> {
        let state = self
            .document
            .chunk_state_mut()
            .ok_or(ChunkError::NotAttached)?;

        let chunk = match index {
            Some(i) => state.get(i)?,
            None => state.advance()?,
        };

        Ok(chunk.to_string())
    }

    /// Write a chunk to the output stream through the default transform
    ///
    /// Equivalent to [`RenderContext::chunk`] with the result written to `out`
    /// instead of returned.
    pub fn emit(&mut self, out: &mut dyn Write, index: Option<usize>) -> Result<(), RenderError> {
        let chunk = self.chunk(index)?;
        out.write_all(chunk.as_bytes())?;
        Ok(())
    }

    /// Whether there are still chunks to retrieve at the cursor
    ///
    /// False when no chunk state is attached yet.
    pub fn has_more(&self) -> bool {
        self.document
            .chunk_state()
            .is_some_and(|state| state.has_more())
    }
}
