use super::ChunkError;

/// Split results plus the read cursor for sequential iteration
///
/// The cursor is 1-indexed and starts at 1; it only moves forward, and only
/// through [`ChunkState::advance`]. There is no reset: a new `Document`
/// instance restarts iteration.
#[derive(Debug, Clone)]
pub struct ChunkState {
    chunks: Vec<String>,
    cursor: usize,
}

impl ChunkState {
    /// Wrap a chunk list with the cursor at the first chunk
    pub(crate) fn new(chunks: Vec<String>) -> Self {
        Self { chunks, cursor: 1 }
    }

    /// Resolve a 1-indexed chunk
    pub fn get(&self, index: usize) -> Result<&str, ChunkError> {
        if index == 0 || index > self.chunks.len() {
            return Err(ChunkError::OutOfRange {
                index,
                len: self.chunks.len(),
            });
        }

        Ok(&self.chunks[index - 1])
    }

    /// Read the chunk at the cursor and advance the cursor by 1
    ///
    /// The cursor moves even when the read lands out of range, matching the
    /// read-then-advance semantics templates rely on; guard with
    /// [`ChunkState::has_more`] to stop cleanly.
    pub fn advance(&mut self) -> Result<&str, ChunkError> {
        let index = self.cursor;
        self.cursor += 1;
        self.get(index)
    }

    /// Whether there are still chunks to retrieve at the cursor
    pub fn has_more(&self) -> bool {
        self.cursor <= self.chunks.len()
    }

    /// Number of chunks, always at least 1
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// The split never yields an empty chunk list, so this is always false
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// The 1-indexed position the next advancing read will use
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
