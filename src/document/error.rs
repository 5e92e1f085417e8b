use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChunkError {
    #[error("chunk index {index} out of range (1..={len})")]
    OutOfRange { index: usize, len: usize },

    #[error("document has no chunk state attached")]
    NotAttached,
}
