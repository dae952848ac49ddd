use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] vs_core::error::ErrorCore),

    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Row-major buffer of length {len} cannot be split into rows of dimension {dim}")]
    RaggedBuffer { len: usize, dim: usize },
}

pub type Result<T> = std::result::Result<T, crate::error::Error>;
