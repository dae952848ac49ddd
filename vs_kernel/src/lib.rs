pub mod collection;
pub mod error;
pub mod similarity;

pub use crate::collection::{RowMajor, VectorCollection};
pub use crate::error::{Error, Result};
pub use crate::similarity::{
    common_dimension, compute_similarity_matrix, compute_similarity_matrix_with,
    cosine_similarity,
};
pub use vs_core::{SimilarityConfig, SimilarityConfigBuilder, SimilarityMatrix, Validation};
