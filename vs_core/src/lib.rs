pub mod config;
pub mod error;
pub mod logger;
pub mod types;

pub use crate::config::{SimilarityConfig, SimilarityConfigBuilder, Validation};
pub use crate::types::similarity_matrix::SimilarityMatrix;
