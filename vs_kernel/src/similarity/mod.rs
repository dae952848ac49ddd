pub(crate) mod cosine;
pub(crate) mod matrix;
pub(crate) mod validate;

pub use crate::similarity::cosine::cosine_similarity;
pub use crate::similarity::matrix::compute_similarity_matrix;
pub use crate::similarity::matrix::compute_similarity_matrix_with;
pub use crate::similarity::validate::common_dimension;
