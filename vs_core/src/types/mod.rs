pub mod similarity_matrix;
