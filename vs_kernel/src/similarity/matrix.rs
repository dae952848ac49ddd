use crate::collection::VectorCollection;
use crate::error::Result;
use crate::similarity::cosine::cosine_similarity;
use crate::similarity::validate::common_dimension;
use rayon::prelude::*;
use tracing::debug;
use vs_core::{SimilarityConfig, SimilarityMatrix, Validation};

fn fill_row<T, Q>(reference: &[T], queries: &Q, row: &mut [f64]) -> Result<()>
where
    T: Copy + Into<f64>,
    Q: VectorCollection<T> + ?Sized,
{
    for (j, cell) in row.iter_mut().enumerate() {
        *cell = cosine_similarity(reference, queries.vector(j))?;
    }
    Ok(())
}

/// All-vs-all cosine similarity with the default [`SimilarityConfig`].
///
/// `scores[(i, j)]` holds the score between `references[i]` and `queries[j]`.
pub fn compute_similarity_matrix<T, R, Q>(references: &R, queries: &Q) -> Result<SimilarityMatrix>
where
    T: Copy + Into<f64> + Sync,
    R: VectorCollection<T> + Sync + ?Sized,
    Q: VectorCollection<T> + Sync + ?Sized,
{
    compute_similarity_matrix_with(references, queries, &SimilarityConfig::default())
}

/// All-vs-all cosine similarity.
///
/// The output has shape `(references.len(), queries.len())`. Any dimension
/// mismatch aborts the whole computation and no partial matrix escapes.
///
/// With [`Validation::Eager`] every vector is checked before the first cell
/// is computed; with [`Validation::Lazy`] the first mismatched pair met while
/// filling the matrix fails. Rows go through the rayon pool when
/// [`SimilarityConfig::runs_parallel`] says so. Each worker owns a disjoint
/// row of the output, so no locking is involved.
pub fn compute_similarity_matrix_with<T, R, Q>(
    references: &R,
    queries: &Q,
    config: &SimilarityConfig,
) -> Result<SimilarityMatrix>
where
    T: Copy + Into<f64> + Sync,
    R: VectorCollection<T> + Sync + ?Sized,
    Q: VectorCollection<T> + Sync + ?Sized,
{
    let size1 = references.len();
    let size2 = queries.len();

    if config.validation == Validation::Eager {
        let dim = common_dimension(references, queries)?;
        debug!("Validated collections with common dimension {:?}", dim);
    }

    let mut scores = SimilarityMatrix::zeros(size1, size2);
    if size1 == 0 || size2 == 0 {
        return Ok(scores);
    }

    let parallel = config.runs_parallel(size1);
    debug!(
        "Computing {}x{} similarity matrix ({} validation, {})",
        size1,
        size2,
        config.validation,
        if parallel { "parallel" } else { "sequential" }
    );

    if parallel {
        scores
            .as_mut_slice()
            .par_chunks_mut(size2)
            .enumerate()
            .try_for_each(|(i, row)| fill_row(references.vector(i), queries, row))?;
    } else {
        for (i, row) in scores.as_mut_slice().chunks_mut(size2).enumerate() {
            fill_row(references.vector(i), queries, row)?;
        }
    }

    Ok(scores)
}
