use crate::collection::VectorCollection;
use crate::error::{Error, Result};
use tracing::debug;

fn check_collection<T, C>(collection: &C, name: &str, expected: &mut Option<usize>) -> Result<()>
where
    C: VectorCollection<T> + ?Sized,
{
    for i in 0..collection.len() {
        let found = collection.vector(i).len();
        match *expected {
            None => *expected = Some(found),
            Some(expected) if expected != found => {
                debug!(
                    "{} vector {} has dimension {}, expected {}",
                    name, i, found, expected
                );
                return Err(Error::DimensionMismatch { expected, found });
            }
            Some(_) => {}
        }
    }
    Ok(())
}

/// Returns the dimension shared by every vector of both collections.
///
/// The first vector met (references first, then queries) sets the expected
/// dimension. `Ok(None)` means both collections are empty.
pub fn common_dimension<T, R, Q>(references: &R, queries: &Q) -> Result<Option<usize>>
where
    R: VectorCollection<T> + ?Sized,
    Q: VectorCollection<T> + ?Sized,
{
    let mut expected = None;
    check_collection(references, "reference", &mut expected)?;
    check_collection(queries, "query", &mut expected)?;
    Ok(expected)
}
