use crate::error::{Error, Result};

/// An ordered, index-addressable set of vectors.
///
/// The kernel only ever reads from a collection, so anything that can hand out
/// `&[T]` rows by index works: a slice of `Vec`s, a `Vec` of arrays, or a flat
/// row-major buffer through [`RowMajor`].
pub trait VectorCollection<T> {
    fn len(&self) -> usize;

    /// Panics if `i >= self.len()`.
    fn vector(&self, i: usize) -> &[T];

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, V: AsRef<[T]>> VectorCollection<T> for [V] {
    fn len(&self) -> usize {
        <[V]>::len(self)
    }

    fn vector(&self, i: usize) -> &[T] {
        self[i].as_ref()
    }
}

impl<T, V: AsRef<[T]>> VectorCollection<T> for Vec<V> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn vector(&self, i: usize) -> &[T] {
        self[i].as_ref()
    }
}

/// Contiguous row-major view: row `i` is `data[i * dim..(i + 1) * dim]`.
#[derive(Debug, Clone, Copy)]
pub struct RowMajor<'a, T> {
    data: &'a [T],
    dim: usize,
    rows: usize,
}

impl<'a, T> RowMajor<'a, T> {
    pub fn new(data: &'a [T], dim: usize) -> Result<Self> {
        if dim == 0 {
            if !data.is_empty() {
                return Err(Error::RaggedBuffer {
                    len: data.len(),
                    dim,
                });
            }
            return Ok(Self { data, dim, rows: 0 });
        }

        if data.len() % dim != 0 {
            return Err(Error::RaggedBuffer {
                len: data.len(),
                dim,
            });
        }

        Ok(Self {
            data,
            dim,
            rows: data.len() / dim,
        })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

impl<T> VectorCollection<T> for RowMajor<'_, T> {
    fn len(&self) -> usize {
        self.rows
    }

    fn vector(&self, i: usize) -> &[T] {
        assert!(i < self.rows, "row {i} out of bounds for {} rows", self.rows);
        let start = i * self.dim;
        &self.data[start..start + self.dim]
    }
}
