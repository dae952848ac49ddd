use std::ops::Index;

/// Dense row-major score matrix. Cell `(i, j)` holds the score between
/// reference `i` and query `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Zero-filled matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Wraps a row-major buffer. Returns `None` when `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != rows * cols {
            return None;
        }
        Some(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.rows || j >= self.cols {
            return None;
        }
        Some(self.data[i * self.cols + j])
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i >= self.rows {
            return None;
        }
        let start = i * self.cols;
        Some(&self.data[start..start + self.cols])
    }

    /// Iterates rows in order. Yields `rows()` empty slices when `cols() == 0`.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |i| {
            let start = i * self.cols;
            &self.data[start..start + self.cols]
        })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable access to the backing buffer, used by the kernel to fill rows in place.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}

impl Index<(usize, usize)> for SimilarityMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of bounds for matrix of shape ({}, {})",
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}
