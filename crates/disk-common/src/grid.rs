//! Dense row-major 2-D arrays over an evaluation grid.

use crate::{DiskError, DiskResult, GridSize};

/// A 2-D array of shape `(width, height)` stored row-major.
///
/// Element `(i, j)` lives at `i * height + j`, so `j` is the fastest-varying
/// index. This matches the layout expected by image writers that treat the
/// second axis as the image's first (fastest) dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct GridArray<T> {
    size: GridSize,
    data: Vec<T>,
}

impl<T: Copy> GridArray<T> {
    /// Array filled with a single value.
    pub fn filled(size: GridSize, value: T) -> Self {
        Self {
            size,
            data: vec![value; size.cells()],
        }
    }

    /// Wrap existing row-major data.
    pub fn from_vec(size: GridSize, data: Vec<T>) -> DiskResult<Self> {
        if data.len() != size.cells() {
            return Err(DiskError::invalid_argument(
                "data",
                format!(
                    "length {} does not match grid {}x{}",
                    data.len(),
                    size.width(),
                    size.height()
                ),
            ));
        }
        Ok(Self { size, data })
    }

    /// Value at `(i, j)`, or None outside the grid.
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i >= self.size.width() || j >= self.size.height() {
            return None;
        }
        self.data.get(i * self.size.height() + j).copied()
    }

    /// Iterate over `((i, j), value)` in storage order.
    pub fn iter_indexed(&self) -> impl Iterator<Item = ((usize, usize), T)> + '_ {
        let height = self.size.height();
        self.data
            .iter()
            .enumerate()
            .map(move |(k, &v)| ((k / height, k % height), v))
    }

    /// Contiguous rows (fixed `i`), each of length `height`.
    pub fn rows(&self) -> std::slice::Chunks<'_, T> {
        self.data.chunks(self.size.height())
    }
}

impl<T> GridArray<T> {
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// `(width, height)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.size.width(), self.size.height())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_row_major() {
        let size = GridSize::new(2, 3).unwrap();
        let arr = GridArray::from_vec(size, vec![0, 1, 2, 10, 11, 12]).unwrap();

        assert_eq!(arr.shape(), (2, 3));
        assert_eq!(arr.get(0, 2), Some(2));
        assert_eq!(arr.get(1, 0), Some(10));
        assert_eq!(arr.get(2, 0), None);
        assert_eq!(arr.get(0, 3), None);
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let size = GridSize::new(2, 2).unwrap();
        let err = GridArray::from_vec(size, vec![1.0; 3]).unwrap_err();
        assert_eq!(err.kind(), "InvalidArgument");
    }

    #[test]
    fn test_iter_indexed() {
        let size = GridSize::new(2, 2).unwrap();
        let arr = GridArray::from_vec(size, vec![1, 2, 3, 4]).unwrap();
        let items: Vec<_> = arr.iter_indexed().collect();
        assert_eq!(
            items,
            vec![((0, 0), 1), ((0, 1), 2), ((1, 0), 3), ((1, 1), 4)]
        );
        assert_eq!(arr.rows().count(), 2);
    }

    #[test]
    fn test_filled() {
        let size = GridSize::new(4, 5).unwrap();
        let arr = GridArray::filled(size, f64::NAN);
        assert_eq!(arr.as_slice().len(), 20);
        assert!(arr.as_slice().iter().all(|v| v.is_nan()));
    }
}
