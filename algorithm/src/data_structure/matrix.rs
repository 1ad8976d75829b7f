use std::ops::Index;
use std::fmt::Debug;

/// Dense row-major 2d array, used to hold pairwise scores between two lists (rows = first list,
/// columns = second list)
#[derive(Debug, Clone)]
pub struct Matrix<T: Clone + Debug> {
    value: Vec<T>,
    n_row: usize,
    n_col: usize
}

impl<T: Clone + Debug> Matrix<T> {
    /// Build a matrix by evaluating `func(i, j)` for every cell
    pub fn from_fn<F>(n_row: usize, n_col: usize, mut func: F) -> Matrix<T>
        where F: FnMut(usize, usize) -> T {
        let mut value = Vec::with_capacity(n_row * n_col);
        for i in 0..n_row {
            for j in 0..n_col {
                value.push(func(i, j));
            }
        }

        Matrix { value, n_row, n_col }
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_row, self.n_col)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_row == 0 || self.n_col == 0
    }
}

impl<T: Clone + Debug> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index<'a>(&'a self, idx: (usize, usize)) -> &'a T {
        &self.value[self.n_col * idx.0 + idx.1]
    }
}
