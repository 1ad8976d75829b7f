//! Maximum-weight bipartite assignment between the rows and the columns of a score matrix.
//!
//! The search itself is delegated to the Kuhn-Munkres implementation of `pathfinding`, which needs
//! an integer weight type and at least as many columns as rows. Scores are therefore converted to
//! fixed point, and the matrix is transposed when it has more rows than columns.

use pathfinding::kuhn_munkres::kuhn_munkres;
use pathfinding::matrix::Matrix as FixedPointMatrix;
use data_structure::matrix::Matrix;

/// Number of fixed-point units per 1.0 of score
pub const WEIGHT_SCALE: f64 = 1e9;

#[inline]
fn to_fixed_point(weight: f64) -> i64 {
    if weight.is_finite() {
        (weight * WEIGHT_SCALE).round() as i64
    } else {
        0
    }
}

/// Solve the assignment problem maximizing the total weight.
///
/// Returns, for every row, the column it is assigned to. At most `min(n_rows, n_cols)` rows get a
/// column and no column is used twice. A row may be assigned to a column of weight 0 when there is
/// nothing better left for it; callers decide what such a pairing means.
pub fn max_weight_assignment(weights: &Matrix<f64>) -> Vec<Option<usize>> {
    let (n_rows, n_cols) = weights.shape();
    let mut row2col = vec![None; n_rows];
    if weights.is_empty() {
        return row2col;
    }

    let transpose = n_rows > n_cols;
    let (n, m) = if transpose { (n_cols, n_rows) } else { (n_rows, n_cols) };
    let mut fixed_point = FixedPointMatrix::new(n, m, 0i64);
    for i in 0..n_rows {
        for j in 0..n_cols {
            let w = to_fixed_point(weights[(i, j)]);
            if transpose {
                fixed_point[(j, i)] = w;
            } else {
                fixed_point[(i, j)] = w;
            }
        }
    }

    let (_total, assignment) = kuhn_munkres(&fixed_point);
    for (i, &j) in assignment.iter().enumerate() {
        if transpose {
            row2col[j] = Some(i);
        } else {
            row2col[i] = Some(j);
        }
    }

    row2col
}
