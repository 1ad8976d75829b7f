pub mod matrix;
pub mod unique_array;
pub mod disjoint_set;
