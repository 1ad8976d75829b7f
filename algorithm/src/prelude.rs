pub use data_structure::matrix::Matrix;
pub use data_structure::unique_array::UniqueArray;
pub use data_structure::disjoint_set::DisjointSet;
pub use assignment::max_weight_assignment;
