extern crate fnv;
extern crate pathfinding;

#[cfg(test)]
extern crate rand;
#[cfg(test)]
extern crate permutohedron;

pub mod string;
pub mod data_structure;
pub mod assignment;
pub mod prelude;
