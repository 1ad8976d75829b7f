// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate serde_yaml;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate algorithm;
extern crate fnv;
extern crate itertools;
extern crate regex;
extern crate time;

pub mod errors;
pub mod models;
pub mod input;
pub mod canonicalization;
pub mod similarity;
pub mod evaluation_metrics;
pub mod evaluation;
pub mod settings;
pub mod utils;
pub mod prelude;
