//! Column definitions

mod base;

pub use base::{BaseColumn, Column};
