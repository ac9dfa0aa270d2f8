//! CLI command implementations.

pub mod categories;
pub mod info;
pub mod normalize;
