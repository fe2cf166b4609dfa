//! Library side of the `housing-clean` binary.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
