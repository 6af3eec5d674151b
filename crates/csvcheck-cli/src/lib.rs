//! Library side of the `csvcheck` binary.

pub mod commands;
pub mod logging;
pub mod summary;
