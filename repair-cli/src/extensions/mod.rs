//! Contains command line extensions: solver configuration, checking and problem generation.

pub mod check;
pub mod generate;
pub mod solve;
