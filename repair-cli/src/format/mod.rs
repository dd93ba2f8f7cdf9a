//! Specifies problem and solution formats used by the command line interface.

mod problem;
pub use self::problem::*;

mod solution;
pub use self::solution::*;
