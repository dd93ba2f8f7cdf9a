//! This module contains helper functionality.

mod error;
pub use self::error::*;

mod timing;
pub use self::timing::Timer;
