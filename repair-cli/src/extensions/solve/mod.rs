//! Solve command helpers.

pub mod config;
