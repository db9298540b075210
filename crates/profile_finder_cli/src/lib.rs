//! Profile finder CLI library exports.
//!
//! The binary in `main.rs` is a thin dispatcher over these modules; keeping
//! them in a library makes the commands testable without spawning a process.

pub mod commands;
pub mod config;
pub mod errors;
pub mod output;

#[cfg(test)]
mod test_support;
