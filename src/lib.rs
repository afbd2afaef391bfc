pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod counter;
pub mod diff;
pub mod error;
pub mod formatter;
pub mod output;
pub mod render;
pub mod scanner;
pub mod score;

pub use error::{Result, StyleError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
