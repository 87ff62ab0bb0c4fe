//! OpenRW game shell library
//!
//! Typed game configuration merged from the command line, an INI settings
//! file and compiled-in defaults.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod paths;
