//! Cubeman-RS library
//!
//! Command definitions, configuration loading and output helpers behind the
//! `cubeman-rs` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod utils;
