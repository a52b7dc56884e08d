//! CLI module for the decant command-line interface
//!
//! Argument parsing lives in [`args`]; [`commands`] turns parsed arguments
//! into library calls.

pub mod args;
pub mod commands;
