//! Rental Registry CLI library
//!
//! Command-line surface, interactive session and output rendering for the
//! `rental-registry` binary.

pub mod cli;
pub mod commands;
pub mod output;
pub mod parse;
pub mod session;
