//! Infrastructure layer - file-backed persistence for the rental registry

pub mod persistence;
