//! Application service layer - configuration and repository wiring

pub mod config;
pub mod repository;
