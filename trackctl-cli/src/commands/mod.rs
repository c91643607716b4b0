//! Command implementations for the trackctl CLI

pub mod config;
pub mod serve;

pub use config::run_config;
pub use serve::run_serve;
