// Utility functions module
pub mod config;
pub mod ranking;
pub mod retry;
