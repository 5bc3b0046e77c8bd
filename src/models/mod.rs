// Data models module
pub mod stats;
