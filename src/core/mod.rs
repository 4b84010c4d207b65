//! Shared infrastructure: terminal output and version handling

pub mod output;
pub mod version;
