//! Utility modules for common functionality
//!
//! Provides file operations used by the help command and transcript export.

pub mod fs;

pub use fs::FileSystemUtils;
