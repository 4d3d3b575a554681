//! Utility functions and helpers.

pub mod format;

// Re-exports for convenience
pub use format::*;
