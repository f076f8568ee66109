//! Utility modules
//!
//! This module contains utilities and helpers:
//! - The output buffer the converters write into
//! - Error types and result types

pub mod buffer;
pub mod error;

// Re-export commonly used items
pub use buffer::OutputBuffer;
pub use error::{RegistryError, RegistryResult};
