//! Core conversion modules
//!
//! This module contains the document tree and the three converters:
//! - `texinfo`: Texinfo source reconstruction
//! - `text`: plain-text extraction
//! - `normalize`: node-name normalization

pub mod context;
pub mod normalize;
pub mod texinfo;
pub mod text;
pub mod tree;

// Re-export main types
pub use context::{ConvertOptions, Converter, DEFAULT_MAX_DEPTH};
pub use normalize::DIGIT_PREFIX;
pub use text::PlainText;
pub use tree::{Element, ElementType};
