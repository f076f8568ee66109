//! Output accumulator shared by the converters
//!
//! A conversion owns exactly one buffer for its whole duration and turns it
//! into the returned `String` at the end. Appends are amortized by `String`'s
//! geometric growth.

use std::fmt::Write;

/// Append-only text buffer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputBuffer {
    text: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
        }
    }

    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    /// Append `s` with ASCII letters upper-cased.
    pub fn push_upper(&mut self, s: &str) {
        self.text.extend(s.chars().map(|c| c.to_ascii_uppercase()));
    }

    /// Append the `_00xx` escape of one byte (two lower-case hex digits).
    pub fn push_byte_escape(&mut self, byte: u8) {
        // Writing to a String cannot fail
        let _ = write!(self.text, "_00{:02x}", byte);
    }

    pub fn first_byte(&self) -> Option<u8> {
        self.text.as_bytes().first().copied()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Prepend `prefix`. Only used once per conversion, on the final result.
    pub fn prepend(&mut self, prefix: &str) {
        self.text.insert_str(0, prefix);
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl From<OutputBuffer> for String {
    fn from(buffer: OutputBuffer) -> Self {
        buffer.into_string()
    }
}
