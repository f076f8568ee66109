//! # texiconv
//!
//! Output-conversion layer for parsed Texinfo document trees.
//!
//! ## Features
//!
//! - **Source reconstruction**: re-emit Texinfo markup for a subtree
//! - **Plain text**: flatten a label to literal text, flagging markup that
//!   cannot be flattened
//! - **Node-name normalization**: compute the cross-reference identifier of a
//!   node name, identical to the one every other renderer computes
//! - **User commands**: registry of macros and index commands sharing the
//!   builtin id space
//!
//! ## Usage Examples
//!
//! ```rust
//! use texiconv::{normalize_identifier, serialize_to_source, Builtin, Element, ElementType};
//!
//! let heading = Element::new(ElementType::MiscLineArg).with_contents([
//!     Element::command(Builtin::code).with_arg(Element::brace_arg([Element::text("ls")])),
//!     Element::text(" invocation"),
//! ]);
//!
//! assert_eq!(normalize_identifier(&heading), "ls-invocation");
//! assert_eq!(serialize_to_source(&heading), "@code{ls} invocation");
//! ```
//!
//! ### Custom registry
//!
//! ```rust
//! use texiconv::{Converter, Element, Registry};
//!
//! let mut registry = Registry::new();
//! let id = registry.add_texinfo_command("mymacro").unwrap();
//! let converter = Converter::with_registry(&registry);
//!
//! let el = Element::command(id);
//! assert_eq!(converter.serialize_to_source(&el), "@mymacro");
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - static command tables
pub mod data;

/// Utility modules
pub mod utils;

// Re-export core types
pub use crate::core::{ConvertOptions, Converter, Element, ElementType, PlainText, DEFAULT_MAX_DEPTH};

// Re-export data types
pub use data::{
    BlockKind, BraceKind, Builtin, CommandFlags, CommandId, CommandInfo, MiscArgs, Registry,
    USER_COMMAND_BIT,
};

// Re-export utilities
pub use utils::error::{RegistryError, RegistryResult};

/// Reconstruct Texinfo source for `root`
///
/// Uses the builtin registry. An absent root yields an empty string.
pub fn serialize_to_source<'e>(root: impl Into<Option<&'e Element>>) -> String {
    Converter::new().serialize_to_source(root)
}

/// Extract plain text from the contents of `root`
///
/// Check [`PlainText::superfluous`] before trusting the text.
pub fn extract_plain_text<'e>(root: impl Into<Option<&'e Element>>) -> PlainText {
    Converter::new().extract_plain_text(root)
}

/// Compute the normalized node identifier of `root`
///
/// The result contains only ASCII letters, digits, `-` and `_`, plus braces
/// for bracketed groups and the literal `@tie` and `@error` expansions.
pub fn normalize_identifier<'e>(root: impl Into<Option<&'e Element>>) -> String {
    Converter::new().normalize_identifier(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions_on_absent_root() {
        let absent: Option<&Element> = None;
        assert_eq!(serialize_to_source(absent), "");
        assert_eq!(normalize_identifier(absent), "");
        let plain = extract_plain_text(absent);
        assert_eq!(plain.text, "");
        assert!(!plain.superfluous);
    }

    #[test]
    fn test_free_functions_on_text() {
        let el = Element::text("Foo Bar");
        assert_eq!(serialize_to_source(&el), "Foo Bar");
        assert_eq!(normalize_identifier(&el), "Foo-Bar");
    }

    #[test]
    fn test_ellipsis_identifier() {
        let el = Element::command(Builtin::dots).with_arg(Element::new(ElementType::BraceCommandArg));
        assert_eq!(normalize_identifier(&el), "_2026");
    }
}
