//! Data layer - Static command tables
//!
//! This module contains all static data used by the converters:
//! - Builtin command descriptors and flags
//! - The command registry (builtin and user-defined ids)
//! - Fixed glyph expansions for node-name normalization

pub mod commands;
pub mod glyphs;
pub mod registry;

// Re-export commonly used items
pub use commands::{BlockKind, BraceKind, Builtin, CommandFlags, CommandInfo, MiscArgs};
pub use glyphs::{glyph_expansion, nobrace_form, NobraceForm};
pub use registry::{CommandId, Registry, MAX_USER_COMMANDS, USER_COMMAND_BIT};
