//! Command registry
//!
//! Builtin and user-defined commands share one `u16` id space. Ids with
//! [`USER_COMMAND_BIT`] set index the user table, all others index the
//! builtin table, so [`Registry::info`] resolves either without the caller
//! knowing which partition an id belongs to.

use std::fmt;

use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use lazy_static::lazy_static;

use super::commands::{Builtin, CommandFlags, CommandInfo, MiscArgs};
use crate::utils::error::{RegistryError, RegistryResult};

/// Command ids with this bit set name a user-defined command.
pub const USER_COMMAND_BIT: u16 = 0x8000;

/// Largest number of user-defined commands a registry can hold.
pub const MAX_USER_COMMANDS: usize = USER_COMMAND_BIT as usize;

lazy_static! {
    /// Registry holding only the builtin commands
    static ref BUILTIN_REGISTRY: Registry = Registry::new();
}

/// Identifier of a builtin or user-defined command.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandId(u16);

impl CommandId {
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn is_user_defined(self) -> bool {
        self.0 & USER_COMMAND_BIT != 0
    }

    /// The builtin this id names, if it is a builtin id.
    pub fn builtin(self) -> Option<Builtin> {
        if self.is_user_defined() {
            None
        } else {
            Builtin::from_id(self.0)
        }
    }

    /// Index into the user table, if this is a user-defined id.
    pub fn user_index(self) -> Option<usize> {
        if self.is_user_defined() {
            Some((self.0 & !USER_COMMAND_BIT) as usize)
        } else {
            None
        }
    }

    fn user(index: usize) -> Self {
        Self(index as u16 | USER_COMMAND_BIT)
    }
}

impl From<Builtin> for CommandId {
    fn from(builtin: Builtin) -> Self {
        Self(builtin.id())
    }
}

impl PartialEq<Builtin> for CommandId {
    fn eq(&self, other: &Builtin) -> bool {
        self.0 == other.id()
    }
}

impl fmt::Debug for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.builtin(), self.user_index()) {
            (Some(builtin), _) => write!(f, "CommandId({:?})", builtin),
            (None, Some(index)) => write!(f, "CommandId(user #{})", index),
            (None, None) => write!(f, "CommandId({:#06x})", self.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UserCommand {
    flags: CommandFlags,
    data: i32,
}

/// Read-mostly table of command descriptors.
///
/// Populated once at startup (builtins are static, user commands are added
/// as the document defines macros and indices) and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    user: IndexMap<String, UserCommand, FxBuildHasher>,
}

impl Registry {
    /// Create a registry containing only the builtin commands
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared registry with no user-defined commands
    pub fn builtin() -> &'static Registry {
        &BUILTIN_REGISTRY
    }

    /// Find a command by name. User-defined commands shadow builtins.
    pub fn lookup(&self, name: &str) -> Option<CommandId> {
        if let Some(index) = self.user.get_index_of(name) {
            return Some(CommandId::user(index));
        }
        Builtin::from_name(name).map(CommandId::from)
    }

    /// Register a user command with no flags, as `@macro` or `@alias` do.
    pub fn add_texinfo_command(&mut self, name: &str) -> RegistryResult<CommandId> {
        self.define(name, CommandFlags::empty(), 0)
    }

    /// Register or redefine a user command.
    ///
    /// Redefining keeps the command's id and replaces its descriptor.
    pub fn define(
        &mut self,
        name: &str,
        flags: CommandFlags,
        data: i32,
    ) -> RegistryResult<CommandId> {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if !self.user.contains_key(name) && self.user.len() >= MAX_USER_COMMANDS {
            return Err(RegistryError::TooManyCommands {
                limit: MAX_USER_COMMANDS,
            });
        }
        let (index, previous) = self
            .user
            .insert_full(name.to_string(), UserCommand { flags, data });
        if previous.is_some() {
            log::debug!("redefined user command @{}", name);
        }
        Ok(CommandId::user(index))
    }

    /// Register the entry command of a new index, as `@defindex NAME` does.
    pub fn add_index(&mut self, name: &str) -> RegistryResult<CommandId> {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        self.define(
            &format!("{}index", name),
            CommandFlags::MISC | CommandFlags::INDEX_ENTRY_COMMAND,
            MiscArgs::Line.code(),
        )
    }

    /// Descriptor of `id`. Unknown ids resolve to [`CommandInfo::EMPTY`].
    pub fn info(&self, id: CommandId) -> CommandInfo<'_> {
        if let Some(index) = id.user_index() {
            return match self.user.get_index(index) {
                Some((name, command)) => CommandInfo {
                    name: name.as_str(),
                    flags: command.flags,
                    data: command.data,
                },
                None => {
                    log::debug!("unresolved user command id {:?}", id);
                    CommandInfo::EMPTY
                }
            };
        }
        match Builtin::from_id(id.raw()) {
            Some(builtin) => builtin.info(),
            None => {
                log::debug!("unresolved builtin command id {:?}", id);
                CommandInfo::EMPTY
            }
        }
    }

    pub fn flags_of(&self, id: CommandId) -> CommandFlags {
        self.info(id).flags
    }

    pub fn name_of(&self, id: CommandId) -> &str {
        self.info(id).name
    }

    pub fn data_of(&self, id: CommandId) -> i32 {
        self.info(id).data
    }

    /// Number of user-defined commands
    pub fn user_command_count(&self) -> usize {
        self.user.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let registry = Registry::new();
        let id = registry.lookup("code").unwrap();
        assert!(!id.is_user_defined());
        assert_eq!(id.builtin(), Some(Builtin::code));
        assert_eq!(registry.name_of(id), "code");
        assert!(registry.flags_of(id).is_brace());
        assert_eq!(registry.lookup("nosuchcommand"), None);
    }

    #[test]
    fn test_user_commands_have_high_bit() {
        let mut registry = Registry::new();
        let first = registry.add_texinfo_command("mymacro").unwrap();
        let second = registry.add_texinfo_command("other").unwrap();
        assert!(first.is_user_defined());
        assert_eq!(first.raw(), 0x8000);
        assert_eq!(second.raw(), 0x8001);
        assert_eq!(first.builtin(), None);
        assert_eq!(registry.name_of(second), "other");
        assert_eq!(registry.flags_of(first), CommandFlags::empty());
    }

    #[test]
    fn test_user_command_shadows_builtin() {
        let mut registry = Registry::new();
        let id = registry
            .define("code", CommandFlags::MACRO, 0)
            .unwrap();
        assert_eq!(registry.lookup("code"), Some(id));
        assert!(registry.flags_of(id).contains(CommandFlags::MACRO));
    }

    #[test]
    fn test_redefine_keeps_id() {
        let mut registry = Registry::new();
        let id = registry.add_texinfo_command("foo").unwrap();
        let again = registry.define("foo", CommandFlags::BRACE, 2).unwrap();
        assert_eq!(id, again);
        assert_eq!(registry.data_of(id), 2);
        assert_eq!(registry.user_command_count(), 1);
    }

    #[test]
    fn test_add_index() {
        let mut registry = Registry::new();
        let id = registry.add_index("foo").unwrap();
        assert_eq!(registry.lookup("fooindex"), Some(id));
        let info = registry.info(id);
        assert!(info.flags.is_index_entry());
        assert_eq!(info.misc_args(), Some(MiscArgs::Line));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut registry = Registry::new();
        assert!(matches!(
            registry.add_texinfo_command(""),
            Err(RegistryError::EmptyName)
        ));
        assert!(matches!(registry.add_index(""), Err(RegistryError::EmptyName)));
    }

    #[test]
    fn test_unknown_ids_resolve_empty() {
        let registry = Registry::new();
        let user = CommandId::from_raw(USER_COMMAND_BIT | 7);
        assert_eq!(registry.info(user), CommandInfo::EMPTY);
        let builtin = CommandId::from_raw(0x7fff);
        assert_eq!(registry.name_of(builtin), "");
        assert_eq!(registry.data_of(builtin), 0);
    }

    #[test]
    fn test_shared_builtin_registry() {
        let registry = Registry::builtin();
        assert_eq!(registry.user_command_count(), 0);
        assert_eq!(
            registry.lookup("@"),
            Some(CommandId::from(Builtin::AT_SIGN))
        );
    }
}
