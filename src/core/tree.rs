//! Document tree consumed by the converters
//!
//! Trees are built by the parser and are read-only here. Each element owns
//! its argument and content children outright; the converters never need
//! to walk upwards.

use std::fmt;

use crate::data::commands::Builtin;
use crate::data::registry::CommandId;

/// Syntactic kind of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ElementType {
    /// Plain element without a specific kind (text runs, commands)
    #[default]
    Normal,
    CommandAsArgument,
    DocumentRoot,
    RootLine,
    Preamble,
    PreambleBeforeContent,
    TextBeforeBeginning,

    // Whitespace markers kept by the parser
    EmptyLine,
    EmptyLineAfterCommand,
    EmptySpacesAfterCommand,
    EmptySpacesBeforeArgument,
    EmptySpacesAfterCloseBrace,
    EmptySpacesBeforeParagraph,
    EmptySpaceAtEndDefBracketed,
    SpacesAtEnd,
    SpaceAtEndMenuNode,

    // Arguments
    BraceCommandArg,
    BraceCommandContext,
    BlockLineArg,
    MiscLineArg,
    MiscArg,
    Bracketed,
    BracketedDefContent,
    BracketedMultitablePrototype,
    RowPrototype,

    // Block content
    Paragraph,
    Preformatted,
    RawPreformatted,
    Raw,
    LastRawNewline,
    Elided,
    ElidedBlock,
    MacroName,
    MacroArg,

    // Menus
    MenuEntry,
    MenuEntryLeadingText,
    MenuEntryName,
    MenuEntrySeparator,
    MenuEntryNode,
    MenuEntryDescription,
    MenuComment,

    // Tables and definitions
    BeforeItem,
    TableEntry,
    TableTerm,
    TableItem,
    InterItem,
    MultitableHead,
    MultitableBody,
    Row,
    DefLine,
    DefItem,
    InterDefItem,

    /// `@verb` element; the tag carries the delimiter character
    Verb(char),
}

impl ElementType {
    pub fn name(self) -> &'static str {
        match self {
            ElementType::Normal => "normal",
            ElementType::CommandAsArgument => "command_as_argument",
            ElementType::DocumentRoot => "document_root",
            ElementType::RootLine => "root_line",
            ElementType::Preamble => "preamble",
            ElementType::PreambleBeforeContent => "preamble_before_content",
            ElementType::TextBeforeBeginning => "text_before_beginning",
            ElementType::EmptyLine => "empty_line",
            ElementType::EmptyLineAfterCommand => "empty_line_after_command",
            ElementType::EmptySpacesAfterCommand => "empty_spaces_after_command",
            ElementType::EmptySpacesBeforeArgument => "empty_spaces_before_argument",
            ElementType::EmptySpacesAfterCloseBrace => "empty_spaces_after_close_brace",
            ElementType::EmptySpacesBeforeParagraph => "empty_spaces_before_paragraph",
            ElementType::EmptySpaceAtEndDefBracketed => "empty_space_at_end_def_bracketed",
            ElementType::SpacesAtEnd => "spaces_at_end",
            ElementType::SpaceAtEndMenuNode => "space_at_end_menu_node",
            ElementType::BraceCommandArg => "brace_command_arg",
            ElementType::BraceCommandContext => "brace_command_context",
            ElementType::BlockLineArg => "block_line_arg",
            ElementType::MiscLineArg => "misc_line_arg",
            ElementType::MiscArg => "misc_arg",
            ElementType::Bracketed => "bracketed",
            ElementType::BracketedDefContent => "bracketed_def_content",
            ElementType::BracketedMultitablePrototype => "bracketed_multitable_prototype",
            ElementType::RowPrototype => "row_prototype",
            ElementType::Paragraph => "paragraph",
            ElementType::Preformatted => "preformatted",
            ElementType::RawPreformatted => "rawpreformatted",
            ElementType::Raw => "raw",
            ElementType::LastRawNewline => "last_raw_newline",
            ElementType::Elided => "elided",
            ElementType::ElidedBlock => "elided_block",
            ElementType::MacroName => "macro_name",
            ElementType::MacroArg => "macro_arg",
            ElementType::MenuEntry => "menu_entry",
            ElementType::MenuEntryLeadingText => "menu_entry_leading_text",
            ElementType::MenuEntryName => "menu_entry_name",
            ElementType::MenuEntrySeparator => "menu_entry_separator",
            ElementType::MenuEntryNode => "menu_entry_node",
            ElementType::MenuEntryDescription => "menu_entry_description",
            ElementType::MenuComment => "menu_comment",
            ElementType::BeforeItem => "before_item",
            ElementType::TableEntry => "table_entry",
            ElementType::TableTerm => "table_term",
            ElementType::TableItem => "table_item",
            ElementType::InterItem => "inter_item",
            ElementType::MultitableHead => "multitable_head",
            ElementType::MultitableBody => "multitable_body",
            ElementType::Row => "row",
            ElementType::DefLine => "def_line",
            ElementType::DefItem => "def_item",
            ElementType::InterDefItem => "inter_def_item",
            ElementType::Verb(_) => "verb",
        }
    }

    /// Argument written between braces in the source.
    pub fn is_braced_arg(self) -> bool {
        matches!(
            self,
            ElementType::BraceCommandArg | ElementType::BraceCommandContext
        )
    }

    /// Line-shaped argument of a misc command.
    pub fn is_misc_arg(self) -> bool {
        matches!(self, ElementType::MiscLineArg | ElementType::MiscArg)
    }

    /// Delimiter carried by a `Verb` tag.
    pub fn verb_delimiter(self) -> Option<char> {
        match self {
            ElementType::Verb(delimiter) => Some(delimiter),
            _ => None,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One syntactic unit of a parsed document.
///
/// An element with non-empty `text` is a text leaf and has no children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Element {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind: ElementType,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    cmd: Option<CommandId>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    args: Vec<Element>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    contents: Vec<Element>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    text: String,
}

impl Element {
    pub fn new(kind: ElementType) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Text leaf of kind `Normal`.
    pub fn text(text: impl Into<String>) -> Self {
        Self::text_of_type(ElementType::Normal, text)
    }

    pub fn text_of_type(kind: ElementType, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            ..Self::default()
        }
    }

    /// Command invocation of kind `Normal`.
    pub fn command(cmd: impl Into<CommandId>) -> Self {
        Self {
            cmd: Some(cmd.into()),
            ..Self::default()
        }
    }

    /// `@verb` invocation using `delimiter`.
    pub fn verb(delimiter: char) -> Self {
        Self {
            kind: ElementType::Verb(delimiter),
            cmd: Some(Builtin::verb.into()),
            ..Self::default()
        }
    }

    /// `{ ... }` group.
    pub fn bracketed() -> Self {
        Self::new(ElementType::Bracketed)
    }

    /// Braced argument holding `contents`.
    pub fn brace_arg(contents: impl IntoIterator<Item = Element>) -> Self {
        Self::new(ElementType::BraceCommandArg).with_contents(contents)
    }

    pub fn with_type(mut self, kind: ElementType) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_cmd(mut self, cmd: impl Into<CommandId>) -> Self {
        self.cmd = Some(cmd.into());
        self
    }

    pub fn with_arg(mut self, arg: Element) -> Self {
        debug_assert!(self.text.is_empty(), "text leaves have no arguments");
        self.args.push(arg);
        self
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = Element>) -> Self {
        debug_assert!(self.text.is_empty(), "text leaves have no arguments");
        self.args.extend(args);
        self
    }

    pub fn with_content(mut self, child: Element) -> Self {
        debug_assert!(self.text.is_empty(), "text leaves have no contents");
        self.contents.push(child);
        self
    }

    pub fn with_contents(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        debug_assert!(self.text.is_empty(), "text leaves have no contents");
        self.contents.extend(children);
        self
    }

    pub fn kind(&self) -> ElementType {
        self.kind
    }

    pub fn cmd(&self) -> Option<CommandId> {
        self.cmd
    }

    pub fn args(&self) -> &[Element] {
        &self.args
    }

    pub fn first_arg(&self) -> Option<&Element> {
        self.args.first()
    }

    pub fn contents(&self) -> &[Element] {
        &self.contents
    }

    /// Literal text; empty unless this is a text leaf.
    pub fn text_content(&self) -> &str {
        &self.text
    }

    pub fn is_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// True if this element invokes `builtin`.
    pub fn is_command(&self, builtin: Builtin) -> bool {
        self.cmd.is_some_and(|cmd| cmd == builtin)
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Element::text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_leaf() {
        let el = Element::text("Foo");
        assert!(el.is_text());
        assert_eq!(el.text_content(), "Foo");
        assert_eq!(el.kind(), ElementType::Normal);
        assert!(el.args().is_empty());
        assert!(el.contents().is_empty());
        assert!(!Element::text("").is_text());
    }

    #[test]
    fn test_command_builder() {
        let el = Element::command(Builtin::code)
            .with_arg(Element::brace_arg([Element::text("x")]));
        assert!(el.is_command(Builtin::code));
        assert!(!el.is_command(Builtin::samp));
        assert_eq!(
            el.first_arg().map(Element::kind),
            Some(ElementType::BraceCommandArg)
        );
        assert_eq!(el.args()[0].contents()[0].text_content(), "x");
    }

    #[test]
    fn test_retag_element() {
        let el = Element::new(ElementType::Paragraph)
            .with_type(ElementType::Bracketed)
            .with_cmd(Builtin::emph);
        assert_eq!(el.kind(), ElementType::Bracketed);
        assert!(el.is_command(Builtin::emph));
    }

    #[test]
    fn test_text_from_str() {
        let el: Element = "leaf".into();
        assert_eq!(el, Element::text("leaf"));
        let line = Element::new(ElementType::MiscLineArg)
            .with_contents([Element::from("a"), Element::from("b")]);
        assert_eq!(line.contents()[1].text_content(), "b");
    }

    #[test]
    fn test_verb_tag() {
        let el = Element::verb('|');
        assert_eq!(el.kind().verb_delimiter(), Some('|'));
        assert_eq!(el.kind().name(), "verb");
        assert!(el.is_command(Builtin::verb));
        assert_eq!(ElementType::Bracketed.verb_delimiter(), None);
    }

    #[test]
    fn test_arg_kinds() {
        assert!(ElementType::BraceCommandArg.is_braced_arg());
        assert!(ElementType::BraceCommandContext.is_braced_arg());
        assert!(!ElementType::Bracketed.is_braced_arg());
        assert!(ElementType::MiscLineArg.is_misc_arg());
        assert!(ElementType::MiscArg.is_misc_arg());
        assert!(!ElementType::BlockLineArg.is_misc_arg());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_json_tree() {
        let el = Element::command(Builtin::code)
            .with_arg(Element::brace_arg([Element::text("x")]));
        let json = serde_json::to_string(&el).unwrap();
        assert!(json.contains("brace_command_arg"));
        let back: Element = serde_json::from_str(&json).unwrap();
        assert_eq!(back, el);
    }
}
