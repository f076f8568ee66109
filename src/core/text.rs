//! Plain-text extraction
//!
//! A deliberately small reading of an element's contents, for places where
//! markup cannot appear at all, such as a file name that contains an at sign
//! or braces.

use super::context::Converter;
use super::tree::Element;
use crate::data::commands::Builtin;
use crate::utils::buffer::OutputBuffer;

/// Result of plain-text extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainText {
    /// The extracted text
    pub text: String,
    /// Set when some content was markup too complex to flatten; `text` is
    /// then not a faithful reading of the source.
    pub superfluous: bool,
}

impl PlainText {
    pub fn is_faithful(&self) -> bool {
        !self.superfluous
    }

    pub fn into_parts(self) -> (String, bool) {
        (self.text, self.superfluous)
    }
}

impl Converter<'_> {
    /// Flatten the direct contents of `root` to plain text.
    ///
    /// Text leaves are copied and `@@`, `@{`, `@}` become their characters.
    /// Any other child is skipped and sets [`PlainText::superfluous`].
    pub fn extract_plain_text<'e>(&self, root: impl Into<Option<&'e Element>>) -> PlainText {
        let Some(root) = root.into() else {
            return PlainText::default();
        };

        let mut out = OutputBuffer::new();
        let mut superfluous = false;
        for child in root.contents() {
            if child.is_text() {
                out.push_str(child.text_content());
                continue;
            }
            match child.cmd().and_then(|cmd| cmd.builtin()) {
                Some(Builtin::AT_SIGN) => out.push('@'),
                Some(Builtin::OPEN_BRACE) => out.push('{'),
                Some(Builtin::CLOSE_BRACE) => out.push('}'),
                _ => {
                    log::debug!("cannot flatten {} child to plain text", child.kind());
                    superfluous = true;
                }
            }
        }

        PlainText {
            text: out.into_string(),
            superfluous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::ElementType;

    fn line(children: Vec<Element>) -> Element {
        Element::new(ElementType::MiscLineArg).with_contents(children)
    }

    #[test]
    fn test_text_and_escapes() {
        let root = line(vec![
            Element::text("my"),
            Element::command(Builtin::AT_SIGN),
            Element::text("file"),
            Element::command(Builtin::OPEN_BRACE),
            Element::text("1"),
            Element::command(Builtin::CLOSE_BRACE),
            Element::text(".texi"),
        ]);
        let result = Converter::new().extract_plain_text(&root);
        assert_eq!(result.text, "my@file{1}.texi");
        assert!(result.is_faithful());
    }

    #[test]
    fn test_other_command_is_superfluous() {
        let root = line(vec![
            Element::text("a"),
            Element::command(Builtin::code).with_arg(Element::brace_arg([Element::text("b")])),
            Element::text("c"),
        ]);
        let (text, superfluous) = Converter::new().extract_plain_text(&root).into_parts();
        assert_eq!(text, "ac");
        assert!(superfluous);
    }

    #[test]
    fn test_flag_independent_of_order() {
        let other = || Element::command(Builtin::dots);
        let first = line(vec![other(), Element::text("x")]);
        let last = line(vec![Element::text("x"), other()]);
        let converter = Converter::new();
        assert!(converter.extract_plain_text(&first).superfluous);
        assert!(converter.extract_plain_text(&last).superfluous);
    }

    #[test]
    fn test_only_one_level() {
        // Text nested in a group is not reached
        let root = line(vec![Element::bracketed().with_content(Element::text("x"))]);
        let result = Converter::new().extract_plain_text(&root);
        assert_eq!(result.text, "");
        assert!(result.superfluous);
    }

    #[test]
    fn test_absent_root() {
        let result = Converter::new().extract_plain_text(None::<&Element>);
        assert_eq!(result, PlainText::default());
        assert!(!result.superfluous);
    }
}
