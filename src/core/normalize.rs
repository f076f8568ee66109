//! Node-name normalization
//!
//! Turns a node name, heading or label into the identifier used as the
//! cross-reference anchor. Every renderer of the toolchain computes this
//! identifier independently, so the rules here must agree with them byte for
//! byte:
//!
//! - ASCII letters and digits are kept (upper-cased inside `@sc`)
//! - each run of whitespace becomes one `-`
//! - every other byte becomes `_00xx`, two lower-case hex digits
//! - glyph commands expand to fixed `_XXXX` code point escapes
//! - a result starting with a digit is prefixed with `g_t`
//!
//! Escaping is per byte, not per character: a multi-byte UTF-8 character
//! yields one escape per byte. Other tools rely on that exact form.

use super::context::{Converter, DepthGuard};
use super::tree::{Element, ElementType};
use crate::data::commands::Builtin;
use crate::data::glyphs::{glyph_expansion, nobrace_form, NobraceForm};
use crate::utils::buffer::OutputBuffer;

/// Prefix that keeps identifiers from starting with a digit.
pub const DIGIT_PREFIX: &str = "g_t";

/// Commands whose whole subtree is left out of identifiers.
const IGNORED_COMMANDS: [Builtin; 5] = [
    Builtin::anchor,
    Builtin::footnote,
    Builtin::shortcaption,
    Builtin::caption,
    Builtin::hyphenation,
];

fn is_ignored_type(kind: ElementType) -> bool {
    matches!(
        kind,
        ElementType::EmptyLine
            | ElementType::EmptyLineAfterCommand
            | ElementType::Preamble
            | ElementType::EmptySpacesAfterCommand
            | ElementType::SpacesAtEnd
            | ElementType::EmptySpacesBeforeArgument
            | ElementType::EmptySpacesBeforeParagraph
            | ElementType::SpaceAtEndMenuNode
            | ElementType::EmptySpacesAfterCloseBrace
            | ElementType::EmptySpaceAtEndDefBracketed
    )
}

/// Whitespace as the C library's `isspace` sees it.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

/// Append the normalized form of a text run.
fn normalize_text(text: &str, out: &mut OutputBuffer, upper_case: bool) {
    let bytes = text.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() {
        let start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphanumeric() {
            pos += 1;
        }
        if pos > start {
            // ASCII bytes always sit on char boundaries
            let run = &text[start..pos];
            if upper_case {
                out.push_upper(run);
            } else {
                out.push_str(run);
            }
        }
        if pos == bytes.len() {
            break;
        }

        if is_space(bytes[pos]) {
            out.push('-');
            while pos < bytes.len() && is_space(bytes[pos]) {
                pos += 1;
            }
        } else {
            out.push_byte_escape(bytes[pos]);
            pos += 1;
        }
    }
}

impl Converter<'_> {
    /// Compute the normalized identifier of `root`. An absent root yields `""`.
    pub fn normalize_identifier<'e>(&self, root: impl Into<Option<&'e Element>>) -> String {
        let Some(root) = root.into() else {
            return String::new();
        };
        let mut out = OutputBuffer::new();
        let mut guard = self.depth_guard();
        self.normalize_element(root, &mut out, &mut guard, false, 0);
        guard.finish();

        if out.first_byte().is_some_and(|b| b.is_ascii_digit()) {
            out.prepend(DIGIT_PREFIX);
        }
        out.into_string()
    }

    fn normalize_element(
        &self,
        element: &Element,
        out: &mut OutputBuffer,
        guard: &mut DepthGuard,
        upper_case: bool,
        depth: usize,
    ) {
        if !guard.admit(depth) {
            return;
        }

        let builtin = element.cmd().and_then(|cmd| cmd.builtin());
        if builtin.is_some_and(|id| IGNORED_COMMANDS.contains(&id)) || is_ignored_type(element.kind())
        {
            return;
        }
        if element.first_arg().is_some_and(|arg| arg.kind().is_misc_arg()) {
            return;
        }

        if element.is_text() {
            normalize_text(element.text_content(), out, upper_case);
        }

        let mut upper_case = upper_case;
        if let Some(cmd) = element.cmd() {
            let info = self.registry.info(cmd);

            if info.flags.is_nobrace() || builtin == Some(Builtin::ASTERISK) {
                match builtin.and_then(nobrace_form) {
                    Some(NobraceForm::Hyphen) => out.push('-'),
                    Some(NobraceForm::EscapeName) => {
                        if let Some(&byte) = info.name.as_bytes().first() {
                            out.push_byte_escape(byte);
                        }
                    }
                    Some(NobraceForm::Nothing) | None => {}
                }
                return;
            }

            if let Some(glyph) = builtin.and_then(glyph_expansion) {
                out.push_str(glyph);
                return;
            }

            // TODO: resolve accented letters to their code point escapes
            if info.flags.is_accent() {
                log::debug!("accent @{} left out of identifier", info.name);
                return;
            }
        }

        // Groups emit both braces so the identifier stays balanced
        let bracketed = element.kind() == ElementType::Bracketed;
        if bracketed {
            out.push('{');
        }

        if element.cmd().is_some() {
            // Only the first argument, e.g. the @t in "@t{makeinfo} Pointer Creation"
            if let Some(arg) = element.first_arg() {
                if arg.kind() == ElementType::BraceCommandArg || builtin == Some(Builtin::math) {
                    if builtin == Some(Builtin::sc) {
                        upper_case = true;
                    }
                    self.normalize_element(arg, out, guard, upper_case, depth + 1);
                }
            }
        }

        for child in element.contents() {
            self.normalize_element(child, out, guard, upper_case, depth + 1);
        }

        if bracketed {
            out.push('}');
        }
    }
}
