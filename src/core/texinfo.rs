//! Texinfo source reconstruction
//!
//! Re-emits markup for simple nested brace commands and groups. Macros,
//! multitable prototypes, `@node` spacing and spacing that the parser
//! normalized away are not restored.

use super::context::{Converter, DepthGuard};
use super::tree::{Element, ElementType};
use crate::data::commands::Builtin;
use crate::utils::buffer::OutputBuffer;

impl Converter<'_> {
    /// Serialize `root` back to Texinfo source. An absent root yields `""`.
    pub fn serialize_to_source<'e>(&self, root: impl Into<Option<&'e Element>>) -> String {
        let Some(root) = root.into() else {
            return String::new();
        };
        let mut out = OutputBuffer::new();
        let mut guard = self.depth_guard();
        self.serialize_element(root, &mut out, &mut guard, 0);
        guard.finish();
        out.into_string()
    }

    fn serialize_element(
        &self,
        element: &Element,
        out: &mut OutputBuffer,
        guard: &mut DepthGuard,
        depth: usize,
    ) {
        if !guard.admit(depth) {
            return;
        }
        if element.is_text() {
            out.push_str(element.text_content());
            return;
        }

        if element.cmd().is_some() {
            self.serialize_command_args(element, out, guard, depth);
        }

        let bracketed = element.kind() == ElementType::Bracketed;
        if bracketed {
            out.push('{');
        }
        for child in element.contents() {
            self.serialize_element(child, out, guard, depth + 1);
        }
        if bracketed {
            out.push('}');
        }
    }

    fn serialize_command_args(
        &self,
        element: &Element,
        out: &mut OutputBuffer,
        guard: &mut DepthGuard,
        depth: usize,
    ) {
        let Some(cmd) = element.cmd() else {
            return;
        };
        let info = self.registry.info(cmd);
        out.push('@');
        out.push_str(info.name);

        let Some(first) = element.first_arg() else {
            return;
        };
        let braces = first.kind().is_braced_arg();
        if braces {
            out.push('{');
        }

        let delimiter = if element.is_command(Builtin::verb) {
            element.kind().verb_delimiter()
        } else {
            None
        };
        if let Some(delimiter) = delimiter {
            out.push(delimiter);
        }

        let comma_separated = info.flags.is_brace();
        for (index, arg) in element.args().iter().enumerate() {
            if comma_separated && index > 0 {
                out.push(',');
            }
            self.serialize_element(arg, out, guard, depth + 1);
        }

        if let Some(delimiter) = delimiter {
            out.push(delimiter);
        }
        if braces {
            out.push('}');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::ConvertOptions;
    use crate::data::registry::Registry;
    use pretty_assertions::assert_eq;

    fn serialize(element: &Element) -> String {
        Converter::new().serialize_to_source(element)
    }

    #[test]
    fn test_text_verbatim() {
        assert_eq!(serialize(&Element::text("Hello, world")), "Hello, world");
    }

    #[test]
    fn test_absent_root() {
        assert_eq!(Converter::new().serialize_to_source(None::<&Element>), "");
        assert_eq!(serialize(&Element::default()), "");
    }

    #[test]
    fn test_brace_command() {
        let el = Element::command(Builtin::code).with_arg(Element::brace_arg([Element::text("ls")]));
        assert_eq!(serialize(&el), "@code{ls}");
    }

    #[test]
    fn test_no_arg_brace_command() {
        let el = Element::command(Builtin::dots).with_arg(Element::new(ElementType::BraceCommandArg));
        assert_eq!(serialize(&el), "@dots{}");
    }

    #[test]
    fn test_commas_between_brace_args() {
        let el = Element::command(Builtin::xref).with_args([
            Element::brace_arg([Element::text("Top")]),
            Element::brace_arg([Element::text("Overview")]),
            Element::brace_arg([Element::text("intro")]),
        ]);
        assert_eq!(serialize(&el), "@xref{Top,Overview,intro}");
    }

    #[test]
    fn test_no_commas_for_non_brace_command() {
        let mut registry = Registry::new();
        let id = registry.add_texinfo_command("mymacro").unwrap();
        let el = Element::command(id).with_args([
            Element::brace_arg([Element::text("a")]),
            Element::brace_arg([Element::text("b")]),
        ]);
        let out = Converter::with_registry(&registry).serialize_to_source(&el);
        assert_eq!(out, "@mymacro{ab}");
    }

    #[test]
    fn test_nobrace_command() {
        let el = Element::new(ElementType::Paragraph).with_contents([
            Element::text("user"),
            Element::command(Builtin::AT_SIGN),
            Element::text("example.org"),
        ]);
        assert_eq!(serialize(&el), "user@@example.org");
    }

    #[test]
    fn test_bracketed_group() {
        let el = Element::bracketed().with_contents([Element::text("a "), Element::text("b")]);
        assert_eq!(serialize(&el), "{a b}");
    }

    #[test]
    fn test_context_arg_braces() {
        let el = Element::command(Builtin::footnote).with_arg(
            Element::new(ElementType::BraceCommandContext)
                .with_content(Element::new(ElementType::Paragraph).with_content(Element::text("Note."))),
        );
        assert_eq!(serialize(&el), "@footnote{Note.}");
    }

    #[test]
    fn test_verb_delimiters() {
        let el = Element::verb('|').with_arg(Element::brace_arg([Element::text("a{b}")]));
        assert_eq!(serialize(&el), "@verb{|a{b}|}");
    }

    #[test]
    fn test_nested_commands() {
        let inner = Element::command(Builtin::var).with_arg(Element::brace_arg([Element::text("file")]));
        let el = Element::command(Builtin::samp)
            .with_arg(Element::brace_arg([Element::text("cat "), inner]));
        assert_eq!(serialize(&el), "@samp{cat @var{file}}");
    }

    #[test]
    fn test_misc_line_arg_without_braces() {
        let el = Element::command(Builtin::chapter).with_arg(
            Element::new(ElementType::MiscLineArg).with_content(Element::text("Intro")),
        );
        assert_eq!(serialize(&el), "@chapterIntro");
    }

    #[test]
    fn test_depth_ceiling() {
        let mut el = Element::text("deep");
        for _ in 0..10 {
            el = Element::bracketed().with_content(el);
        }
        let converter = Converter::new().with_options(ConvertOptions::new().with_max_depth(3));
        assert_eq!(converter.serialize_to_source(&el), "{{{{}}}}");
    }
}
