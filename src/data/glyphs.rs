//! Fixed command expansions used by node-name normalization
//!
//! These values are part of the cross-reference contract: every renderer of
//! the toolchain derives the same anchor from the same node name, so the
//! strings below must not change.

use super::commands::Builtin;

/// How a single-character command contributes to a normalized name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NobraceForm {
    /// Forced breaks and spaces become a hyphen
    Hyphen,
    /// Hints that leave no trace
    Nothing,
    /// Escape of the command's own character
    EscapeName,
}

/// Expansion of a no-argument single-character command, or of `@*`.
pub fn nobrace_form(cmd: Builtin) -> Option<NobraceForm> {
    use Builtin::*;

    match cmd {
        ASTERISK | SPACE | TAB | NEWLINE => Some(NobraceForm::Hyphen),
        HYPHEN | VERTICAL_BAR | SLASH | COLON => Some(NobraceForm::Nothing),
        EXCLAMATION_MARK | QUESTION_MARK | FULL_STOP | AT_SIGN | CLOSE_BRACE | OPEN_BRACE
        | BACKSLASH => Some(NobraceForm::EscapeName),
        _ => None,
    }
}

/// Fixed expansion of a glyph command, as a `_XXXX` code point escape or a
/// literal string.
pub fn glyph_expansion(cmd: Builtin) -> Option<&'static str> {
    use Builtin::*;

    let glyph = match cmd {
        bullet => "_2022",
        copyright => "_00a9",
        registeredsymbol => "_00ae",
        dots => "_2026",
        equiv => "_2261",
        expansion => "_21a6",
        arrow => "_2192",
        minus => "_2212",
        point => "_2605",
        print => "_22a3",
        result => "_21d2",
        aa => "_00e5",
        AA => "_00c5",
        ae => "_00e6",
        oe => "_0153",
        AE => "_00c6",
        OE => "_0152",
        o => "_00f8",
        O => "_00d8",
        ss => "_00df",
        DH => "_00d0",
        dh => "_00f0",
        TH => "_00de",
        th => "_00fe",
        l => "_0142",
        L => "_0141",
        exclamdown => "_00a1",
        questiondown => "_00bf",
        pounds => "_00a3",
        ordf => "_00aa",
        ordm => "_00ba",
        comma => "_002c",
        atchar => "_0040",
        lbracechar => "_007b",
        rbracechar => "_007d",
        backslashchar => "_005c",
        hashchar => "_0023",
        euro => "_20ac",
        geq => "_2265",
        leq => "_2264",
        textdegree => "_00b0",
        quotedblleft => "_201c",
        quotedblright => "_201d",
        quoteleft => "_2018",
        quoteright => "_2019",
        quotedblbase => "_201e",
        quotesinglbase => "_201a",
        guillemetleft | guillemotleft => "_00ab",
        guillemetright | guillemotright => "_00bb",
        guilsinglleft => "_2039",
        guilsinglright => "_203a",
        click => "_2192",
        TeX => "TeX",
        LaTeX => "LaTeX",
        tie => " ",
        error => "error-->",
        _ => return None,
    };
    Some(glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nobrace_groups() {
        assert_eq!(nobrace_form(Builtin::NEWLINE), Some(NobraceForm::Hyphen));
        assert_eq!(nobrace_form(Builtin::ASTERISK), Some(NobraceForm::Hyphen));
        assert_eq!(nobrace_form(Builtin::SLASH), Some(NobraceForm::Nothing));
        assert_eq!(nobrace_form(Builtin::AT_SIGN), Some(NobraceForm::EscapeName));
        assert_eq!(nobrace_form(Builtin::code), None);
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(glyph_expansion(Builtin::dots), Some("_2026"));
        assert_eq!(glyph_expansion(Builtin::guillemotleft), Some("_00ab"));
        assert_eq!(glyph_expansion(Builtin::guillemetleft), Some("_00ab"));
        assert_eq!(glyph_expansion(Builtin::click), glyph_expansion(Builtin::arrow));
        assert_eq!(glyph_expansion(Builtin::error), Some("error-->"));
        assert_eq!(glyph_expansion(Builtin::enddots), None);
        assert_eq!(glyph_expansion(Builtin::code), None);
    }

    #[test]
    fn test_letter_glyphs_cover_letter_commands() {
        use crate::data::commands::CommandFlags;

        for builtin in Builtin::ALL {
            if builtin.flags().contains(CommandFlags::LETTER_NO_ARG) {
                assert!(
                    glyph_expansion(*builtin).is_some(),
                    "missing glyph for {}",
                    builtin
                );
            }
        }
    }
}
