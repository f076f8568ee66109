//! Builtin Texinfo command table
//!
//! Every builtin command has a variant in [`Builtin`] and one row in the
//! static descriptor table, generated together by `builtin_commands!` so the
//! enum, the descriptors and the name lookup can never drift apart.
//!
//! Variants carry the exact Texinfo command names (`aa` and `AA` are
//! different commands), and punctuation commands use upper-case names
//! such as `AT_SIGN` for `@@`.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

// ============================================================================
// Command flags
// ============================================================================

/// Category bits of a command descriptor.
///
/// The bit values are shared with the rest of the toolchain and must not be
/// renumbered.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandFlags(u32);

impl CommandFlags {
    pub const MISC: Self = Self(0x0001);
    pub const DEFAULT_INDEX: Self = Self(0x0002);
    pub const ROOT: Self = Self(0x0004);
    pub const SECTIONING: Self = Self(0x0008);
    pub const BRACE: Self = Self(0x0010);
    pub const LETTER_NO_ARG: Self = Self(0x0020);
    pub const ACCENT: Self = Self(0x0040);
    pub const STYLE: Self = Self(0x0080);
    /// Only set on brace commands.
    pub const CODE_STYLE: Self = Self(0x0100);
    pub const REGULAR_FONT_STYLE: Self = Self(0x0200);
    pub const REF: Self = Self(0x0800);
    pub const EXPLAINED: Self = Self(0x1000);
    pub const BLOCK: Self = Self(0x2000);
    pub const RAW: Self = Self(0x4000);
    pub const FORMAT_RAW: Self = Self(0x8000);
    pub const DEF: Self = Self(0x0002_0000);
    pub const DEF_ALIASES: Self = Self(0x0004_0000);
    pub const MENU: Self = Self(0x0008_0000);
    pub const ALIGN: Self = Self(0x0010_0000);
    pub const REGION: Self = Self(0x0020_0000);
    pub const PREFORMATTED: Self = Self(0x0040_0000);
    pub const PREFORMATTED_CODE: Self = Self(0x0080_0000);
    pub const ITEM_CONTAINER: Self = Self(0x0100_0000);
    pub const ITEM_LINE: Self = Self(0x0200_0000);
    pub const NOBRACE: Self = Self(0x0400_0000);
    pub const BLOCKITEM: Self = Self(0x0800_0000);
    pub const INLINE: Self = Self(0x1000_0000);
    pub const MACRO: Self = Self(0x2000_0000);
    pub const INDEX_ENTRY_COMMAND: Self = Self(0x4000_0000);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True if every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_misc(self) -> bool {
        self.contains(Self::MISC)
    }

    pub fn is_brace(self) -> bool {
        self.contains(Self::BRACE)
    }

    pub fn is_nobrace(self) -> bool {
        self.contains(Self::NOBRACE)
    }

    pub fn is_accent(self) -> bool {
        self.contains(Self::ACCENT)
    }

    pub fn is_style(self) -> bool {
        self.contains(Self::STYLE)
    }

    pub fn is_block(self) -> bool {
        self.contains(Self::BLOCK)
    }

    pub fn is_sectioning(self) -> bool {
        self.contains(Self::SECTIONING)
    }

    pub fn is_index_entry(self) -> bool {
        self.contains(Self::INDEX_ENTRY_COMMAND)
    }

    pub fn is_raw(self) -> bool {
        self.contains(Self::RAW)
    }

    pub fn is_inline(self) -> bool {
        self.contains(Self::INLINE)
    }
}

impl BitOr for CommandFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for CommandFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl fmt::Debug for CommandFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommandFlags({:#010x})", self.0)
    }
}

// ============================================================================
// Sub-type codes
// ============================================================================

/// Argument shape of a misc (line) command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum MiscArgs {
    Special = -1,
    LineRaw = -2,
    SkipLine = -3,
    SkipSpace = -4,
    NoArg = -5,
    Text = -6,
    Line = -7,
}

impl MiscArgs {
    pub const fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Special),
            -2 => Some(Self::LineRaw),
            -3 => Some(Self::SkipLine),
            -4 => Some(Self::SkipSpace),
            -5 => Some(Self::NoArg),
            -6 => Some(Self::Text),
            -7 => Some(Self::Line),
            _ => None,
        }
    }
}

/// Delimiter shape of a block command. Non-negative codes are argument counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Conditional,
    Raw,
    Multitable,
    Args(u32),
}

impl BlockKind {
    pub const fn code(self) -> i32 {
        match self {
            Self::Conditional => -1,
            Self::Raw => -2,
            Self::Multitable => -3,
            Self::Args(n) => n as i32,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Conditional),
            -2 => Some(Self::Raw),
            -3 => Some(Self::Multitable),
            n if n >= 0 => Some(Self::Args(n as u32)),
            _ => None,
        }
    }
}

/// Argument shape of a brace command. Non-negative codes are argument counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BraceKind {
    /// Argument may enclose paragraph breaks.
    Context,
    Accent,
    Style,
    Inline,
    Other,
    Args(u32),
}

impl BraceKind {
    pub const fn code(self) -> i32 {
        match self {
            Self::Context => -1,
            Self::Accent => -2,
            Self::Style => -3,
            Self::Inline => -4,
            Self::Other => -5,
            Self::Args(n) => n as i32,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Context),
            -2 => Some(Self::Accent),
            -3 => Some(Self::Style),
            -4 => Some(Self::Inline),
            -5 => Some(Self::Other),
            n if n >= 0 => Some(Self::Args(n as u32)),
            _ => None,
        }
    }
}

// ============================================================================
// Command descriptor
// ============================================================================

/// Immutable descriptor of one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo<'a> {
    pub name: &'a str,
    pub flags: CommandFlags,
    /// Sub-type code, see [`MiscArgs`], [`BlockKind`] and [`BraceKind`].
    pub data: i32,
}

impl CommandInfo<'static> {
    /// Descriptor used for ids that resolve to nothing.
    pub const EMPTY: Self = CommandInfo {
        name: "",
        flags: CommandFlags::empty(),
        data: 0,
    };
}

impl CommandInfo<'_> {
    pub fn misc_args(&self) -> Option<MiscArgs> {
        if self.flags.is_misc() {
            MiscArgs::from_code(self.data)
        } else {
            None
        }
    }

    pub fn block_kind(&self) -> Option<BlockKind> {
        if self.flags.is_block() {
            BlockKind::from_code(self.data)
        } else {
            None
        }
    }

    pub fn brace_kind(&self) -> Option<BraceKind> {
        if self.flags.is_brace() {
            BraceKind::from_code(self.data)
        } else {
            None
        }
    }
}

// ============================================================================
// Builtin table
// ============================================================================

const SPECIAL: i32 = MiscArgs::Special.code();
const LINERAW: i32 = MiscArgs::LineRaw.code();
const SKIPLINE: i32 = MiscArgs::SkipLine.code();
const SKIPSPACE: i32 = MiscArgs::SkipSpace.code();
const NOARG: i32 = MiscArgs::NoArg.code();
const TEXT: i32 = MiscArgs::Text.code();
const LINE: i32 = MiscArgs::Line.code();

const CONDITIONAL: i32 = BlockKind::Conditional.code();
const RAW_BLOCK: i32 = BlockKind::Raw.code();
const MULTITABLE: i32 = BlockKind::Multitable.code();

const CONTEXT: i32 = BraceKind::Context.code();
const ACCENT_ARG: i32 = BraceKind::Accent.code();
const STYLE_ARG: i32 = BraceKind::Style.code();
const INLINE_ARG: i32 = BraceKind::Inline.code();
const OTHER: i32 = BraceKind::Other.code();

macro_rules! builtin_commands {
    ($( $variant:ident => $name:tt, [$($flag:ident)*], $data:expr; )*) => {
        /// Builtin Texinfo commands.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u16)]
        pub enum Builtin {
            $($variant,)*
        }

        impl Builtin {
            /// All builtins, in id order.
            pub const ALL: &'static [Builtin] = &[$(Builtin::$variant,)*];
        }

        static BUILTIN_TABLE: &[CommandInfo<'static>] = &[
            $(CommandInfo {
                name: $name,
                flags: CommandFlags::empty()$(.union(CommandFlags::$flag))*,
                data: $data,
            },)*
        ];

        static BUILTIN_NAMES: phf::Map<&'static str, Builtin> = phf::phf_map! {
            $($name => Builtin::$variant,)*
        };
    };
}

impl Builtin {
    /// Numeric id of this builtin. The user-command bit is never set.
    pub const fn id(self) -> u16 {
        self as u16
    }

    pub fn from_id(id: u16) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Look up a builtin by its Texinfo name (without the leading `@`).
    pub fn from_name(name: &str) -> Option<Self> {
        BUILTIN_NAMES.get(name).copied()
    }

    pub fn info(self) -> CommandInfo<'static> {
        BUILTIN_TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        BUILTIN_TABLE[self as usize].name
    }

    pub fn flags(self) -> CommandFlags {
        BUILTIN_TABLE[self as usize].flags
    }

    pub fn data(self) -> i32 {
        BUILTIN_TABLE[self as usize].data
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name())
    }
}

builtin_commands! {
    // Single-character commands
    AT_SIGN => "@", [NOBRACE], 0;
    OPEN_BRACE => "{", [NOBRACE], 0;
    CLOSE_BRACE => "}", [NOBRACE], 0;
    SPACE => " ", [NOBRACE], 0;
    TAB => "\t", [NOBRACE], 0;
    NEWLINE => "\n", [NOBRACE], 0;
    HYPHEN => "-", [NOBRACE], 0;
    VERTICAL_BAR => "|", [NOBRACE], 0;
    SLASH => "/", [NOBRACE], 0;
    COLON => ":", [NOBRACE], 0;
    EXCLAMATION_MARK => "!", [NOBRACE], 0;
    QUESTION_MARK => "?", [NOBRACE], 0;
    FULL_STOP => ".", [NOBRACE], 0;
    BACKSLASH => "\\", [NOBRACE], 0;
    ASTERISK => "*", [MISC], SKIPSPACE;

    // Accents
    UMLAUT => "\"", [BRACE ACCENT], ACCENT_ARG;
    ACUTE => "'", [BRACE ACCENT], ACCENT_ARG;
    CEDILLA => ",", [BRACE ACCENT], ACCENT_ARG;
    MACRON => "=", [BRACE ACCENT], ACCENT_ARG;
    CIRCUMFLEX => "^", [BRACE ACCENT], ACCENT_ARG;
    GRAVE => "`", [BRACE ACCENT], ACCENT_ARG;
    TILDE => "~", [BRACE ACCENT], ACCENT_ARG;
    dotaccent => "dotaccent", [BRACE ACCENT], ACCENT_ARG;
    dotless => "dotless", [BRACE ACCENT], ACCENT_ARG;
    H => "H", [BRACE ACCENT], ACCENT_ARG;
    ogonek => "ogonek", [BRACE ACCENT], ACCENT_ARG;
    ringaccent => "ringaccent", [BRACE ACCENT], ACCENT_ARG;
    tieaccent => "tieaccent", [BRACE ACCENT], ACCENT_ARG;
    u => "u", [BRACE ACCENT], ACCENT_ARG;
    ubaraccent => "ubaraccent", [BRACE ACCENT], ACCENT_ARG;
    udotaccent => "udotaccent", [BRACE ACCENT], ACCENT_ARG;
    v => "v", [BRACE ACCENT], ACCENT_ARG;

    // Letters
    aa => "aa", [BRACE LETTER_NO_ARG], 0;
    AA => "AA", [BRACE LETTER_NO_ARG], 0;
    ae => "ae", [BRACE LETTER_NO_ARG], 0;
    AE => "AE", [BRACE LETTER_NO_ARG], 0;
    oe => "oe", [BRACE LETTER_NO_ARG], 0;
    OE => "OE", [BRACE LETTER_NO_ARG], 0;
    o => "o", [BRACE LETTER_NO_ARG], 0;
    O => "O", [BRACE LETTER_NO_ARG], 0;
    ss => "ss", [BRACE LETTER_NO_ARG], 0;
    DH => "DH", [BRACE LETTER_NO_ARG], 0;
    dh => "dh", [BRACE LETTER_NO_ARG], 0;
    TH => "TH", [BRACE LETTER_NO_ARG], 0;
    th => "th", [BRACE LETTER_NO_ARG], 0;
    l => "l", [BRACE LETTER_NO_ARG], 0;
    L => "L", [BRACE LETTER_NO_ARG], 0;

    // Glyphs
    TeX => "TeX", [BRACE], 0;
    LaTeX => "LaTeX", [BRACE], 0;
    arrow => "arrow", [BRACE], 0;
    atchar => "atchar", [BRACE], 0;
    backslashchar => "backslashchar", [BRACE], 0;
    bullet => "bullet", [BRACE], 0;
    click => "click", [BRACE], 0;
    comma => "comma", [BRACE], 0;
    copyright => "copyright", [BRACE], 0;
    dots => "dots", [BRACE], 0;
    enddots => "enddots", [BRACE], 0;
    equiv => "equiv", [BRACE], 0;
    error => "error", [BRACE], 0;
    euro => "euro", [BRACE], 0;
    exclamdown => "exclamdown", [BRACE], 0;
    expansion => "expansion", [BRACE], 0;
    geq => "geq", [BRACE], 0;
    guillemetleft => "guillemetleft", [BRACE], 0;
    guillemetright => "guillemetright", [BRACE], 0;
    guillemotleft => "guillemotleft", [BRACE], 0;
    guillemotright => "guillemotright", [BRACE], 0;
    guilsinglleft => "guilsinglleft", [BRACE], 0;
    guilsinglright => "guilsinglright", [BRACE], 0;
    hashchar => "hashchar", [BRACE], 0;
    lbracechar => "lbracechar", [BRACE], 0;
    leq => "leq", [BRACE], 0;
    minus => "minus", [BRACE], 0;
    ordf => "ordf", [BRACE], 0;
    ordm => "ordm", [BRACE], 0;
    point => "point", [BRACE], 0;
    pounds => "pounds", [BRACE], 0;
    print => "print", [BRACE], 0;
    questiondown => "questiondown", [BRACE], 0;
    quotedblbase => "quotedblbase", [BRACE], 0;
    quotedblleft => "quotedblleft", [BRACE], 0;
    quotedblright => "quotedblright", [BRACE], 0;
    quoteleft => "quoteleft", [BRACE], 0;
    quoteright => "quoteright", [BRACE], 0;
    quotesinglbase => "quotesinglbase", [BRACE], 0;
    rbracechar => "rbracechar", [BRACE], 0;
    registeredsymbol => "registeredsymbol", [BRACE], 0;
    result => "result", [BRACE], 0;
    textdegree => "textdegree", [BRACE], 0;
    tie => "tie", [BRACE], 0;
    today => "today", [BRACE], 0;

    // Font styles
    asis => "asis", [BRACE STYLE], STYLE_ARG;
    b => "b", [BRACE STYLE], STYLE_ARG;
    cite => "cite", [BRACE STYLE], STYLE_ARG;
    code => "code", [BRACE STYLE CODE_STYLE], STYLE_ARG;
    command => "command", [BRACE STYLE CODE_STYLE], STYLE_ARG;
    dfn => "dfn", [BRACE STYLE], STYLE_ARG;
    emph => "emph", [BRACE STYLE], STYLE_ARG;
    env => "env", [BRACE STYLE CODE_STYLE], STYLE_ARG;
    file => "file", [BRACE STYLE CODE_STYLE], STYLE_ARG;
    headitemfont => "headitemfont", [BRACE STYLE], STYLE_ARG;
    i => "i", [BRACE STYLE], STYLE_ARG;
    indicateurl => "indicateurl", [BRACE STYLE CODE_STYLE], STYLE_ARG;
    kbd => "kbd", [BRACE STYLE CODE_STYLE], STYLE_ARG;
    key => "key", [BRACE STYLE CODE_STYLE], STYLE_ARG;
    option => "option", [BRACE STYLE CODE_STYLE], STYLE_ARG;
    r => "r", [BRACE STYLE REGULAR_FONT_STYLE], STYLE_ARG;
    samp => "samp", [BRACE STYLE CODE_STYLE], STYLE_ARG;
    sansserif => "sansserif", [BRACE STYLE REGULAR_FONT_STYLE], STYLE_ARG;
    sc => "sc", [BRACE STYLE], STYLE_ARG;
    slanted => "slanted", [BRACE STYLE REGULAR_FONT_STYLE], STYLE_ARG;
    strong => "strong", [BRACE STYLE], STYLE_ARG;
    sub => "sub", [BRACE STYLE], STYLE_ARG;
    sup => "sup", [BRACE STYLE], STYLE_ARG;
    t => "t", [BRACE STYLE CODE_STYLE], STYLE_ARG;
    titlefont => "titlefont", [BRACE STYLE], STYLE_ARG;
    var => "var", [BRACE STYLE], STYLE_ARG;

    // Other brace commands
    abbr => "abbr", [BRACE EXPLAINED], 2;
    acronym => "acronym", [BRACE EXPLAINED], 2;
    anchor => "anchor", [BRACE], 1;
    caption => "caption", [BRACE], CONTEXT;
    dmn => "dmn", [BRACE], 1;
    email => "email", [BRACE], 2;
    footnote => "footnote", [BRACE], CONTEXT;
    hyphenation => "hyphenation", [BRACE], OTHER;
    image => "image", [BRACE], 5;
    inforef => "inforef", [BRACE REF], 3;
    math => "math", [BRACE], CONTEXT;
    pxref => "pxref", [BRACE REF], 5;
    r#ref => "ref", [BRACE REF], 5;
    shortcaption => "shortcaption", [BRACE], CONTEXT;
    sortas => "sortas", [BRACE], 1;
    U => "U", [BRACE], 1;
    uref => "uref", [BRACE], 3;
    url => "url", [BRACE], 3;
    value => "value", [BRACE], OTHER;
    verb => "verb", [BRACE], OTHER;
    w => "w", [BRACE], 1;
    xref => "xref", [BRACE REF], 5;

    // Inline conditionals
    inlinefmt => "inlinefmt", [BRACE INLINE], INLINE_ARG;
    inlinefmtifelse => "inlinefmtifelse", [BRACE INLINE], INLINE_ARG;
    inlineifclear => "inlineifclear", [BRACE INLINE], INLINE_ARG;
    inlineifset => "inlineifset", [BRACE INLINE], INLINE_ARG;
    inlineraw => "inlineraw", [BRACE INLINE], INLINE_ARG;

    // Sectioning
    node => "node", [MISC ROOT], LINE;
    top => "top", [MISC ROOT SECTIONING], LINE;
    part => "part", [MISC ROOT SECTIONING], LINE;
    chapter => "chapter", [MISC ROOT SECTIONING], LINE;
    section => "section", [MISC ROOT SECTIONING], LINE;
    subsection => "subsection", [MISC ROOT SECTIONING], LINE;
    subsubsection => "subsubsection", [MISC ROOT SECTIONING], LINE;
    unnumbered => "unnumbered", [MISC ROOT SECTIONING], LINE;
    unnumberedsec => "unnumberedsec", [MISC ROOT SECTIONING], LINE;
    unnumberedsubsec => "unnumberedsubsec", [MISC ROOT SECTIONING], LINE;
    unnumberedsubsubsec => "unnumberedsubsubsec", [MISC ROOT SECTIONING], LINE;
    appendix => "appendix", [MISC ROOT SECTIONING], LINE;
    appendixsec => "appendixsec", [MISC ROOT SECTIONING], LINE;
    appendixsubsec => "appendixsubsec", [MISC ROOT SECTIONING], LINE;
    appendixsubsubsec => "appendixsubsubsec", [MISC ROOT SECTIONING], LINE;
    majorheading => "majorheading", [MISC SECTIONING], LINE;
    chapheading => "chapheading", [MISC SECTIONING], LINE;
    heading => "heading", [MISC SECTIONING], LINE;
    subheading => "subheading", [MISC SECTIONING], LINE;
    subsubheading => "subsubheading", [MISC SECTIONING], LINE;

    // Line commands
    author => "author", [MISC], LINE;
    bye => "bye", [MISC], SKIPLINE;
    c => "c", [MISC], LINERAW;
    center => "center", [MISC], LINE;
    clear => "clear", [MISC], SPECIAL;
    clickstyle => "clickstyle", [MISC], SPECIAL;
    comment => "comment", [MISC], LINERAW;
    contents => "contents", [MISC], NOARG;
    defcodeindex => "defcodeindex", [MISC], SPECIAL;
    defindex => "defindex", [MISC], SPECIAL;
    dircategory => "dircategory", [MISC], LINE;
    documentencoding => "documentencoding", [MISC], TEXT;
    documentlanguage => "documentlanguage", [MISC], TEXT;
    end => "end", [MISC], TEXT;
    exdent => "exdent", [MISC], LINE;
    footnotestyle => "footnotestyle", [MISC], LINE;
    headitem => "headitem", [MISC], SKIPSPACE;
    include => "include", [MISC], TEXT;
    indent => "indent", [MISC], SKIPSPACE;
    insertcopying => "insertcopying", [MISC], NOARG;
    item => "item", [MISC], SKIPSPACE;
    itemx => "itemx", [MISC], SKIPSPACE;
    noindent => "noindent", [MISC], SKIPSPACE;
    page => "page", [MISC], NOARG;
    paragraphindent => "paragraphindent", [MISC], LINE;
    printindex => "printindex", [MISC], LINE;
    set => "set", [MISC], SPECIAL;
    setchapternewpage => "setchapternewpage", [MISC], LINE;
    setfilename => "setfilename", [MISC], TEXT;
    settitle => "settitle", [MISC], LINE;
    shortcontents => "shortcontents", [MISC], NOARG;
    smallbook => "smallbook", [MISC], SKIPLINE;
    sp => "sp", [MISC], LINE;
    subtitle => "subtitle", [MISC], LINE;
    syncodeindex => "syncodeindex", [MISC], LINE;
    synindex => "synindex", [MISC], LINE;
    tab => "tab", [MISC], SKIPSPACE;
    title => "title", [MISC], LINE;
    unmacro => "unmacro", [MISC], LINERAW;
    vskip => "vskip", [MISC], LINERAW;

    // Index entries
    cindex => "cindex", [MISC DEFAULT_INDEX INDEX_ENTRY_COMMAND], LINE;
    findex => "findex", [MISC DEFAULT_INDEX INDEX_ENTRY_COMMAND], LINE;
    kindex => "kindex", [MISC DEFAULT_INDEX INDEX_ENTRY_COMMAND], LINE;
    pindex => "pindex", [MISC DEFAULT_INDEX INDEX_ENTRY_COMMAND], LINE;
    tindex => "tindex", [MISC DEFAULT_INDEX INDEX_ENTRY_COMMAND], LINE;
    vindex => "vindex", [MISC DEFAULT_INDEX INDEX_ENTRY_COMMAND], LINE;

    // Blocks
    cartouche => "cartouche", [BLOCK], 0;
    copying => "copying", [BLOCK REGION], 0;
    detailmenu => "detailmenu", [BLOCK MENU], 0;
    direntry => "direntry", [BLOCK MENU], 0;
    display => "display", [BLOCK PREFORMATTED], 0;
    documentdescription => "documentdescription", [BLOCK REGION], 0;
    enumerate => "enumerate", [BLOCK BLOCKITEM ITEM_CONTAINER], 1;
    example => "example", [BLOCK PREFORMATTED PREFORMATTED_CODE], 0;
    float => "float", [BLOCK], 2;
    flushleft => "flushleft", [BLOCK ALIGN], 0;
    flushright => "flushright", [BLOCK ALIGN], 0;
    format => "format", [BLOCK PREFORMATTED], 0;
    ftable => "ftable", [BLOCK BLOCKITEM ITEM_LINE], 1;
    group => "group", [BLOCK], 0;
    itemize => "itemize", [BLOCK BLOCKITEM ITEM_CONTAINER], 1;
    lisp => "lisp", [BLOCK PREFORMATTED PREFORMATTED_CODE], 0;
    menu => "menu", [BLOCK MENU], 0;
    multitable => "multitable", [BLOCK BLOCKITEM ITEM_CONTAINER], MULTITABLE;
    quotation => "quotation", [BLOCK], 1;
    raggedright => "raggedright", [BLOCK ALIGN], 0;
    smalldisplay => "smalldisplay", [BLOCK PREFORMATTED], 0;
    smallexample => "smallexample", [BLOCK PREFORMATTED PREFORMATTED_CODE], 0;
    smallformat => "smallformat", [BLOCK PREFORMATTED], 0;
    smalllisp => "smalllisp", [BLOCK PREFORMATTED PREFORMATTED_CODE], 0;
    smallquotation => "smallquotation", [BLOCK], 1;
    table => "table", [BLOCK BLOCKITEM ITEM_LINE], 1;
    titlepage => "titlepage", [BLOCK REGION], 0;
    vtable => "vtable", [BLOCK BLOCKITEM ITEM_LINE], 1;

    // Raw and conditional blocks
    docbook => "docbook", [BLOCK FORMAT_RAW], RAW_BLOCK;
    html => "html", [BLOCK FORMAT_RAW], RAW_BLOCK;
    ignore => "ignore", [BLOCK RAW], RAW_BLOCK;
    latex => "latex", [BLOCK FORMAT_RAW], RAW_BLOCK;
    r#macro => "macro", [BLOCK RAW], RAW_BLOCK;
    rmacro => "rmacro", [BLOCK RAW], RAW_BLOCK;
    tex => "tex", [BLOCK FORMAT_RAW], RAW_BLOCK;
    verbatim => "verbatim", [BLOCK RAW PREFORMATTED], RAW_BLOCK;
    xml => "xml", [BLOCK FORMAT_RAW], RAW_BLOCK;
    ifclear => "ifclear", [BLOCK], CONDITIONAL;
    ifcommanddefined => "ifcommanddefined", [BLOCK], CONDITIONAL;
    ifcommandnotdefined => "ifcommandnotdefined", [BLOCK], CONDITIONAL;
    ifdocbook => "ifdocbook", [BLOCK], CONDITIONAL;
    ifhtml => "ifhtml", [BLOCK], CONDITIONAL;
    ifinfo => "ifinfo", [BLOCK], CONDITIONAL;
    iflatex => "iflatex", [BLOCK], CONDITIONAL;
    ifnotdocbook => "ifnotdocbook", [BLOCK], CONDITIONAL;
    ifnothtml => "ifnothtml", [BLOCK], CONDITIONAL;
    ifnotinfo => "ifnotinfo", [BLOCK], CONDITIONAL;
    ifnotlatex => "ifnotlatex", [BLOCK], CONDITIONAL;
    ifnotplaintext => "ifnotplaintext", [BLOCK], CONDITIONAL;
    ifnottex => "ifnottex", [BLOCK], CONDITIONAL;
    ifnotxml => "ifnotxml", [BLOCK], CONDITIONAL;
    ifplaintext => "ifplaintext", [BLOCK], CONDITIONAL;
    ifset => "ifset", [BLOCK], CONDITIONAL;
    iftex => "iftex", [BLOCK], CONDITIONAL;
    ifxml => "ifxml", [BLOCK], CONDITIONAL;

    // Definitions
    defcv => "defcv", [BLOCK DEF], 0;
    deffn => "deffn", [BLOCK DEF], 0;
    defmac => "defmac", [BLOCK DEF DEF_ALIASES], 0;
    defmethod => "defmethod", [BLOCK DEF DEF_ALIASES], 0;
    defop => "defop", [BLOCK DEF], 0;
    defopt => "defopt", [BLOCK DEF DEF_ALIASES], 0;
    defspec => "defspec", [BLOCK DEF DEF_ALIASES], 0;
    deftp => "deftp", [BLOCK DEF], 0;
    deftypefn => "deftypefn", [BLOCK DEF], 0;
    deftypefun => "deftypefun", [BLOCK DEF DEF_ALIASES], 0;
    deftypevar => "deftypevar", [BLOCK DEF DEF_ALIASES], 0;
    deftypevr => "deftypevr", [BLOCK DEF], 0;
    defun => "defun", [BLOCK DEF DEF_ALIASES], 0;
    defvar => "defvar", [BLOCK DEF DEF_ALIASES], 0;
    defvr => "defvr", [BLOCK DEF], 0;
    deffnx => "deffnx", [MISC DEF], LINE;
    deftypefnx => "deftypefnx", [MISC DEF], LINE;
    defunx => "defunx", [MISC DEF DEF_ALIASES], LINE;
    defvrx => "defvrx", [MISC DEF], LINE;
}
