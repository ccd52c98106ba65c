//! These highlighters will return the following token kinds:
//!
//! keyword - a reserved word for that language
//! string - a double or single quoted run of text
//! number - an unsigned decimal number
//! comment - a comment (both multiline and single line)
//!
//! The set of languages is closed. Adding one means adding a variant to [Language]
//! and a matching [LanguageDef], nothing else.

use crate::{Error, Highlighter};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// A fixed highlighting configuration for one language.
///
/// The patterns are regular expressions. They are compiled in multi-line mode, so `$` in a
/// single line comment pattern anchors at the end of each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDef {
    /// Display name of the language
    pub name: &'static str,
    /// Reserved words, applied in this order
    pub keywords: &'static [&'static str],
    /// Matches from a line comment marker to the end of that line
    pub single_line_comment: &'static str,
    /// Matches the opening delimiter of a block comment
    pub multi_line_comment_start: &'static str,
    /// Matches the closing delimiter of a block comment
    pub multi_line_comment_end: &'static str,
}

pub const SWIFT: LanguageDef = LanguageDef {
    name: "Swift",
    keywords: &[
        "struct", "let", "var", "func", "private", "View", "some", "init", "if", "else",
        "return", "class", "protocol",
    ],
    single_line_comment: r"//.*$",
    multi_line_comment_start: r"/\*",
    multi_line_comment_end: r"\*/",
};

pub const PYTHON: LanguageDef = LanguageDef {
    name: "Python",
    keywords: &[
        "def", "class", "if", "else", "elif", "for", "while", "import", "from", "as",
        "return", "True", "False", "None",
    ],
    single_line_comment: r"#.*$",
    multi_line_comment_start: r#"""""#,
    multi_line_comment_end: r#"""""#,
};

pub const JAVASCRIPT: LanguageDef = LanguageDef {
    name: "JavaScript",
    keywords: &[
        "function", "let", "const", "var", "if", "else", "for", "while", "return", "class",
        "new", "this",
    ],
    single_line_comment: r"//.*$",
    multi_line_comment_start: r"/\*",
    multi_line_comment_end: r"\*/",
};

static SWIFT_HIGHLIGHTER: LazyLock<Highlighter> = LazyLock::new(swift);
static PYTHON_HIGHLIGHTER: LazyLock<Highlighter> = LazyLock::new(python);
static JAVASCRIPT_HIGHLIGHTER: LazyLock<Highlighter> = LazyLock::new(javascript);

/// Obtain the swift syntax highlighter
#[allow(clippy::missing_panics_doc)]
#[must_use]
pub fn swift() -> Highlighter {
    Highlighter::new(&SWIFT).expect("built-in swift definition is invalid")
}

/// Obtain the python syntax highlighter
#[allow(clippy::missing_panics_doc)]
#[must_use]
pub fn python() -> Highlighter {
    Highlighter::new(&PYTHON).expect("built-in python definition is invalid")
}

/// Obtain the javascript syntax highlighter
#[allow(clippy::missing_panics_doc)]
#[must_use]
pub fn javascript() -> Highlighter {
    Highlighter::new(&JAVASCRIPT).expect("built-in javascript definition is invalid")
}

/// The languages synlight knows how to highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Swift,
    Python,
    JavaScript,
}

impl Language {
    /// Every supported language, in declaration order
    pub const ALL: [Language; 3] = [Language::Swift, Language::Python, Language::JavaScript];

    /// The fixed configuration record for this language
    pub fn def(self) -> &'static LanguageDef {
        match self {
            Language::Swift => &SWIFT,
            Language::Python => &PYTHON,
            Language::JavaScript => &JAVASCRIPT,
        }
    }

    /// A shared, compiled highlighter for this language.
    /// Compilation happens once, on first use.
    pub fn highlighter(self) -> &'static Highlighter {
        match self {
            Language::Swift => &*SWIFT_HIGHLIGHTER,
            Language::Python => &*PYTHON_HIGHLIGHTER,
            Language::JavaScript => &*JAVASCRIPT_HIGHLIGHTER,
        }
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }

    /// Work out the language from a file extension
    pub fn from_extension(ext: &str) -> Option<Language> {
        match ext.to_lowercase().as_str() {
            "swift" => Some(Language::Swift),
            "py" | "pyw" => Some(Language::Python),
            "js" | "mjs" | "cjs" => Some(Language::JavaScript),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "swift" => Ok(Language::Swift),
            "python" | "py" => Ok(Language::Python),
            "javascript" | "js" => Ok(Language::JavaScript),
            _ => Err(Error::UnknownLanguage(s.to_string())),
        }
    }
}
