//! A lightweight syntax highlighter for short code snippets.
//!
//! Highlighting is a fixed pipeline of regex passes laid over the text. Each pass
//! marks the ranges it matches and a later pass overwrites what an earlier one marked:
//!
//! 1. keywords, one pass per keyword, as whole words
//! 2. double or single quoted strings
//! 3. numbers
//! 4. single line comments
//! 5. block comments
//!
//! There is no lexer behind this. A comment marker inside a string is still a comment.
//!
//! ```
//! use synlight::{highlight, Kind, Language};
//!
//! let styled = highlight("let x = 1 // one", Language::Swift);
//! assert_eq!(styled.text(), "let x = 1 // one");
//! assert_eq!(styled.kind_at(0), Some(Kind::Keyword));
//! assert_eq!(styled.kind_at(8), Some(Kind::Number));
//! assert_eq!(styled.kind_at(10), Some(Kind::Comment));
//! ```

pub mod error;
pub mod languages;
pub mod theme;
pub mod tokens;
pub mod util;

pub use error::{Error, Result};
pub use languages::{Language, LanguageDef};
pub use regex::Regex;
pub use theme::{Color, Theme};
pub use tokens::{Kind, Span, StyledText, TokOpt};
pub use util::{trim, trim_fit};

use std::ops::Range;

/// Double or single quoted runs of non-quote characters
const STRING_PATTERN: &str = r#""[^"]*"|'[^']*'"#;
/// Unsigned decimal numbers, with an optional fraction
const NUMBER_PATTERN: &str = r"\b\d+\.?\d*\b";

/// Highlight a snippet of code written in one of the built-in languages.
///
/// This never fails, at worst the text comes back with no styling at all.
pub fn highlight(code: &str, language: Language) -> StyledText {
    language.highlighter().run(code)
}

/// A compiled language definition, ready to highlight code
#[derive(Debug, Clone)]
pub struct Highlighter {
    /// Name of the language being highlighted
    name: &'static str,
    /// One whole-word expression per keyword, in application order
    keywords: Vec<Regex>,
    string: Regex,
    number: Regex,
    single_line_comment: Regex,
    multi_line_comment_start: Regex,
    multi_line_comment_end: Regex,
}

impl Highlighter {
    /// Compile a language definition.
    ///
    /// Fails only if one of the definition's patterns is not a valid regular expression.
    pub fn new(def: &LanguageDef) -> Result<Self> {
        let keywords = def
            .keywords
            .iter()
            .map(|kw| compile(&format!(r"\b{}\b", regex::escape(kw))))
            .collect::<Result<Vec<_>>>()?;
        let result = Self {
            name: def.name,
            keywords,
            string: compile(STRING_PATTERN)?,
            number: compile(NUMBER_PATTERN)?,
            single_line_comment: compile(def.single_line_comment)?,
            multi_line_comment_start: compile(def.multi_line_comment_start)?,
            multi_line_comment_end: compile(def.multi_line_comment_end)?,
        };
        tracing::debug!(language = def.name, keywords = def.keywords.len(), "compiled highlighter");
        Ok(result)
    }

    /// Name of the language this highlighter was built from
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Highlight a whole piece of code.
    ///
    /// Every call starts from scratch, there is no state carried between runs.
    pub fn run(&self, code: &str) -> StyledText {
        let mut result = StyledText::plain(code);
        // Keywords, applied one after another in list order
        let mut count = 0;
        for kw in &self.keywords {
            count += apply(&mut result, kw, code, Kind::Keyword);
        }
        tracing::trace!(language = self.name, matches = count, "keyword pass");
        // Strings, numbers and line comments each overwrite what came before
        let count = apply(&mut result, &self.string, code, Kind::String);
        tracing::trace!(language = self.name, matches = count, "string pass");
        let count = apply(&mut result, &self.number, code, Kind::Number);
        tracing::trace!(language = self.name, matches = count, "number pass");
        let count = apply(&mut result, &self.single_line_comment, code, Kind::Comment);
        tracing::trace!(language = self.name, matches = count, "line comment pass");
        // Block comments last
        let blocks = self.block_comments(code);
        tracing::trace!(language = self.name, matches = blocks.len(), "block comment pass");
        for range in blocks {
            result.mark(range, Kind::Comment);
        }
        result
    }

    /// Locate block comments by pairing each opening delimiter with the next closing one.
    /// Scanning stops at an opener that is never closed.
    fn block_comments(&self, code: &str) -> Vec<Range<usize>> {
        let mut result = vec![];
        let mut search_start = 0;
        while search_start < code.len() {
            let Some(start) = self.multi_line_comment_start.find_at(code, search_start) else {
                break;
            };
            let Some(end) = self.multi_line_comment_end.find_at(code, start.end()) else {
                tracing::trace!(language = self.name, at = start.start(), "unclosed block comment");
                break;
            };
            result.push(start.start()..end.end());
            // Never rescan from the same place, even if a delimiter matched nothing
            search_start = end.end().max(search_start + 1);
        }
        result
    }
}

/// This will find all occurances of an expression in a document (and return byte ranges)
pub fn find_all(exp: &Regex, target: &str) -> Vec<Range<usize>> {
    exp.find_iter(target).map(|m| m.range()).collect()
}

/// Compile a pattern with `^` and `$` anchoring at line boundaries.
/// A `\r\n` line ending counts as one boundary and `.` never matches the `\r`.
fn compile(pattern: &str) -> Result<Regex> {
    Ok(Regex::new(&format!("(?mR){pattern}"))?)
}

/// Mark every match of an expression, returning how many were marked
fn apply(result: &mut StyledText, exp: &Regex, code: &str, kind: Kind) -> usize {
    let ranges = find_all(exp, code);
    let count = ranges.len();
    for range in ranges {
        result.mark(range, kind);
    }
    count
}
