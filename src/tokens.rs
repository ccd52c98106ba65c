use std::fmt;
use std::ops::Range;
use unicode_width::UnicodeWidthChar;

/// The classification attached to a styled range of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Keyword,
    String,
    Number,
    Comment,
}

impl Kind {
    /// The token name, as used by themes and renderers
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Keyword => "keyword",
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Comment => "comment",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A maximal run of bytes sharing one classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Byte range within the original text
    pub range: Range<usize>,
    pub kind: Kind,
}

/// This is an enum for representing tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokOpt {
    /// The Some variant represents styled text in the format Some(TEXT, KIND).
    ///
    /// So for a comment token, you can expect to see Some("/* comment */", Kind::Comment)
    Some(String, Kind),
    /// The None variant represents just plain text.
    None(String),
}

impl TokOpt {
    /// The text covered by this token
    pub fn text(&self) -> &str {
        let (TokOpt::Some(text, _) | TokOpt::None(text)) = self;
        text
    }

    /// The classification of this token, if it is styled
    pub fn kind(&self) -> Option<Kind> {
        match self {
            TokOpt::Some(_, kind) => Some(*kind),
            TokOpt::None(_) => None,
        }
    }

    /// Works out if this token is empty, and thus redundant
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Display width of this token in terminal columns
    pub fn width(&self) -> usize {
        self.text().chars().map(column_width).sum()
    }

    /// This will remove one display column from the start of this token.
    ///
    /// When the first character is wider than a single column,
    /// the remaining half is left behind as a space.
    pub fn nibble(&mut self) -> Option<char> {
        let (TokOpt::Some(ref mut text, _) | TokOpt::None(ref mut text)) = self;
        let ch = text.chars().next()?;
        text.remove(0);
        if column_width(ch) > 1 {
            text.insert(0, ' ');
        }
        Some(ch)
    }

    fn text_mut(&mut self) -> &mut String {
        let (TokOpt::Some(text, _) | TokOpt::None(text)) = self;
        text
    }

    fn with_text(&self, text: String) -> TokOpt {
        match self {
            TokOpt::Some(_, kind) => TokOpt::Some(text, *kind),
            TokOpt::None(_) => TokOpt::None(text),
        }
    }

    /// Cut this token down to at most `width` display columns.
    /// A wide character straddling the edge is replaced with a space.
    pub(crate) fn truncate(&self, width: usize) -> TokOpt {
        let mut kept = String::new();
        let mut used = 0;
        for ch in self.text().chars() {
            let w = column_width(ch);
            if used + w > width {
                if used < width {
                    kept.push(' ');
                }
                break;
            }
            kept.push(ch);
            used += w;
        }
        self.with_text(kept)
    }

    pub(crate) fn expand_tabs(&mut self, tab_width: usize) {
        let text = self.text_mut();
        if text.contains('\t') {
            *text = text.replace('\t', &" ".repeat(tab_width));
        }
    }
}

/// Display columns taken by a character. Control characters such as an unexpanded tab
/// take one column.
pub(crate) fn column_width(ch: char) -> usize {
    if ch.is_control() {
        1
    } else {
        ch.width().unwrap_or(0)
    }
}

/// The result of highlighting: the original text plus a classification per byte.
///
/// Styling is only ever layered on top of the text, the text itself is never altered.
/// A value is built once per highlighting request and is not updated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    marks: Vec<Option<Kind>>,
}

impl StyledText {
    /// Text with no styling applied
    pub(crate) fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            marks: vec![None; text.len()],
        }
    }

    /// Mark a byte range, overwriting whatever was there
    pub(crate) fn mark(&mut self, range: Range<usize>, kind: Kind) {
        self.marks[range].fill(Some(kind));
    }

    /// The original text
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether no part of the text is styled
    pub fn is_plain(&self) -> bool {
        self.marks.iter().all(Option::is_none)
    }

    /// The classification at a byte offset
    pub fn kind_at(&self, offset: usize) -> Option<Kind> {
        self.marks.get(offset).copied().flatten()
    }

    /// All styled ranges, in order. Neighbouring bytes of the same kind form one span,
    /// so touching block comments such as `/* a *//* b */`, or touching strings, come back
    /// as a single span. Don't count comments or strings with this.
    pub fn spans(&self) -> Vec<Span> {
        self.runs(0..self.text.len())
            .into_iter()
            .filter_map(|(range, kind)| Some(Span { range, kind: kind? }))
            .collect()
    }

    /// The whole text as a list of styled and plain tokens
    pub fn tokens(&self) -> Vec<TokOpt> {
        self.tokens_in(0..self.text.len())
    }

    /// Tokens for each line, split on `\n`.
    /// Newlines themselves are dropped and styled runs crossing a line break are split.
    pub fn lines(&self) -> Vec<Vec<TokOpt>> {
        let mut start = 0;
        let mut lines = vec![];
        for line in self.text.split('\n') {
            let end = start + line.len();
            lines.push(self.tokens_in(start..end));
            start = end + 1;
        }
        lines
    }

    fn tokens_in(&self, range: Range<usize>) -> Vec<TokOpt> {
        self.runs(range)
            .into_iter()
            .map(|(range, kind)| {
                let text = self.text[range].to_string();
                match kind {
                    Some(kind) => TokOpt::Some(text, kind),
                    None => TokOpt::None(text),
                }
            })
            .collect()
    }

    /// Split a byte range into maximal runs of equal marking
    fn runs(&self, range: Range<usize>) -> Vec<(Range<usize>, Option<Kind>)> {
        let mut result = vec![];
        let mut start = range.start;
        for x in range.clone() {
            if self.marks[x] != self.marks[start] {
                result.push((start..x, self.marks[start]));
                start = x;
            }
        }
        if start < range.end {
            result.push((start..range.end, self.marks[start]));
        }
        result
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
