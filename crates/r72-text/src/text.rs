#![forbid(unsafe_code)]

//! Span, line, and text containers.

use std::borrow::Cow;

use r72_core::text_width::display_width;
use r72_style::Style;

/// A run of text drawn with one style.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Span {
    pub content: Cow<'static, str>,
    /// `None` inherits the enclosing widget's style.
    pub style: Option<Style>,
}

impl Span {
    pub fn raw(content: impl Into<Cow<'static, str>>) -> Self {
        Self {
            content: content.into(),
            style: None,
        }
    }

    pub fn styled(content: impl Into<Cow<'static, str>>, style: Style) -> Self {
        Self {
            content: content.into(),
            style: Some(style),
        }
    }

    /// Display width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        display_width(&self.content)
    }
}

/// One visual line of spans.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn raw(content: impl Into<Cow<'static, str>>) -> Self {
        Self {
            spans: vec![Span::raw(content)],
        }
    }

    #[must_use]
    pub fn from_spans(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Total display width in cells.
    #[must_use]
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// The line's text with styling stripped.
    #[must_use]
    pub fn plain(&self) -> String {
        self.spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect::<String>()
    }
}

impl From<Span> for Line {
    fn from(span: Span) -> Self {
        Self { spans: vec![span] }
    }
}

/// A block of lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    pub lines: Vec<Line>,
}

impl Text {
    /// Unstyled text, split on newlines.
    pub fn raw(content: impl AsRef<str>) -> Self {
        Self {
            lines: content
                .as_ref()
                .split('\n')
                .map(|l| Line::raw(l.to_string()))
                .collect(),
        }
    }

    #[must_use]
    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Number of lines.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Width of the widest line.
    #[must_use]
    pub fn width(&self) -> usize {
        self.lines.iter().map(Line::width).max().unwrap_or(0)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::raw(s)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text::raw(s)
    }
}

impl From<Line> for Text {
    fn from(line: Line) -> Self {
        Self { lines: vec![line] }
    }
}
