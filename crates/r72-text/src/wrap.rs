#![forbid(unsafe_code)]

//! Width-aware line wrapping that preserves span styles.
//!
//! Wrapping works on grapheme clusters, so multi-code-point glyphs
//! (Devanagari conjuncts, the "रू" currency sign) are never split, and
//! widths are cell widths, not byte or char counts. Breaks prefer the
//! last whitespace on the line; a single word wider than the limit is
//! split at a cluster boundary rather than overflowing.
//!
//! Styles travel with the text: each cluster remembers which span it
//! came from, and the wrapped lines are reassembled into spans with the
//! original styles. An emphasized value that lands on a line break stays
//! emphasized on both halves.

use r72_core::text_width::{grapheme_width, graphemes};
use r72_style::Style;

use crate::text::{Line, Span};

/// One grapheme cluster tagged with its source span.
struct Unit<'a> {
    cluster: &'a str,
    span_idx: usize,
    width: usize,
}

impl Unit<'_> {
    fn is_whitespace(&self) -> bool {
        self.cluster.chars().all(char::is_whitespace)
    }
}

/// Wrap a line to `width` cells, preserving span styles.
///
/// Returns at least one line. A `width` of zero disables wrapping.
#[must_use]
pub fn wrap_line(line: &Line, width: usize) -> Vec<Line> {
    if width == 0 || line.width() <= width {
        return vec![line.clone()];
    }

    let units: Vec<Unit<'_>> = line
        .spans
        .iter()
        .enumerate()
        .flat_map(|(span_idx, span)| {
            graphemes(span.content.as_ref()).map(move |cluster| Unit {
                cluster,
                span_idx,
                width: grapheme_width(cluster),
            })
        })
        .collect();

    let mut out: Vec<Line> = Vec::new();
    let mut cur: Vec<&Unit<'_>> = Vec::new();
    let mut cur_width = 0usize;
    // Index in `cur` of the last whitespace unit, the preferred break.
    let mut last_break: Option<usize> = None;

    for unit in &units {
        // Continuation lines never start with the whitespace that caused
        // the break.
        if cur.is_empty() && !out.is_empty() && unit.is_whitespace() {
            continue;
        }

        if !cur.is_empty() && cur_width + unit.width > width {
            let rest: Vec<&Unit<'_>> = match last_break {
                Some(bi) => cur.split_off(bi + 1),
                None => Vec::new(),
            };
            while cur.last().is_some_and(|u| u.is_whitespace()) {
                cur.pop();
            }
            out.push(rebuild(&cur, &line.spans));
            cur = rest;
            cur_width = cur.iter().map(|u| u.width).sum();
            last_break = cur.iter().rposition(|u| u.is_whitespace());

            if cur.is_empty() && unit.is_whitespace() {
                continue;
            }
        }

        if unit.is_whitespace() {
            last_break = Some(cur.len());
        }
        cur.push(unit);
        cur_width += unit.width;
    }

    while cur.last().is_some_and(|u| u.is_whitespace()) {
        cur.pop();
    }
    out.push(rebuild(&cur, &line.spans));
    out
}

/// Reassemble consecutive units into spans with their original styles.
fn rebuild(units: &[&Unit<'_>], spans: &[Span]) -> Line {
    let mut line = Line::default();
    let mut current: Option<(usize, String)> = None;
    for unit in units {
        match &mut current {
            Some((idx, text)) if *idx == unit.span_idx => text.push_str(unit.cluster),
            _ => {
                if let Some((idx, text)) = current.take() {
                    line.spans.push(make_span(text, spans[idx].style));
                }
                current = Some((unit.span_idx, unit.cluster.to_string()));
            }
        }
    }
    if let Some((idx, text)) = current {
        line.spans.push(make_span(text, spans[idx].style));
    }
    line
}

fn make_span(text: String, style: Option<Style>) -> Span {
    match style {
        Some(style) => Span::styled(text, style),
        None => Span::raw(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use r72_style::StyleFlags;

    fn plain_lines(lines: &[Line]) -> Vec<String> {
        lines.iter().map(Line::plain).collect()
    }

    #[test]
    fn short_line_is_untouched() {
        let line = Line::raw("hello");
        assert_eq!(plain_lines(&wrap_line(&line, 10)), vec!["hello"]);
    }

    #[test]
    fn breaks_at_whitespace() {
        let line = Line::raw("Hello world foo bar");
        assert_eq!(
            plain_lines(&wrap_line(&line, 10)),
            vec!["Hello", "world foo", "bar"]
        );
    }

    #[test]
    fn zero_width_disables_wrapping() {
        let line = Line::raw("Hello world");
        assert_eq!(wrap_line(&line, 0).len(), 1);
    }

    #[test]
    fn long_word_splits_at_cluster_boundary() {
        let line = Line::raw("abcdefghij");
        assert_eq!(
            plain_lines(&wrap_line(&line, 4)),
            vec!["abcd", "efgh", "ij"]
        );
    }

    #[test]
    fn styles_survive_the_break() {
        let bold = Style::new().attrs(StyleFlags::BOLD);
        let line = Line::from_spans(vec![
            Span::raw("paid "),
            Span::styled("$1,000,000.00", bold),
            Span::raw(" total"),
        ]);
        let wrapped = wrap_line(&line, 10);
        assert!(wrapped.len() > 1);
        // Every fragment of the amount keeps the bold style.
        for l in &wrapped {
            for span in &l.spans {
                if span.content.contains('$') || span.content.contains(',') {
                    assert_eq!(span.style, Some(bold), "{:?}", l);
                }
            }
        }
        // Nothing was lost.
        let joined = wrapped.iter().map(Line::plain).collect::<Vec<_>>().join(" ");
        assert!(joined.contains("$1,000,00"));
    }

    #[test]
    fn nepali_sentence_wraps_between_words() {
        let line = Line::raw("तपाईंको रकम दोब्बर हुनेछ");
        let wrapped = wrap_line(&line, 12);
        for l in &wrapped {
            assert!(l.width() <= 12, "line too wide: {:?}", l.plain());
        }
        // No cluster was torn apart: rejoining reproduces every word.
        let joined = plain_lines(&wrapped).join(" ");
        for word in ["तपाईंको", "रकम", "दोब्बर", "हुनेछ"] {
            assert!(joined.contains(word));
        }
    }

    #[test]
    fn trailing_whitespace_is_trimmed() {
        let line = Line::raw("ab cd   ");
        let wrapped = wrap_line(&line, 20);
        // Under the limit entirely, so the line is returned as-is.
        assert_eq!(wrapped.len(), 1);
        let line2 = Line::raw("ab    cd");
        let wrapped2 = wrap_line(&line2, 4);
        assert_eq!(plain_lines(&wrapped2), vec!["ab", "cd"]);
    }
}
