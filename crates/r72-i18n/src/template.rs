#![forbid(unsafe_code)]

//! Single-pass `{name}` template expansion.
//!
//! # Invariants
//!
//! 1. **Single pass**: substituted values are never rescanned, so a
//!    value containing `{name}` text cannot trigger further
//!    substitution.
//! 2. **At most once**: each argument substitutes the first occurrence
//!    of its name only; later occurrences stay literal.
//! 3. **Unknown names stay literal**: `{typo}` survives unchanged, as
//!    does an unclosed `{` (it runs literally to the end).
//! 4. **No empty segments**: adjacent literals merge and empty values
//!    are dropped, so every emitted segment carries text.

/// A piece of an expanded template.
///
/// The split matters to the renderer: substituted values are emphasized,
/// literal text is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied verbatim from the template.
    Literal(String),
    /// A substituted placeholder value.
    Value(String),
}

impl Segment {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Segment::Literal(s) | Segment::Value(s) => s,
        }
    }

    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Segment::Value(_))
    }
}

/// Expands `{name}` placeholders in `template` against an ordered
/// argument list.
///
/// Placeholders may appear in any order or be omitted. A `{name}` whose
/// name matches an argument is replaced once; unknown names, repeated
/// names, and unclosed braces pass through as literal text.
#[must_use]
pub fn expand(template: &str, args: &[(&str, &str)]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut used = vec![false; args.len()];
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            literal.push(ch);
            continue;
        }

        let mut token = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            token.push(c);
        }

        if !closed {
            literal.push('{');
            literal.push_str(&token);
            break;
        }

        match args.iter().position(|&(name, _)| name == token) {
            Some(i) if !used[i] => {
                used[i] = true;
                let value = args[i].1;
                if !value.is_empty() {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Value(value.to_string()));
                }
            }
            _ => {
                literal.push('{');
                literal.push_str(&token);
                literal.push('}');
            }
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

/// Expands the template and joins the segments into a plain string.
///
/// Used where the emphasis split does not matter, such as logs.
#[must_use]
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    expand(template, args)
        .into_iter()
        .map(|segment| match segment {
            Segment::Literal(s) | Segment::Value(s) => s,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Segment {
        Segment::Literal(s.to_string())
    }

    fn val(s: &str) -> Segment {
        Segment::Value(s.to_string())
    }

    #[test]
    fn substitutes_known_names() {
        let segments = expand("Hello {name}!", &[("name", "Alice")]);
        assert_eq!(segments, vec![lit("Hello "), val("Alice"), lit("!")]);
    }

    #[test]
    fn placeholders_substitute_in_any_order() {
        let args = [("amount", "$1,000.00"), ("years", "9.0"), ("rate", "8")];
        let segments = expand("{rate}% over {years}: {amount}", &args);
        assert_eq!(
            segments,
            vec![
                val("8"),
                lit("% over "),
                val("9.0"),
                lit(": "),
                val("$1,000.00"),
            ]
        );
    }

    #[test]
    fn omitted_placeholder_is_fine() {
        let segments = expand("just text", &[("name", "Alice")]);
        assert_eq!(segments, vec![lit("just text")]);
    }

    #[test]
    fn unknown_name_stays_literal() {
        assert_eq!(interpolate("Hello {typo}!", &[("name", "A")]), "Hello {typo}!");
    }

    #[test]
    fn second_occurrence_stays_literal() {
        let segments = expand("{x} and {x}", &[("x", "A")]);
        assert_eq!(segments, vec![val("A"), lit(" and {x}")]);
    }

    #[test]
    fn unclosed_brace_runs_to_end() {
        assert_eq!(interpolate("Hello {world", &[("world", "X")]), "Hello {world");
    }

    #[test]
    fn empty_braces_stay_literal() {
        assert_eq!(interpolate("Hello {}", &[]), "Hello {}");
    }

    #[test]
    fn value_containing_placeholder_is_not_rescanned() {
        let out = interpolate("Hello {name}!", &[("name", "{other}"), ("other", "B")]);
        assert_eq!(out, "Hello {other}!");
    }

    #[test]
    fn empty_value_emits_no_segment() {
        let segments = expand("a{x}b", &[("x", "")]);
        assert_eq!(segments, vec![lit("ab")]);
    }

    #[test]
    fn no_empty_segments_at_edges() {
        let segments = expand("{x}", &[("x", "A")]);
        assert_eq!(segments, vec![val("A")]);

        let segments = expand("{x}{y}", &[("x", "A"), ("y", "B")]);
        assert_eq!(segments, vec![val("A"), val("B")]);
    }

    #[test]
    fn interpolate_joins_segments() {
        let out = interpolate(
            "Your {amount} doubles in {years} years.",
            &[("amount", "$5.00"), ("years", "9.0")],
        );
        assert_eq!(out, "Your $5.00 doubles in 9.0 years.");
    }

    #[test]
    fn devanagari_templates_expand() {
        let out = interpolate(
            "तपाईंको {amount} {rate}% ब्याज दरमा {years} वर्षमा दोब्बर हुनेछ।",
            &[("amount", "रू1,000.00"), ("years", "9.0"), ("rate", "8")],
        );
        assert_eq!(out, "तपाईंको रू1,000.00 8% ब्याज दरमा 9.0 वर्षमा दोब्बर हुनेछ।");
    }
}
