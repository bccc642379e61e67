use once_cell::sync::Lazy;
use regex::Regex;

// Non-greedy up to the first `*/` after the opening token, or to the end of the input
static DOC_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*\*.*?(?:\*/|\z)").unwrap());

/// A located `/** ... */` region
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CommentSpan<'a> {
    /// Byte offset of `/**`
    pub start: usize,
    /// Byte offset after `*/` (or end of input if unterminated)
    pub end: usize,
    pub lines: Vec<RawLine<'a>>,
    pub terminated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RawLine<'a> {
    pub text: &'a str,
    /// Byte offset of the first character of `text` in the input
    pub offset: usize,
}

/// Find all doc comments of the input, in the order of their opening token
pub(crate) fn extract(input: &str) -> Vec<CommentSpan<'_>> {
    let mut spans = Vec::new();

    for m in DOC_COMMENT.find_iter(input) {
        let mut offset = m.start();
        let lines: Vec<RawLine> = m
            .as_str()
            .split('\n')
            .map(|raw| {
                let raw_line = RawLine {
                    text: raw.strip_suffix('\r').unwrap_or(raw),
                    offset,
                };
                offset += raw.len() + 1;
                raw_line
            })
            .collect();

        // `/**/` is not closed by its own star
        let s = m.as_str();
        let terminated = s.len() >= 5 && s.ends_with("*/");

        spans.push(CommentSpan {
            start: m.start(),
            end: m.end(),
            lines,
            terminated,
        });
    }

    spans
}
