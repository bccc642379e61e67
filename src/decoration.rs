use crate::extract::CommentSpan;

/// A comment line without its decoration (`/**`, `*/`, leading `*`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ContentLine<'a> {
    pub text: &'a str,
    /// Byte offset of the first character of `text` in the input
    pub offset: usize,
}

/// Strip the decoration of each raw line of the span.
///
/// The first and the last line are dropped if they only hold the
/// opening/closing token.
pub(crate) fn content_lines<'a>(span: &CommentSpan<'a>) -> Vec<ContentLine<'a>> {
    let last = span.lines.len().saturating_sub(1);

    span.lines
        .iter()
        .enumerate()
        .filter_map(|(i, raw)| {
            let mut text = raw.text;
            let mut cut = 0;

            if i == 0 {
                text = text.strip_prefix("/**").unwrap_or(text).trim_start();
            }

            if i == last && span.terminated {
                if let Some(s) = text.strip_suffix("*/") {
                    text = s;
                    cut = 2;
                }
            }

            if (i == 0 || i == last) && text.trim().is_empty() {
                return None;
            }

            if i != 0 {
                text = strip_leading_star(text);
            }

            Some(ContentLine {
                text,
                offset: raw.offset + raw.text.len() - cut - text.len(),
            })
        })
        .collect()
}

/// Remove the whitespace around exactly one leading `*`
fn strip_leading_star(line: &str) -> &str {
    let line = line.trim_start();
    line.strip_prefix('*').unwrap_or(line).trim_start()
}
