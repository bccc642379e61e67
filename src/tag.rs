use std::iter;

use crate::ast::{Range, Tag};
use crate::decoration::ContentLine;
use crate::diagnostic::Diagnostic;

/// Parse the fields of one tag block.
///
/// The type may continue on the following lines (concatenated without
/// separator), the name never does, and the description joins the lines
/// with `\n`.
pub(crate) fn parse_tag<'a>(
    first: &ContentLine<'a>,
    rest: &[ContentLine<'a>],
    lookup: &line_col::LineColLookup,
    diagnostics: &mut Vec<Diagnostic>,
) -> Tag {
    let last = rest.last().unwrap_or(first);
    let symbol_range = Range::new(lookup, first.offset, last.offset + last.text.len());

    let header = first.text.strip_prefix('@').unwrap_or(first.text);
    let name_end = header.find(char::is_whitespace).unwrap_or(header.len());
    let after_name = header[name_end..].trim_start();

    let mut tag = Tag {
        tag_name: header[..name_end].to_owned(),
        param_type: String::new(),
        param_name: String::new(),
        param_desc: String::new(),
        symbol_range,
    };

    // Index in `rest` of the first line after the header, and what remains of the header
    let (next_line, remainder) = match after_name.strip_prefix('{') {
        None => (0, after_name),
        Some(type_start) => {
            let mut param_type = String::new();
            let mut current = type_start;
            let mut line = 0;

            let closed = loop {
                if let Some(close) = current.find('}') {
                    param_type.push_str(&current[..close]);
                    break Some(&current[close + 1..]);
                }
                param_type.push_str(current);

                match rest.get(line) {
                    Some(l) => {
                        current = l.text;
                        line += 1;
                    }
                    None => break None,
                }
            };

            match closed {
                Some(remainder) => {
                    tag.param_type = param_type.trim().to_owned();
                    (line, remainder)
                }
                None => {
                    let brace = first.offset + first.text.len() - after_name.len();
                    diagnostics.push(Diagnostic::unclosed_type_brace(
                        Range::new(lookup, brace, tag.symbol_range.end.offset),
                        tag.symbol_range.clone(),
                        &tag.tag_name,
                    ));
                    tag.param_type = param_type;
                    return tag;
                }
            }
        }
    };

    let remainder = remainder.trim_start();
    let name_end = remainder
        .find(char::is_whitespace)
        .unwrap_or(remainder.len());
    tag.param_name = remainder[..name_end].to_owned();

    let leftover = remainder[name_end..].trim_start();
    let desc_lines: Vec<&str> = iter::once(leftover)
        .filter(|s| !s.is_empty())
        .chain(rest[next_line..].iter().map(|l| l.text))
        .collect();
    tag.param_desc = desc_lines
        .join("\n")
        .trim_end_matches(|c: char| c.is_whitespace() && c != '\n')
        .to_owned();

    tag
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticKind;

    fn parse(texts: &[&str]) -> (Tag, Vec<Diagnostic>) {
        let input = texts.join("\n");
        let lookup = line_col::LineColLookup::new(&input);

        let mut offset = 0;
        let lines: Vec<ContentLine> = texts
            .iter()
            .map(|&text| {
                let line = ContentLine { text, offset };
                offset += text.len() + 1;
                line
            })
            .collect();

        let mut diagnostics = Vec::new();
        let tag = parse_tag(&lines[0], &lines[1..], &lookup, &mut diagnostics);
        (tag, diagnostics)
    }

    fn fields(tag: &Tag) -> (&str, &str, &str, &str) {
        (
            tag.tag_name.as_str(),
            tag.param_type.as_str(),
            tag.param_name.as_str(),
            tag.param_desc.as_str(),
        )
    }

    #[test]
    fn test_tag_name() {
        let (tag, diagnostics) = parse(&["@tag"]);
        assert_eq!(fields(&tag), ("tag", "", "", ""));
        assert!(diagnostics.is_empty());

        let (tag, _) = parse(&["@ta*@g d"]);
        assert_eq!(fields(&tag), ("ta*@g", "", "d", ""));
    }

    #[test]
    fn test_param_type() {
        let (tag, _) = parse(&["@tag {type}"]);
        assert_eq!(fields(&tag), ("tag", "type", "", ""));

        let (tag, _) = parse(&["@tag {  ty pe   }"]);
        assert_eq!(tag.param_type, "ty pe");

        let (tag, _) = parse(&["@tag {typ", "e}"]);
        assert_eq!(fields(&tag), ("tag", "type", "", ""));

        let (tag, _) = parse(&["@tag {a", "b", "c} name desc", "more"]);
        assert_eq!(fields(&tag), ("tag", "abc", "name", "desc\nmore"));
    }

    #[test]
    fn test_unclosed_type() {
        let (tag, diagnostics) = parse(&["@tag {type desc "]);
        assert_eq!(fields(&tag), ("tag", "type desc ", "", ""));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::Warning);
        assert_eq!(diagnostics[0].range.start.offset, 5);
        assert_eq!(diagnostics[0].range.end.offset, 16);

        let (tag, diagnostics) = parse(&["@tag { a", " b"]);
        assert_eq!(tag.param_type, " a b");
        assert_eq!(diagnostics[0].range.end.line_col, (2, 3));
    }

    #[test]
    fn test_param_name() {
        let (tag, _) = parse(&["@tag {type} @name"]);
        assert_eq!(tag.param_name, "@name");

        let (tag, _) = parse(&["@tag {type} {name} "]);
        assert_eq!(fields(&tag), ("tag", "type", "{name}", ""));

        let (tag, _) = parse(&["@tag {type} nam", "e"]);
        assert_eq!(fields(&tag), ("tag", "type", "nam", "e"));

        let (tag, _) = parse(&["@tag {type}", "e"]);
        assert_eq!(fields(&tag), ("tag", "type", "", "e"));

        let (tag, _) = parse(&["@tag {type}name"]);
        assert_eq!(tag.param_name, "name");
    }

    #[test]
    fn test_param_desc() {
        let (tag, _) = parse(&["@tag {type} name desc "]);
        assert_eq!(fields(&tag), ("tag", "type", "name", "desc"));

        let (tag, _) = parse(&["@tag {type} name d", "", "esc"]);
        assert_eq!(tag.param_desc, "d\n\nesc");

        let (tag, _) = parse(&["@tag {type} name d", "@ gg"]);
        assert_eq!(tag.param_desc, "d\n@ gg");

        let (tag, _) = parse(&["@tagNameDesc name3 desc"]);
        assert_eq!(fields(&tag), ("tagNameDesc", "", "name3", "desc"));

        // Trailing blank lines are kept, only the last line loses its trailing spaces
        let (tag, _) = parse(&["@tag n d", ""]);
        assert_eq!(tag.param_desc, "d\n");

        let (tag, _) = parse(&["@tag n d \t", "e  "]);
        assert_eq!(tag.param_desc, "d \t\ne");
    }

    #[test]
    fn test_symbol_range() {
        let (tag, _) = parse(&["@tag {type}", "desc"]);
        assert_eq!(tag.symbol_range.start.line_col, (1, 1));
        assert_eq!(tag.symbol_range.end.line_col, (2, 5));
    }
}
