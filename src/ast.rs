use serde_derive::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Position {
    pub offset: usize,

    /// 1-based line and column
    pub line_col: (usize, usize),
}

impl Position {
    pub(crate) fn new(lookup: &line_col::LineColLookup, offset: usize) -> Self {
        Position {
            offset,
            line_col: lookup.get_by_cluster(offset),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub(crate) fn new(lookup: &line_col::LineColLookup, start: usize, end: usize) -> Self {
        let start = Position::new(lookup, start);
        let end = Position::new(lookup, end);

        Range { start, end }
    }

    /// Check if the given 1-based line/column lies within the range (inclusive)
    pub fn contains(&self, line_col: (usize, usize)) -> bool {
        self.start.line_col <= line_col && line_col <= self.end.line_col
    }
}

/// One parsed `/** ... */` block
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DocComment {
    /// Verbatim source lines of the block, from `/**` to `*/`
    pub raw_lines: Vec<String>,
    pub description: String,
    pub tags: Vec<Tag>,
    pub full_range: Range,
}

impl DocComment {
    /// Iterate over the tags with the given name (without `@`)
    pub fn tags_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Tag> + 'a {
        self.tags.iter().filter(move |t| t.tag_name == name)
    }
}

/// An `@tag {type} name description` entry.
///
/// Absent parts are empty strings.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Tag {
    pub tag_name: String,
    pub param_type: String,
    pub param_name: String,
    pub param_desc: String,
    pub symbol_range: Range,
}
