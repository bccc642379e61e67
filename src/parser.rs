use std::{
    fmt::Debug,
    io::Read,
    path::{Path, PathBuf},
};

use crate::ast::{DocComment, Range};
use crate::decoration::content_lines;
use crate::diagnostic::Diagnostic;
use crate::extract::{extract, CommentSpan};
use crate::segment::segment;
use crate::tag::parse_tag;

/// A parser instance which receives the individual source files via
/// Parser::add_content() or Parser::add_file(). Once all the files
/// have been added, call Parser::parse() to access the results.
///
/// Example:
/// ```
/// use jsdoc_parser::{Parser, ParseFileResult};
///
/// let mut parser = Parser::new();
///
/// // Add files via ID + content
/// parser.add_content(1, "/** First file */");
/// parser.add_content(2, "/** Second file\n * @param {number} x */");
/// parser.add_content(3, "no doc comment");
///
/// // Parse and get results
/// let results: Vec<ParseFileResult<_>> = parser.parse();
///
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[0].id, 1);
/// assert_eq!(results[1].comments[0].tags[0].param_name, "x");
/// assert!(results[2].comments.is_empty());
/// ```
pub struct Parser<ID>
where
    ID: Eq + Clone + Debug,
{
    file_results: Vec<ParseFileResult<ID>>,
}

/// The parse result of 1 file with its corresponding ID as given via
/// Parser::add_content() or Parser::add_file().
#[derive(Debug)]
pub struct ParseFileResult<ID>
where
    ID: Eq + Clone + Debug,
{
    pub id: ID,
    pub comments: Vec<DocComment>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<ID> Parser<ID>
where
    ID: Eq + Clone + Debug,
{
    /// Create a new, empty parser
    pub fn new() -> Self {
        Parser {
            file_results: Vec::new(),
        }
    }

    /// Add a file content and its key to the parser
    pub fn add_content(&mut self, id: ID, content: &str) {
        let lookup = line_col::LineColLookup::new(content);
        let mut diagnostics = Vec::new();

        let comments = parse_comments(content, &lookup, &mut diagnostics);

        self.file_results.push(ParseFileResult {
            id,
            comments,
            diagnostics,
        });
    }

    /// Get the results, in the order the files were added
    pub fn parse(self) -> Vec<ParseFileResult<ID>> {
        self.file_results
    }
}

impl Parser<PathBuf> {
    /// Add a file to the parser and use its path as key
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P) -> std::io::Result<()> {
        let mut file = std::fs::File::open(path.as_ref())?;
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;

        self.add_content(PathBuf::from(path.as_ref()), &buffer);
        Ok(())
    }
}

impl<ID> Default for Parser<ID>
where
    ID: Eq + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn parse_comments(
    input: &str,
    lookup: &line_col::LineColLookup,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<DocComment> {
    extract(input)
        .iter()
        .map(|span| parse_comment(span, lookup, diagnostics))
        .collect()
}

fn parse_comment(
    span: &CommentSpan<'_>,
    lookup: &line_col::LineColLookup,
    diagnostics: &mut Vec<Diagnostic>,
) -> DocComment {
    let full_range = Range::new(lookup, span.start, span.end);
    if !span.terminated {
        diagnostics.push(Diagnostic::unterminated_comment(full_range.clone()));
    }

    let lines = content_lines(span);
    let segments = segment(&lines);

    let tags = segments
        .tags
        .iter()
        .filter_map(|block| block.split_first())
        .map(|(first, rest)| parse_tag(first, rest, lookup, diagnostics))
        .collect();

    DocComment {
        raw_lines: span.lines.iter().map(|l| l.text.to_owned()).collect(),
        description: segments.description_text(),
        tags,
        full_range,
    }
}
