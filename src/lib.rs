//! Parse JSDoc-style block comments (`/** ... */`) into a description and
//! a list of `@tag {type} name description` entries.
//!
//! ```
//! let comments = jsdoc_parser::parse("/** Adds.\n * @param {number} a first\n */");
//!
//! assert_eq!(comments.len(), 1);
//! assert_eq!(comments[0].description, "Adds.");
//! assert_eq!(comments[0].tags[0].tag_name, "param");
//! assert_eq!(comments[0].tags[0].param_type, "number");
//! assert_eq!(comments[0].tags[0].param_name, "a");
//! assert_eq!(comments[0].tags[0].param_desc, "first");
//! ```

mod decoration;
mod extract;
mod segment;
mod tag;

pub mod ast;
pub mod diagnostic;
pub mod parser;
pub mod symbol;
pub mod traverse;

pub use ast::{DocComment, Tag};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use parser::{ParseFileResult, Parser};

/// Parse all doc comments of the input, in source order.
///
/// Anomalies (unterminated comment, unclosed type brace) never abort the
/// parsing; use [`Parser`] to get them reported as diagnostics.
pub fn parse(input: &str) -> Vec<DocComment> {
    let lookup = line_col::LineColLookup::new(input);
    let mut diagnostics = Vec::new();

    parser::parse_comments(input, &lookup, &mut diagnostics)
}
