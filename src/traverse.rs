use crate::ast;
use crate::symbol::Symbol;

/// Determine the depth of traversal functions
#[derive(Clone, Copy)]
pub enum SymbolFilter {
    /// Only extract the comments
    CommentsOnly,
    /// Extract the comments and their tags
    All,
}

/// Traverse the parsed comments and provide the symbols to the given closure
///
/// This function works like the visitor pattern. The depth is determined
/// by the given filter. Comments are visited in source order, each
/// followed by its tags.
pub fn walk_symbols<'a, F: FnMut(Symbol<'a>)>(
    comments: &'a [ast::DocComment],
    filter: SymbolFilter,
    mut f: F,
) {
    comments.iter().for_each(|c| {
        f(Symbol::Comment(c));
        if let SymbolFilter::CommentsOnly = filter {
            return;
        }

        c.tags.iter().for_each(|t| f(Symbol::Tag(c, t)));
    });
}

/// Traverse the parsed comments and provide each tag to the given closure
pub fn walk_tags<'a, F: FnMut(&'a ast::DocComment, &'a ast::Tag)>(
    comments: &'a [ast::DocComment],
    mut f: F,
) {
    comments
        .iter()
        .for_each(|c| c.tags.iter().for_each(|t| f(c, t)));
}

/// Find the innermost symbol at the given 1-based line/column
pub fn find_symbol_at_line_col(
    comments: &[ast::DocComment],
    line_col: (usize, usize),
) -> Option<Symbol<'_>> {
    let mut found = None;
    walk_symbols(comments, SymbolFilter::All, |s| {
        if s.get_range().contains(line_col) {
            found = Some(s);
        }
    });

    found
}
