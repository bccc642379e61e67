use serde_derive::Serialize;

use crate::ast;

#[derive(Serialize, Clone, Debug)]
pub enum Symbol<'a> {
    Comment(&'a ast::DocComment),
    /// A tag and the comment it belongs to
    Tag(&'a ast::DocComment, &'a ast::Tag),
}

impl<'a> Symbol<'a> {
    pub fn get_name(&self) -> Option<&str> {
        match self {
            Symbol::Comment(_) => None,
            Symbol::Tag(_, t) => Some(&t.tag_name),
        }
    }

    pub fn get_range(&self) -> &ast::Range {
        match self {
            Symbol::Comment(c) => &c.full_range,
            Symbol::Tag(_, t) => &t.symbol_range,
        }
    }

    pub fn get_comment(&self) -> &ast::DocComment {
        match self {
            Symbol::Comment(c) => c,
            Symbol::Tag(c, _) => c,
        }
    }

    /// Short summary: the first description line of a comment, or
    /// `{type} name` of a tag
    pub fn get_details(&self) -> Option<String> {
        match self {
            Symbol::Comment(c) => c
                .description
                .lines()
                .next()
                .filter(|l| !l.is_empty())
                .map(str::to_owned),
            Symbol::Tag(_, t) => {
                let type_str = if t.param_type.is_empty() {
                    None
                } else {
                    Some(format!("{{{}}}", t.param_type))
                };
                let name_str = Some(t.param_name.clone()).filter(|n| !n.is_empty());

                let details = [type_str, name_str]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(" ");

                if details.is_empty() {
                    None
                } else {
                    Some(details)
                }
            }
        }
    }
}
