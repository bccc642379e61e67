use crate::ast::Range;
use serde_derive::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub range: Range,
    pub message: String,
    pub context_message: Option<String>,
    pub hint: Option<String>,
    pub related_infos: Vec<RelatedInfo>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub enum DiagnosticKind {
    Warning,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RelatedInfo {
    pub message: String,
    pub range: Range,
}

impl Diagnostic {
    pub(crate) fn unterminated_comment(range: Range) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Warning,
            range,
            message: "Unterminated doc comment".to_owned(),
            context_message: Some("missing `*/`".to_owned()),
            hint: Some("the comment extends to the end of the input".to_owned()),
            related_infos: Vec::new(),
        }
    }

    pub(crate) fn unclosed_type_brace(range: Range, tag_range: Range, tag_name: &str) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Warning,
            range,
            message: format!("Unclosed type brace in tag `@{}`", tag_name),
            context_message: Some("missing `}`".to_owned()),
            hint: Some("the rest of the tag is used as type".to_owned()),
            related_infos: Vec::from([RelatedInfo {
                message: "tag location".to_owned(),
                range: tag_range,
            }]),
        }
    }
}
