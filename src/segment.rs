use crate::decoration::ContentLine;

/// Content lines of one comment, split into description and tag blocks
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Segments<'a> {
    pub description: Vec<ContentLine<'a>>,
    /// Each block starts with its `@tag` line
    pub tags: Vec<Vec<ContentLine<'a>>>,
}

impl<'a> Segments<'a> {
    pub fn description_text(&self) -> String {
        self.description
            .iter()
            .map(|l| l.text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// `@` followed by a non-whitespace character
pub(crate) fn is_tag_start(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some('@') && matches!(chars.next(), Some(c) if !c.is_whitespace())
}

pub(crate) fn segment<'a>(lines: &[ContentLine<'a>]) -> Segments<'a> {
    enum State {
        Description,
        InTag,
    }

    let mut state = State::Description;
    let mut segments = Segments::default();

    for line in lines {
        let tag_start = is_tag_start(line.text);

        state = match state {
            State::Description if !tag_start => {
                segments.description.push(*line);
                State::Description
            }
            State::InTag if !tag_start => {
                if let Some(block) = segments.tags.last_mut() {
                    block.push(*line);
                }
                State::InTag
            }
            _ => {
                segments.tags.push(vec![*line]);
                State::InTag
            }
        };
    }

    segments
}
