//! Block classification.

use serde::Serialize;

/// The kind of a markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading => "heading",
            BlockType::Code => "code",
            BlockType::Quote => "quote",
            BlockType::UnorderedList => "unordered_list",
            BlockType::OrderedList => "ordered_list",
        }
    }
}

pub(crate) const CODE_FENCE: &str = "```";
pub(crate) const UNORDERED_PREFIX: &str = "- ";

/// Number of leading `#` characters of `block`.
pub(crate) fn heading_level(block: &str) -> usize {
    block.chars().take_while(|c| *c == '#').count()
}

pub(crate) fn ordered_prefix(index: usize) -> String {
    format!("{}. ", index + 1)
}

fn is_heading(block: &str) -> bool {
    let level = heading_level(block);
    (1..=6).contains(&level) && block[level..].starts_with(' ')
}

fn is_code(block: &str) -> bool {
    block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE)
}

/// Classify a trimmed block. The first matching rule wins:
/// heading, code, quote, unordered list, ordered list, paragraph.
pub fn block_to_block_type(block: &str) -> BlockType {
    if is_heading(block) {
        return BlockType::Heading;
    }
    if is_code(block) {
        return BlockType::Code;
    }

    let lines: Vec<&str> = block.split('\n').collect();

    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }
    if lines.iter().all(|line| line.starts_with(UNORDERED_PREFIX)) {
        return BlockType::UnorderedList;
    }
    if lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&ordered_prefix(i)))
    {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}
