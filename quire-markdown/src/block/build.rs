//! Block to HTML node builders.
//!
//! Each builder re-checks the shape its block type promises and reports a
//! syntax error when it does not hold, even though [`block_to_block_type`]
//! only routes well-formed blocks here.

use super::classify::{
    block_to_block_type, heading_level, ordered_prefix, BlockType, CODE_FENCE, UNORDERED_PREFIX,
};
use crate::error::MarkdownError;
use crate::html::{HtmlNode, LeafNode, ParentNode};
use crate::inline::text_to_html_nodes;

/// Classify `block` and build its HTML node.
pub fn block_to_html_node(block: &str) -> Result<ParentNode, MarkdownError> {
    let block_type = block_to_block_type(block);
    tracing::debug!(block_type = block_type.as_str(), "building block");

    match block_type {
        BlockType::Heading => heading_to_html_node(block),
        BlockType::Code => code_to_html_node(block),
        BlockType::Quote => quote_to_html_node(block),
        BlockType::UnorderedList => unordered_list_to_html_node(block),
        BlockType::OrderedList => ordered_list_to_html_node(block),
        BlockType::Paragraph => paragraph_to_html_node(block),
    }
}

pub fn heading_to_html_node(block: &str) -> Result<ParentNode, MarkdownError> {
    let level = heading_level(block);
    if !(1..=6).contains(&level) {
        return Err(MarkdownError::syntax(format!(
            "heading must start with 1 to 6 '#' characters: {block}"
        )));
    }

    let text = block.trim_start_matches('#').trim();
    Ok(ParentNode::new(format!("h{level}"), text_to_html_nodes(text)?))
}

pub fn code_to_html_node(block: &str) -> Result<ParentNode, MarkdownError> {
    if !(block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE)) {
        return Err(MarkdownError::syntax(format!(
            "code block must start and end with '{CODE_FENCE}': {}",
            block.trim()
        )));
    }

    // "```" and "````" carry both fences in overlapping characters.
    let fence = CODE_FENCE.len();
    let content = if block.len() >= 2 * fence {
        block[fence..block.len() - fence].trim()
    } else {
        ""
    };

    Ok(ParentNode::new("pre", vec![LeafNode::new("code", content).into()]))
}

pub fn quote_to_html_node(block: &str) -> Result<ParentNode, MarkdownError> {
    let mut lines = Vec::new();
    for line in block.split('\n') {
        let Some(rest) = line.strip_prefix('>') else {
            return Err(MarkdownError::syntax(format!(
                "every quote line must begin with '>': {}",
                line.trim()
            )));
        };
        lines.push(rest.trim());
    }

    Ok(ParentNode::new("blockquote", text_to_html_nodes(&lines.join("\n"))?))
}

pub fn unordered_list_to_html_node(block: &str) -> Result<ParentNode, MarkdownError> {
    let items = block
        .split('\n')
        .map(|line| {
            let item = line.strip_prefix(UNORDERED_PREFIX).ok_or_else(|| {
                MarkdownError::syntax(format!(
                    "every unordered list line must begin with '{UNORDERED_PREFIX}': {}",
                    line.trim()
                ))
            })?;
            list_item(item)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParentNode::new("ul", items))
}

pub fn ordered_list_to_html_node(block: &str) -> Result<ParentNode, MarkdownError> {
    let items = block
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            let prefix = ordered_prefix(i);
            let item = line.strip_prefix(prefix.as_str()).ok_or_else(|| {
                MarkdownError::syntax(format!(
                    "ordered list line {} must begin with '{prefix}': {}",
                    i + 1,
                    line.trim()
                ))
            })?;
            list_item(item)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParentNode::new("ol", items))
}

pub fn paragraph_to_html_node(block: &str) -> Result<ParentNode, MarkdownError> {
    let text = block.replace('\n', " ");
    Ok(ParentNode::new("p", text_to_html_nodes(text.trim())?))
}

fn list_item(text: &str) -> Result<HtmlNode, MarkdownError> {
    Ok(ParentNode::new("li", text_to_html_nodes(text.trim())?).into())
}
