//! Whole-document conversion.

use crate::block::{block_to_html_node, markdown_to_blocks};
use crate::error::MarkdownError;
use crate::html::{HtmlNode, ParentNode};

/// Convert a markdown document into a `div` holding one node per block.
///
/// The first block that fails aborts the conversion.
pub fn markdown_to_html_node(markdown: &str) -> Result<ParentNode, MarkdownError> {
    let blocks = markdown_to_blocks(markdown);
    tracing::debug!(blocks = blocks.len(), "segmented document");

    let children = blocks
        .iter()
        .map(|block| block_to_html_node(block).map(HtmlNode::Parent))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ParentNode::new("div", children))
}

/// Render a markdown document to its `<div>...</div>` HTML string.
pub fn render_markdown_document(markdown: &str) -> Result<String, MarkdownError> {
    markdown_to_html_node(markdown)?.render()
}

/// Title of a document: its first line with any leading `#` run removed.
pub fn extract_document_title(markdown: &str) -> Result<String, MarkdownError> {
    let first_line = markdown.trim_start().lines().next().unwrap_or_default();
    let title = first_line.trim_start_matches('#').trim();
    if title.is_empty() {
        return Err(MarkdownError::EmptyTitle);
    }
    Ok(title.to_string())
}
