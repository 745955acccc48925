//! Inline tokenizer
//!
//! Turns a run of inline markdown into a flat list of [`TextNode`]s.
//!
//! # Pass Order
//!
//! The passes run in a fixed order and each one only refines spans that are
//! still plain text:
//!
//! 1. images     `![alt](url)`
//! 2. links      `[text](url)` (not preceded by `!`)
//! 3. code       `` `code` ``
//! 4. bold       `**bold**`
//! 5. italic     `_italic_`
//!
//! The order is part of the observable behavior. `` `_x_` `` stays code
//! because the italic pass never looks inside a code span, and
//! `**[a](b)**` is an error: the link is cut out first, leaving two lone `**`
//! fragments that the bold pass sees as unclosed.
//!
//! There is no nesting (bold inside italic) and no escaping of delimiters.

mod split;
mod text_node;

pub use split::{
    extract_markdown_images, extract_markdown_links, split_nodes_delimiter, split_nodes_image,
    split_nodes_link,
};
pub use text_node::{TextNode, TextType};

use crate::error::MarkdownError;
use crate::html::HtmlNode;

/// Tokenize inline markdown into text nodes.
pub fn text_to_text_nodes(text: &str) -> Result<Vec<TextNode>, MarkdownError> {
    let nodes = vec![TextNode::normal(text)];
    let nodes = split_nodes_image(nodes);
    let nodes = split_nodes_link(nodes);
    let nodes = split_nodes_delimiter(nodes, "`", TextType::Code)?;
    let nodes = split_nodes_delimiter(nodes, "**", TextType::Bold)?;
    split_nodes_delimiter(nodes, "_", TextType::Italic)
}

/// Tokenize inline markdown and convert every span to its HTML leaf.
pub fn text_to_html_nodes(text: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    Ok(text_to_text_nodes(text)?
        .iter()
        .map(|node| HtmlNode::Leaf(node.to_html_node()))
        .collect())
}
