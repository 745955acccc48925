//! Span splitting passes.
//!
//! Every pass takes the node list produced by the previous one and only
//! re-splits nodes that are still [`TextType::Normal`]. Styled nodes are
//! passed through untouched, which is what keeps a `_` inside a link text or
//! a `**` inside inline code from being reinterpreted.

use super::text_node::{TextNode, TextType};
use crate::error::MarkdownError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static IMAGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("valid regex for markdown images")
});

static LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("valid regex for markdown links"));

/// A `[label](url)` occurrence found in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Reference {
    span: Range<usize>,
    label: String,
    url: String,
}

fn find_images(text: &str) -> Vec<Reference> {
    IMAGE_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            Some(Reference {
                span: caps.get(0)?.range(),
                label: caps.get(1)?.as_str().to_string(),
                url: caps.get(2)?.as_str().to_string(),
            })
        })
        .collect()
}

/// Links are `[label](url)` whose opening bracket is not directly preceded
/// by `!`. The regex crate has no lookbehind, so a candidate preceded by `!`
/// is rejected and the search resumes one byte past its opening bracket.
fn find_links(text: &str) -> Vec<Reference> {
    let mut found = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(caps) = LINK_REGEX.captures_at(text, pos) else {
            break;
        };
        let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            break;
        };

        if text[..whole.start()].ends_with('!') {
            pos = whole.start() + 1;
            continue;
        }

        found.push(Reference {
            span: whole.range(),
            label: label.as_str().to_string(),
            url: url.as_str().to_string(),
        });
        pos = whole.end();
    }

    found
}

/// Extract `(alt, url)` pairs for every `![alt](url)` in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    find_images(text)
        .into_iter()
        .map(|r| (r.label, r.url))
        .collect()
}

/// Extract `(text, url)` pairs for every `[text](url)` in `text` that is not an image.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    find_links(text)
        .into_iter()
        .map(|r| (r.label, r.url))
        .collect()
}

fn split_nodes_on<F, M>(old_nodes: Vec<TextNode>, find: F, make: M) -> Vec<TextNode>
where
    F: Fn(&str) -> Vec<Reference>,
    M: Fn(String, String) -> TextNode,
{
    let mut new_nodes = Vec::with_capacity(old_nodes.len());

    for old_node in old_nodes {
        if !old_node.is_normal() {
            new_nodes.push(old_node);
            continue;
        }

        let references = find(&old_node.text);
        if references.is_empty() {
            new_nodes.push(old_node);
            continue;
        }

        let text = old_node.text.as_str();
        let mut cursor = 0;
        for reference in references {
            let before = &text[cursor..reference.span.start];
            if !before.is_empty() {
                new_nodes.push(TextNode::normal(before));
            }
            new_nodes.push(make(reference.label, reference.url));
            cursor = reference.span.end;
        }

        let rest = &text[cursor..];
        if !rest.is_empty() {
            new_nodes.push(TextNode::normal(rest));
        }
    }

    new_nodes
}

/// Split normal nodes around `![alt](url)` occurrences.
pub fn split_nodes_image(old_nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_nodes_on(old_nodes, find_images, |alt, url| TextNode::image(alt, url))
}

/// Split normal nodes around `[text](url)` occurrences.
pub fn split_nodes_link(old_nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_nodes_on(old_nodes, find_links, |text, url| TextNode::link(text, url))
}

/// Split normal nodes on `delimiter`, turning every odd part into `text_type`.
///
/// Empty parts are dropped. An unbalanced delimiter (an even number of parts)
/// is a syntax error.
pub fn split_nodes_delimiter(
    old_nodes: Vec<TextNode>,
    delimiter: &str,
    text_type: TextType,
) -> Result<Vec<TextNode>, MarkdownError> {
    let mut new_nodes = Vec::with_capacity(old_nodes.len());

    for old_node in old_nodes {
        if !old_node.is_normal() {
            new_nodes.push(old_node);
            continue;
        }

        let parts: Vec<&str> = old_node.text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(MarkdownError::syntax(format!(
                "closing delimiter '{delimiter}' not found in '{}'",
                old_node.text
            )));
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_type = if i % 2 == 0 {
                TextType::Normal
            } else {
                text_type
            };
            new_nodes.push(TextNode::new(part, part_type));
        }
    }

    Ok(new_nodes)
}
