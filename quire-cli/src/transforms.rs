//! CLI-specific transforms
//!
//! This module defines the views `quire inspect` can print. Each transform is
//! a stage + format combination (e.g., "blocks-simple", "html-treeviz").
//!
//! ## Transform Pipeline
//!
//! The conversion has three stages worth looking at:
//!
//! 1. **Blocks** - Raw text → classified blocks
//!    - `blocks-simple`: one line per block, `<type>: <text>`
//!    - `blocks-json`: blocks with their types as JSON
//!
//! 2. **Inline** - Raw text → text nodes
//!    - `inline-json`: the whole input tokenized as one inline run
//!
//! 3. **HTML** - Blocks → node tree
//!    - `html-json`: the document node tree as JSON
//!    - `html-treeviz`: tree visualization with Unicode icons
//!
//! Example: `quire inspect post.md html-treeviz`

use quire_markdown::block::{block_to_block_type, markdown_to_blocks};
use quire_markdown::inline::text_to_text_nodes;
use quire_markdown::treeviz::to_treeviz_str;
use quire_markdown::{markdown_to_html_node, HtmlNode};
use serde_json::json;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "blocks-simple",
    "blocks-json",
    "inline-json",
    "html-json",
    "html-treeviz",
];

pub const DEFAULT_TRANSFORM: &str = "blocks-simple";

/// Execute a named transform on markdown source
///
/// Returns the transformed output, or an error message when the source does
/// not convert or the transform is unknown.
///
/// ```ignore
/// let output = execute_transform("# Title\n\nBody", "html-treeviz")?;
/// ```
pub fn execute_transform(source: &str, transform_name: &str) -> Result<String, String> {
    match transform_name {
        "blocks-simple" => Ok(blocks_to_simple(source)),
        "blocks-json" => to_pretty_json(&blocks_to_json(source)),
        "inline-json" => {
            let nodes = text_to_text_nodes(source).map_err(|e| format!("Transform failed: {e}"))?;
            to_pretty_json(&nodes)
        }
        "html-json" => {
            let node = markdown_to_html_node(source).map_err(|e| format!("Transform failed: {e}"))?;
            to_pretty_json(&node)
        }
        "html-treeviz" => {
            let node = markdown_to_html_node(source).map_err(|e| format!("Transform failed: {e}"))?;
            Ok(to_treeviz_str(&HtmlNode::Parent(node)))
        }
        other => Err(format!(
            "Unknown transform '{other}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}

fn to_pretty_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))
}

fn blocks_to_simple(source: &str) -> String {
    let mut output = String::new();
    for block in markdown_to_blocks(source) {
        let block_type = block_to_block_type(&block);
        output.push_str(&format!(
            "{}: {}\n",
            block_type.as_str(),
            block.replace('\n', "↵")
        ));
    }
    output
}

fn blocks_to_json(source: &str) -> serde_json::Value {
    let blocks: Vec<_> = markdown_to_blocks(source)
        .into_iter()
        .map(|block| {
            json!({
                "type": block_to_block_type(&block),
                "text": block,
            })
        })
        .collect();
    serde_json::Value::Array(blocks)
}
