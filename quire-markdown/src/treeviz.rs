//! Treeviz formatter for HTML node trees
//!
//! A visual, line based dump of an [`HtmlNode`] tree, meant for inspecting what
//! the block builders and the inline tokenizer produced.
//!
//! Each node is one line:
//! <prefix><connector> <icon> <label>
//!
//! where the label is the tag (plus attributes) for parents and the value for
//! leaves, truncated to 30 characters.
//!
//! Example:
//!
//! └─ ⧉ div
//!   ├─ § h1
//!   │ └─ ◦ Title
//!   └─ ¶ p
//!     ├─ ◦ Some
//!     └─ 𝐁 bold
//!
//! Icons
//!     Blocks:
//!         div: ⧉
//!         h1..h6: §
//!         p: ¶
//!         ul / ol: ☰
//!         li: •
//!         pre: 𝒱
//!         blockquote: "
//!     Inlines:
//!         Text (no tag): ◦
//!         b: 𝐁
//!         i: 𝐼
//!         code: ƒ
//!         a: ⊕
//!         img: ▣
//!     Anything else: ○

use crate::html::HtmlNode;

const MAX_LABEL_CHARS: usize = 30;

/// Get the Unicode icon for an HTML tag (`None` for untagged text).
pub fn get_icon(tag: Option<&str>) -> &'static str {
    match tag {
        None => "◦",
        Some("div") => "⧉",
        Some("h1" | "h2" | "h3" | "h4" | "h5" | "h6") => "§",
        Some("p") => "¶",
        Some("ul" | "ol") => "☰",
        Some("li") => "•",
        Some("pre") => "𝒱",
        Some("blockquote") => "\"",
        Some("b") => "𝐁",
        Some("i") => "𝐼",
        Some("code") => "ƒ",
        Some("a") => "⊕",
        Some("img") => "▣",
        Some(_) => "○",
    }
}

fn truncate(label: &str) -> String {
    let single_line = label.replace('\n', "↵");
    if single_line.chars().count() > MAX_LABEL_CHARS {
        let head: String = single_line.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{head}…")
    } else {
        single_line
    }
}

fn display_label(node: &HtmlNode) -> String {
    let label = match node {
        HtmlNode::Leaf(leaf) => match (&leaf.tag, leaf.value.is_empty()) {
            (Some(tag), true) => format!("{tag}{}", leaf.attributes.to_html()),
            _ => leaf.value.clone(),
        },
        HtmlNode::Parent(parent) => format!(
            "{}{}",
            parent.tag.as_deref().unwrap_or("?"),
            parent.attributes.to_html()
        ),
    };
    truncate(&label)
}

fn format_node(node: &HtmlNode, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{prefix}{connector} {} {}\n",
        get_icon(node.tag()),
        display_label(node)
    ));

    let child_prefix = format!("{prefix}{}", if is_last { "  " } else { "│ " });
    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        format_node(child, &child_prefix, i == children.len() - 1, output);
    }
}

/// Render a node tree as a treeviz string.
pub fn to_treeviz_str(node: &HtmlNode) -> String {
    let mut output = String::new();
    format_node(node, "", true, &mut output);
    output
}
