//! Rendering tests for hand built node trees.

use insta::assert_snapshot;
use quire_markdown::html::{HtmlNode, LeafNode, ParentNode};
use quire_markdown::MarkdownError;

fn nested_list() -> ParentNode {
    ParentNode::new(
        "div",
        vec![
            ParentNode::new("h2", vec![LeafNode::text("Shopping").into()]).into(),
            ParentNode::new(
                "ul",
                vec![
                    ParentNode::new("li", vec![LeafNode::text("milk").into()]).into(),
                    ParentNode::new(
                        "li",
                        vec![
                            LeafNode::new("b", "fresh").into(),
                            LeafNode::text(" bread").into(),
                        ],
                    )
                    .into(),
                ],
            )
            .with_attribute("class", "items")
            .into(),
        ],
    )
}

#[test]
fn test_nested_tree() {
    let html = nested_list().render().unwrap();
    assert_snapshot!(html, @r#"<div><h2>Shopping</h2><ul class="items"><li>milk</li><li><b>fresh</b> bread</li></ul></div>"#);
}

#[test]
fn test_leaf_attributes_keep_insertion_order() {
    let link = LeafNode::new("a", "Click")
        .with_attribute("href", "https://example.com")
        .with_attribute("target", "_blank");
    assert_eq!(
        link.render(),
        r#"<a href="https://example.com" target="_blank">Click</a>"#
    );
}

#[test]
fn test_reinserted_attribute_keeps_its_position() {
    let link = LeafNode::new("a", "x")
        .with_attribute("href", "/old")
        .with_attribute("title", "t")
        .with_attribute("href", "/new");
    assert_eq!(link.render(), r#"<a href="/new" title="t">x</a>"#);
}

#[test]
fn test_empty_leaf_value_renders_empty_element() {
    let image = LeafNode::new("img", "")
        .with_attribute("src", "cat.png")
        .with_attribute("alt", "a cat");
    assert_eq!(image.render(), r#"<img src="cat.png" alt="a cat"></img>"#);
}

#[test]
fn test_text_leaf_is_not_escaped() {
    assert_eq!(LeafNode::text("1 < 2 & 3").render(), "1 < 2 & 3");
}

#[test]
fn test_nested_empty_parent_fails_whole_tree() {
    let tree = ParentNode::new(
        "div",
        vec![
            ParentNode::new("p", vec![LeafNode::text("ok").into()]).into(),
            ParentNode::new("ul", vec![]).into(),
        ],
    );
    assert!(matches!(tree.render(), Err(MarkdownError::Structural(_))));
}

#[test]
fn test_untagged_parent_fails() {
    let node = HtmlNode::Parent(ParentNode {
        tag: None,
        children: vec![LeafNode::text("orphan").into()],
        attributes: Default::default(),
    });
    assert!(matches!(node.render(), Err(MarkdownError::Structural(_))));
}
