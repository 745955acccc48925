//! Inline tokenizer tests through the public API

use quire_markdown::inline::{
    extract_markdown_images, extract_markdown_links, text_to_html_nodes, text_to_text_nodes,
};
use quire_markdown::{HtmlNode, MarkdownError, TextNode, TextType};

fn render_inline(text: &str) -> String {
    text_to_html_nodes(text)
        .unwrap()
        .iter()
        .map(|node| node.render().unwrap())
        .collect()
}

#[test]
fn test_plain_text_is_one_node() {
    assert_eq!(
        text_to_text_nodes("just text").unwrap(),
        vec![TextNode::normal("just text")]
    );
}

#[test]
fn test_code_span_hides_other_delimiters() {
    assert_eq!(render_inline("`_x_` and **y**"), "<code>_x_</code> and <b>y</b>");
}

#[test]
fn test_image_and_link_side_by_side() {
    assert_eq!(
        render_inline("![a](1.png)[b](/2)"),
        r#"<img src="1.png" alt="a"></img><a href="/2">b</a>"#
    );
}

#[test]
fn test_link_extraction_skips_images() {
    let text = "![img](a.png) and [link](b.html)";
    assert_eq!(
        extract_markdown_links(text),
        vec![("link".to_string(), "b.html".to_string())]
    );
    assert_eq!(
        extract_markdown_images(text),
        vec![("img".to_string(), "a.png".to_string())]
    );
}

#[test]
fn test_link_inside_bold_is_an_error() {
    assert!(matches!(
        text_to_text_nodes("**[a](b)**"),
        Err(MarkdownError::Syntax(_))
    ));
}

#[test]
fn test_unclosed_italic_names_the_delimiter() {
    let err = text_to_text_nodes("an _open span").unwrap_err();
    assert!(err.to_string().contains("'_'"));
}

#[test]
fn test_leaf_kinds() {
    let nodes = text_to_html_nodes("**b** _i_ `c`").unwrap();
    let tags: Vec<_> = nodes.iter().map(HtmlNode::tag).collect();
    assert_eq!(
        tags,
        vec![Some("b"), None, Some("i"), None, Some("code")]
    );
}

#[test]
fn test_text_types() {
    let nodes = text_to_text_nodes("[x](y)").unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].text_type, TextType::Link);
    assert_eq!(nodes[0].url.as_deref(), Some("y"));
}
