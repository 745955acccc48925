//! Whole document conversion tests (markdown → HTML string)

use insta::assert_snapshot;
use quire_markdown::{
    extract_document_title, markdown_to_html_node, render_markdown_document, MarkdownError,
};

const KITCHENSINK: &str = "# Kitchen Sink

This is **bold**, _italic_ and `code`.

## Links

See [the docs](https://example.com) and ![logo](/logo.png).

> quoted line
> second line

- one
- two _three_

1. first
2. second

```
fn main() {}
```
";

#[test]
fn test_kitchensink() {
    let html = render_markdown_document(KITCHENSINK).unwrap();
    assert_snapshot!(html, @r#"
    <div><h1>Kitchen Sink</h1><p>This is <b>bold</b>, <i>italic</i> and <code>code</code>.</p><h2>Links</h2><p>See <a href="https://example.com">the docs</a> and <img src="/logo.png" alt="logo"></img>.</p><blockquote>quoted line
    second line</blockquote><ul><li>one</li><li>two <i>three</i></li></ul><ol><li>first</li><li>second</li></ol><pre><code>fn main() {}</code></pre></div>
    "#);
}

#[test]
fn test_kitchensink_title() {
    assert_eq!(extract_document_title(KITCHENSINK).unwrap(), "Kitchen Sink");
}

#[test]
fn test_one_child_per_block() {
    let node = markdown_to_html_node(KITCHENSINK).unwrap();
    let tags: Vec<_> = node
        .children
        .iter()
        .map(|child| child.tag().unwrap_or_default())
        .collect();
    assert_eq!(
        tags,
        vec!["h1", "p", "h2", "p", "blockquote", "ul", "ol", "pre"]
    );
}

#[test]
fn test_code_block_content_is_raw() {
    let md = "```\nlet x = **not bold** and _not italic_;\n```";
    assert_eq!(
        render_markdown_document(md).unwrap(),
        "<div><pre><code>let x = **not bold** and _not italic_;</code></pre></div>"
    );
}

#[test]
fn test_gapped_ordered_list_is_a_paragraph() {
    let md = "1. first\n3. third";
    assert_eq!(
        render_markdown_document(md).unwrap(),
        "<div><p>1. first 3. third</p></div>"
    );
}

#[test]
fn test_mixed_quote_is_a_paragraph() {
    let md = "> quoted\nnot quoted";
    assert_eq!(
        render_markdown_document(md).unwrap(),
        "<div><p>> quoted not quoted</p></div>"
    );
}

#[test]
fn test_heading_needs_a_space() {
    assert_eq!(
        render_markdown_document("#nospace").unwrap(),
        "<div><p>#nospace</p></div>"
    );
}

#[test]
fn test_extra_blank_lines_are_ignored() {
    let md = "\n\n\nfirst\n\n\n\n\nsecond\n\n";
    assert_eq!(
        render_markdown_document(md).unwrap(),
        "<div><p>first</p><p>second</p></div>"
    );
}

#[test]
fn test_unclosed_bold_fails_the_document() {
    let md = "# Fine\n\nThis is **broken";
    assert!(matches!(
        render_markdown_document(md),
        Err(MarkdownError::Syntax(_))
    ));
}

#[test]
fn test_empty_document() {
    assert!(matches!(
        render_markdown_document("\n\n"),
        Err(MarkdownError::Structural(_))
    ));
}
