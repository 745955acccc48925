//! Property tests for the conversion pipeline

use proptest::prelude::*;
use quire_markdown::block::markdown_to_blocks;
use quire_markdown::inline::text_to_text_nodes;
use quire_markdown::render_markdown_document;

const DELIMITERS: [&str; 4] = ["", "`", "**", "_"];

fn balanced_inline() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-z ]{1,10}", 0..DELIMITERS.len()), 1..8).prop_map(|spans| {
        spans
            .into_iter()
            .map(|(run, kind)| {
                let delimiter = DELIMITERS[kind];
                format!("{delimiter}{run}{delimiter}")
            })
            .collect::<String>()
    })
}

proptest! {
    #[test]
    fn balanced_delimiters_always_tokenize(text in balanced_inline()) {
        prop_assert!(text_to_text_nodes(&text).is_ok(), "failed on {:?}", text);
    }

    #[test]
    fn plain_text_becomes_one_paragraph(text in "[a-zA-Z0-9 ]{1,60}") {
        prop_assume!(!text.trim().is_empty());
        let html = render_markdown_document(&text).unwrap();
        prop_assert_eq!(html, format!("<div><p>{}</p></div>", text.trim()));
    }

    #[test]
    fn segmentation_is_idempotent(markdown in "[a-z#>`*_ \n-]{0,80}") {
        let blocks = markdown_to_blocks(&markdown);
        prop_assert_eq!(markdown_to_blocks(&blocks.join("\n\n")), blocks.clone());
        prop_assert!(blocks.iter().all(|b| !b.is_empty() && b.trim() == b));
    }

    #[test]
    fn conversion_never_panics(markdown in "(\\PC|\n){0,120}") {
        let _ = render_markdown_document(&markdown);
    }

    #[test]
    fn blocks_render_to_a_wrapping_div(markdown in "[a-z ]{1,20}(\n\n[a-z ]{1,20}){0,4}") {
        if let Ok(html) = render_markdown_document(&markdown) {
            prop_assert!(html.starts_with("<div>"));
            prop_assert!(html.ends_with("</div>"));
        }
    }
}
