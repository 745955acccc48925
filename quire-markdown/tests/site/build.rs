//! build_site tests: static → public, content → public

use quire_markdown::publish::{build_site, PublishError, SiteSpec};
use quire_markdown::template::DEFAULT_TEMPLATE;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn scaffold(root: &Path) -> SiteSpec {
    let site = SiteSpec {
        static_dir: root.join("static"),
        public_dir: root.join("public"),
        content_dir: root.join("content"),
        template: root.join("template.html"),
        clean: true,
    };
    fs::create_dir_all(site.static_dir.join("images")).unwrap();
    fs::write(site.static_dir.join("index.css"), "body { margin: 0 }").unwrap();
    fs::write(site.static_dir.join("images").join("tolkien.png"), "png").unwrap();
    fs::create_dir_all(site.content_dir.join("blog")).unwrap();
    fs::write(
        site.content_dir.join("index.md"),
        "# Tolkien Fan Club\n\n![JRR Tolkien sitting](/images/tolkien.png)",
    )
    .unwrap();
    fs::write(
        site.content_dir.join("blog").join("glorfindel.md"),
        "# Why Glorfindel is More Impressive than Legolas\n\n> All that is gold does not glitter",
    )
    .unwrap();
    fs::write(&site.template, DEFAULT_TEMPLATE).unwrap();
    site
}

#[test]
fn test_build_site() {
    let dir = tempdir().unwrap();
    let site = scaffold(dir.path());

    let report = build_site(&site).unwrap();

    assert_eq!(report.assets_copied, 2);
    assert_eq!(report.pages.len(), 2);
    assert!(site.public_dir.join("index.css").is_file());
    assert!(site.public_dir.join("images").join("tolkien.png").is_file());

    let index = fs::read_to_string(site.public_dir.join("index.html")).unwrap();
    assert!(index.contains("<title>Tolkien Fan Club</title>"));
    assert!(index.contains(r#"<img src="/images/tolkien.png" alt="JRR Tolkien sitting"></img>"#));

    let post = fs::read_to_string(site.public_dir.join("blog").join("glorfindel.html")).unwrap();
    assert!(post.contains("<blockquote>All that is gold does not glitter</blockquote>"));
}

#[test]
fn test_clean_build_removes_stale_output() {
    let dir = tempdir().unwrap();
    let site = scaffold(dir.path());
    fs::create_dir_all(&site.public_dir).unwrap();
    fs::write(site.public_dir.join("old.html"), "stale").unwrap();

    build_site(&site).unwrap();

    assert!(!site.public_dir.join("old.html").exists());
}

#[test]
fn test_incremental_build_keeps_existing_output() {
    let dir = tempdir().unwrap();
    let mut site = scaffold(dir.path());
    site.clean = false;
    fs::create_dir_all(&site.public_dir).unwrap();
    fs::write(site.public_dir.join("old.html"), "kept").unwrap();

    build_site(&site).unwrap();

    assert_eq!(
        fs::read_to_string(site.public_dir.join("old.html")).unwrap(),
        "kept"
    );
    assert!(site.public_dir.join("index.html").is_file());
}

#[test]
fn test_missing_static_dir() {
    let dir = tempdir().unwrap();
    let site = scaffold(dir.path());
    fs::remove_dir_all(&site.static_dir).unwrap();

    assert!(matches!(
        build_site(&site),
        Err(PublishError::MissingSource(_))
    ));
}

#[test]
fn test_broken_page_fails_the_build() {
    let dir = tempdir().unwrap();
    let site = scaffold(dir.path());
    fs::write(site.content_dir.join("broken.md"), "# Broken\n\n**unclosed").unwrap();

    let err = build_site(&site).unwrap_err();
    assert!(err.to_string().contains("broken.md"));
}
