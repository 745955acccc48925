//! Site publishing pipeline.
//!
//! Thin file-system layer around the core conversion: copy the static assets,
//! turn markdown pages into HTML pages through a [`PageTemplate`], and write
//! the results under the public directory.
//!
//! Use [`publish`] for a single in-memory or on-disk conversion, the
//! `generate_*` helpers for page files, and [`build_site`] for the whole
//! static → public + content → public flow.

use crate::document::render_markdown_document;
use crate::error::MarkdownError;
use crate::template::PageTemplate;
use pathdiff::diff_paths;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const MARKDOWN_EXTENSION: &str = "md";
const HTML_EXTENSION: &str = "html";

/// Errors raised while publishing pages or assets
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to render page '{}': {source}", .path.display())]
    Page {
        path: PathBuf,
        #[source]
        source: MarkdownError,
    },
    #[error(transparent)]
    Markdown(#[from] MarkdownError),
    #[error("Source directory does not exist: {}", .0.display())]
    MissingSource(PathBuf),
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> PublishError + '_ {
    move |source| PublishError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Specifies how to publish a single markdown document.
///
/// ```ignore
/// let spec = PublishSpec::new(&markdown)
///     .with_template(&template)
///     .with_output_path("public/index.html");
/// ```
///
/// Without a template the bare `<div>` fragment is produced. Without an output
/// path the result is returned in memory.
#[derive(Debug)]
pub struct PublishSpec<'a> {
    pub markdown: &'a str,
    pub template: Option<&'a PageTemplate>,
    pub output: Option<PathBuf>,
}

impl<'a> PublishSpec<'a> {
    pub fn new(markdown: &'a str) -> Self {
        Self {
            markdown,
            template: None,
            output: None,
        }
    }

    pub fn with_template(mut self, template: &'a PageTemplate) -> Self {
        self.template = Some(template);
        self
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }
}

/// The output from a successful publish operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    InMemory(String),
    File(PathBuf),
}

/// Converts a document according to `spec`.
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishArtifact, PublishError> {
    let html = match spec.template {
        Some(template) => template.render_markdown(spec.markdown)?,
        None => render_markdown_document(spec.markdown)?,
    };

    match spec.output {
        Some(path) => {
            write_file(&path, &html)?;
            Ok(PublishArtifact::File(path))
        }
        None => Ok(PublishArtifact::InMemory(html)),
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), PublishError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(path, contents).map_err(io_error(path))
}

/// Load a template file.
pub fn load_template(path: &Path) -> Result<PageTemplate, PublishError> {
    fs::read_to_string(path)
        .map(PageTemplate::new)
        .map_err(io_error(path))
}

/// Replace `dest` with a copy of `src`.
///
/// `dest` is removed first if it exists. Returns the number of files copied.
pub fn copy_directory_recursive(src: &Path, dest: &Path) -> Result<usize, PublishError> {
    if !src.is_dir() {
        return Err(PublishError::MissingSource(src.to_path_buf()));
    }

    info!(src = %src.display(), dest = %dest.display(), "copying directory");
    if dest.exists() {
        debug!(dest = %dest.display(), "removing existing contents");
        fs::remove_dir_all(dest).map_err(io_error(dest))?;
    }
    fs::create_dir_all(dest).map_err(io_error(dest))?;

    copy_entries(src, dest)
}

fn copy_entries(src: &Path, dest: &Path) -> Result<usize, PublishError> {
    let mut copied = 0;

    for path in sorted_entries(src)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dest.join(name);

        if path.is_file() {
            debug!(from = %path.display(), to = %target.display(), "copying file");
            fs::copy(&path, &target).map_err(io_error(&path))?;
            copied += 1;
        } else if path.is_dir() {
            fs::create_dir_all(&target).map_err(io_error(&target))?;
            copied += copy_entries(&path, &target)?;
        } else {
            warn!(path = %path.display(), "skipping entry that is neither file nor directory");
        }
    }

    Ok(copied)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, PublishError> {
    let mut entries = fs::read_dir(dir)
        .map_err(io_error(dir))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(io_error(dir))?;
    entries.sort();
    Ok(entries)
}

/// Render the markdown file `from` through `template` into `dest`.
pub fn generate_page_with(
    from: &Path,
    template: &PageTemplate,
    dest: &Path,
) -> Result<(), PublishError> {
    info!(from = %from.display(), dest = %dest.display(), "generating page");
    let markdown = fs::read_to_string(from).map_err(io_error(from))?;
    let html = template
        .render_markdown(&markdown)
        .map_err(|source| PublishError::Page {
            path: from.to_path_buf(),
            source,
        })?;
    write_file(dest, &html)
}

/// Render the markdown file `from` through the template file at
/// `template_path` into `dest`.
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path) -> Result<(), PublishError> {
    let template = load_template(template_path)?;
    generate_page_with(from, &template, dest)
}

/// Render every `*.md` file under `content_dir` into `dest_dir`, keeping the
/// relative layout and swapping the extension for `.html`.
///
/// Returns the written paths in sorted order.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
) -> Result<Vec<PathBuf>, PublishError> {
    if !content_dir.is_dir() {
        return Err(PublishError::MissingSource(content_dir.to_path_buf()));
    }
    let template = load_template(template_path)?;

    let mut sources = Vec::new();
    collect_markdown_files(content_dir, &mut sources)?;

    let mut written = Vec::with_capacity(sources.len());
    for source in sources {
        let relative = diff_paths(&source, content_dir)
            .or_else(|| source.file_name().map(PathBuf::from))
            .unwrap_or_default();
        let dest = dest_dir.join(relative).with_extension(HTML_EXTENSION);
        generate_page_with(&source, &template, &dest)?;
        written.push(dest);
    }

    Ok(written)
}

fn collect_markdown_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), PublishError> {
    for path in sorted_entries(dir)? {
        if path.is_dir() {
            collect_markdown_files(&path, out)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some(MARKDOWN_EXTENSION) {
            out.push(path);
        }
    }
    Ok(())
}

/// Locations making up a site build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSpec {
    pub static_dir: PathBuf,
    pub public_dir: PathBuf,
    pub content_dir: PathBuf,
    pub template: PathBuf,
    /// Wipe the public directory before building. When false, static assets
    /// and pages are written over whatever is already there.
    pub clean: bool,
}

/// Summary of a finished site build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub assets_copied: usize,
    pub pages: Vec<PathBuf>,
}

/// Copy the static directory into the public directory, then generate every
/// content page into it.
pub fn build_site(site: &SiteSpec) -> Result<BuildReport, PublishError> {
    if !site.static_dir.is_dir() {
        return Err(PublishError::MissingSource(site.static_dir.clone()));
    }

    let assets_copied = if site.clean {
        copy_directory_recursive(&site.static_dir, &site.public_dir)?
    } else {
        fs::create_dir_all(&site.public_dir).map_err(io_error(&site.public_dir))?;
        copy_entries(&site.static_dir, &site.public_dir)?
    };

    let pages = generate_pages_recursive(&site.content_dir, &site.template, &site.public_dir)?;
    info!(
        assets = assets_copied,
        pages = pages.len(),
        public = %site.public_dir.display(),
        "site built"
    );

    Ok(BuildReport {
        assets_copied,
        pages,
    })
}
