//! Markdown conversion tests
//!
//! End-to-end checks of markdown → HTML, from whole documents down to the
//! inline tokenizer.

mod document;
mod inline;
mod properties;
