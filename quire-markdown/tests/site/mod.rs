//! Site build tests against a temporary directory tree.

mod build;
