//! HTML node tree tests

mod render;
