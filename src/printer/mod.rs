//! Indented text rendering of layout trees.

mod tree_printer;

pub use tree_printer::{PrintError, TreePrinter};
