//! In-memory description of a project directory layout.
//!
//! A layout is a tree of directories. A directory either maps names to
//! further directories, or lists plain entries that are never nested.

mod layout_node;
mod project_layout;

pub use layout_node::LayoutNode;
pub use project_layout::{LayoutError, ProjectLayout};
