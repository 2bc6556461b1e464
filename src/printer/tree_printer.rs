use std::io::Write;

use snafu::{ResultExt, Snafu};

use crate::layout::LayoutNode;

const INDENT_UNIT: &str = "  ";
const DIRECTORY_MARKER: &str = "/";

/// Writes layout trees to a sink, one line per node.
pub struct TreePrinter<W: Write> {
    out: W,
}

impl<W: Write> TreePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn print_banner(&mut self, title: &str) -> Result<(), PrintError> {
        writeln!(self.out, " {title}:").context(WriteSnafu)
    }

    /// Pre-order traversal. Mapping keys are printed with a trailing `/` and
    /// their values one level deeper; sequence entries are printed as-is at
    /// `depth`.
    pub fn print_structure(&mut self, node: &LayoutNode, depth: usize) -> Result<(), PrintError> {
        let indent = INDENT_UNIT.repeat(depth);
        match node {
            LayoutNode::Mapping { children } => {
                for (name, child) in children {
                    writeln!(self.out, "{indent} {name}{DIRECTORY_MARKER}").context(WriteSnafu)?;
                    self.print_structure(child, depth + 1)?;
                }
            }
            LayoutNode::Sequence { entries } => {
                for entry in entries {
                    writeln!(self.out, "{indent} {entry}").context(WriteSnafu)?;
                }
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), PrintError> {
        self.out.flush().context(WriteSnafu)
    }
}

#[derive(Debug, Snafu)]
pub enum PrintError {
    #[snafu(display("Failed to write the tree to the output"))]
    WriteError { source: std::io::Error },
}
