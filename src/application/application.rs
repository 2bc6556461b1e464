use std::io::Write;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::layout::{LayoutError, ProjectLayout};
use crate::printer::{PrintError, TreePrinter};

pub struct Application;

impl Application {
    /// Prints the built-in project layout, banner first, to `out`.
    pub fn run(out: impl Write) -> Result<(), ApplicationError> {
        let layout = ProjectLayout::builtin().context(LayoutSnafu)?;
        debug!("Loaded layout: {:?}", layout);

        Self::print_layout(&layout, out)
    }

    pub fn print_layout(layout: &ProjectLayout, out: impl Write) -> Result<(), ApplicationError> {
        info!(
            "Printing '{}' ({} lines)",
            layout.title(),
            layout.root().line_count()
        );

        let mut printer = TreePrinter::new(out);
        printer.print_banner(layout.title()).context(PrintSnafu)?;
        printer
            .print_structure(layout.root(), 0)
            .context(PrintSnafu)?;
        printer.flush().context(PrintSnafu)?;

        info!("Finished printing layout");
        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the project layout"))]
    LayoutError { source: LayoutError },
    #[snafu(display("Critical failure encountered while printing the project layout"))]
    PrintError { source: PrintError },
}
