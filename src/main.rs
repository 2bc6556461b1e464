use std::io;

use clap::Parser as _;
use tracing::debug;

use crate::{application::Application, cli::Cli};

mod application;
mod cli;
mod layout;
mod printer;

#[snafu::report]
fn main() -> Result<(), application::ApplicationError> {
    let cli_args = Cli::parse();
    cli_args.log_level.init_tracing();
    debug!("Parsed CLI arguments: {cli_args:?}");

    let stdout = io::stdout();
    Application::run(stdout.lock())
}
