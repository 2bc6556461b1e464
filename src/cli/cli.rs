use clap::Parser;

use crate::application::data::LogLevel;

/// Prints the planned directory layout of the Web3 voting system.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Verbosity of diagnostics written to stderr
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_without_arguments() {
        let cli = Cli::try_parse_from(["project-structure"]).unwrap();
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn accepts_log_level() {
        let cli = Cli::try_parse_from(["project-structure", "-l", "debug"]).unwrap();
        assert_eq!(cli.log_level, LogLevel::Debug);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["project-structure", "extra"]).is_err());
    }
}
