//! Command-line and environment configuration.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tally_ledger::DEFAULT_UNDO_CAPACITY;
use tally_observability::{LogFormat, ObservabilityConfig};

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Single-account ledger with undo")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Opening balance (prompted for interactively when unset)
    #[arg(long, env = "TALLY_INITIAL_BALANCE", global = true)]
    pub initial_balance: Option<Decimal>,

    /// How many recent movements can be undone
    #[arg(long, env = "TALLY_UNDO_CAPACITY", default_value_t = DEFAULT_UNDO_CAPACITY, global = true)]
    pub undo_capacity: usize,

    /// Log line format on stderr (json or pretty); RUST_LOG sets the filter
    #[arg(long, env = "TALLY_LOG_FORMAT", default_value = "pretty", global = true)]
    pub log_format: LogFormat,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Menu-driven session on stdin/stdout (default)
    Interactive,
    /// Scripted walkthrough of deposit, withdraw, undo, sort and search
    Demo,
    /// Time insertion, sorting and searching at several history sizes
    Bench {
        /// History sizes to measure
        #[arg(long, value_delimiter = ',', default_values_t = [1_000u64, 10_000, 100_000])]
        sizes: Vec<u64>,

        /// Runs averaged per size
        #[arg(long, default_value_t = 3)]
        runs: u32,
    },
}

impl Cli {
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Interactive)
    }

    /// Console sessions keep stderr quiet unless RUST_LOG asks otherwise.
    pub fn observability(&self) -> ObservabilityConfig {
        ObservabilityConfig {
            default_filter: "warn".to_string(),
            format: self.log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_interactive() {
        let cli = Cli::try_parse_from(["tally"]).unwrap();
        assert_eq!(cli.selected_command(), Command::Interactive);
        assert_eq!(cli.undo_capacity, DEFAULT_UNDO_CAPACITY);
    }

    #[test]
    fn parses_bench_sizes_and_globals() {
        let cli = Cli::try_parse_from([
            "tally",
            "bench",
            "--sizes",
            "10,20",
            "--runs",
            "1",
            "--initial-balance",
            "12.50",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(
            cli.selected_command(),
            Command::Bench {
                sizes: vec![10, 20],
                runs: 1
            }
        );
        assert_eq!(cli.initial_balance, Some(Decimal::new(1250, 2)));
        assert_eq!(cli.observability().format, LogFormat::Json);
    }
}
