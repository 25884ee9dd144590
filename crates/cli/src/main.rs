use std::io;

use clap::Parser;
use tally_cli::bench::run_bench;
use tally_cli::demo::run_demo;
use tally_cli::{Cli, Command, Console};
use tally_ledger::Ledger;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tally_observability::init_with(&cli.observability());

    match cli.selected_command() {
        Command::Interactive => {
            let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
            let balance = match cli.initial_balance {
                Some(balance) => balance,
                None => match console.read_initial_balance()? {
                    Some(balance) => balance,
                    None => return Ok(()),
                },
            };
            tracing::info!("starting interactive session with balance {balance}");

            let mut ledger = Ledger::new(balance).with_undo_capacity(cli.undo_capacity);
            console.run(&mut ledger)?;
        }
        Command::Demo => {
            run_demo(&mut io::stdout().lock(), cli.undo_capacity)?;
        }
        Command::Bench { sizes, runs } => {
            run_bench(&mut io::stdout().lock(), &sizes, runs, cli.undo_capacity)?;
        }
    }

    Ok(())
}
