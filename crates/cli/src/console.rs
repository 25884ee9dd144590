//! Menu-driven interactive session.

use std::io::{BufRead, Write};

use anyhow::Context;
use rust_decimal::Decimal;
use tally_ledger::{Clock, Ledger, TransactionId};

const MENU: &str = "\n1. Add Deposit\n2. Add Withdrawal\n3. View History\n4. Balance\n\
5. Undo\n6. Sort by Date\n7. Sort by Amount\n8. Search by ID\n9. Exit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Deposit,
    Withdraw,
    History,
    Balance,
    Undo,
    SortByDate,
    SortByAmount,
    Search,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => MenuChoice::Deposit,
            "2" => MenuChoice::Withdraw,
            "3" => MenuChoice::History,
            "4" => MenuChoice::Balance,
            "5" => MenuChoice::Undo,
            "6" => MenuChoice::SortByDate,
            "7" => MenuChoice::SortByAmount,
            "8" => MenuChoice::Search,
            "9" => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// Line-oriented console over any reader/writer pair.
///
/// End of input ends the session the same way choosing "Exit" does.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `text` and read one line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask for the opening balance until a number is entered.
    pub fn read_initial_balance(&mut self) -> anyhow::Result<Option<Decimal>> {
        loop {
            let Some(line) = self.prompt("Enter initial balance: $")? else {
                return Ok(None);
            };
            match line.trim().parse::<Decimal>() {
                Ok(balance) => {
                    writeln!(
                        self.output,
                        "Bank Ledger initialized with balance: ${balance:.2}"
                    )?;
                    return Ok(Some(balance));
                }
                Err(_) => writeln!(self.output, "Invalid amount!")?,
            }
        }
    }

    pub fn run<C: Clock>(&mut self, ledger: &mut Ledger<C>) -> anyhow::Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("\nEnter your choice (1-9): ")? else {
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "Invalid choice!")?;
                continue;
            };

            tracing::debug!("menu choice {choice:?}");
            let keep_going = self.handle(choice, ledger)?;
            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Returns `false` when the session should end.
    fn handle<C: Clock>(
        &mut self,
        choice: MenuChoice,
        ledger: &mut Ledger<C>,
    ) -> anyhow::Result<bool> {
        match choice {
            MenuChoice::Deposit | MenuChoice::Withdraw => {
                let Some((amount, description)) = self.read_movement()? else {
                    return Ok(false);
                };
                let Some(amount) = amount else {
                    writeln!(self.output, "Error: Invalid amount!")?;
                    return Ok(true);
                };
                let result = if choice == MenuChoice::Deposit {
                    ledger.deposit(amount, description)
                } else {
                    ledger.withdraw(amount, description)
                };
                match result {
                    Ok(receipt) => writeln!(self.output, "{receipt}")?,
                    Err(err) => writeln!(self.output, "Error: {err}")?,
                }
            }
            MenuChoice::History => write!(self.output, "\n{}", ledger.history())?,
            MenuChoice::Balance => write!(self.output, "\n{}", ledger.summary())?,
            MenuChoice::Undo => match ledger.undo() {
                Ok(receipt) => writeln!(self.output, "{receipt}")?,
                Err(err) => writeln!(self.output, "Error: {err}")?,
            },
            MenuChoice::SortByDate => {
                ledger.sort_by_date();
                writeln!(self.output, "Transactions sorted by date.")?;
                write!(self.output, "\n{}", ledger.history())?;
            }
            MenuChoice::SortByAmount => {
                ledger.sort_by_amount();
                writeln!(self.output, "Transactions sorted by amount.")?;
                write!(self.output, "\n{}", ledger.history())?;
            }
            MenuChoice::Search => {
                let Some(line) = self.prompt("Enter transaction ID: ")? else {
                    return Ok(false);
                };
                match line
                    .parse::<TransactionId>()
                    .and_then(|id| ledger.find_by_id(id))
                {
                    Ok(t) => {
                        writeln!(self.output, "\n=== Transaction Found ===")?;
                        writeln!(self.output, "{t}")?;
                        writeln!(self.output, "=========================")?;
                    }
                    Err(err) => writeln!(self.output, "Error: {err}")?,
                }
            }
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting...")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Amount (`None` when unparsable) and description. Outer `None` on end of input.
    fn read_movement(&mut self) -> anyhow::Result<Option<(Option<Decimal>, String)>> {
        let Some(amount) = self.prompt("Enter amount: $")? else {
            return Ok(None);
        };
        let Some(description) = self.prompt("Enter description: ")? else {
            return Ok(None);
        };
        Ok(Some((amount.trim().parse().ok(), description)))
    }
}
