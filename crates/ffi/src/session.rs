//! Safe state behind an FFI handle.

use std::ffi::{CStr, CString};

use rust_decimal::Decimal;
use tally_ledger::{Ledger, LedgerError, SortKey, TransactionId};

use crate::dto::TransactionDto;
use crate::status::tally_status_t;

/// One ledger plus the strings last handed to the foreign caller.
#[derive(Debug)]
pub struct Session {
    ledger: Ledger,
    last_message: CString,
    search_result: CString,
}

impl Session {
    pub fn new(initial_balance: Decimal) -> Self {
        Self {
            ledger: Ledger::new(initial_balance),
            last_message: c_string("Bank ledger created successfully."),
            search_result: CString::default(),
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn last_message(&self) -> &CStr {
        &self.last_message
    }

    pub fn search_result(&self) -> &CStr {
        &self.search_result
    }

    /// Record an outcome message for `tally_last_message`.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.last_message = c_string(message);
    }

    pub fn deposit(&mut self, amount: f64, description: &str) -> tally_status_t {
        let amount = match to_decimal(amount) {
            Ok(amount) => amount,
            Err(reason) => return self.reject("Deposit failed", &reason),
        };
        match self.ledger.deposit(amount, description) {
            Ok(receipt) => self.succeed(receipt.to_string()),
            Err(err) => self.fail("Deposit failed", &err),
        }
    }

    pub fn withdraw(&mut self, amount: f64, description: &str) -> tally_status_t {
        let amount = match to_decimal(amount) {
            Ok(amount) => amount,
            Err(reason) => return self.reject("Withdrawal failed", &reason),
        };
        match self.ledger.withdraw(amount, description) {
            Ok(receipt) => self.succeed(receipt.to_string()),
            Err(err) => self.fail("Withdrawal failed", &err),
        }
    }

    pub fn undo(&mut self) -> tally_status_t {
        match self.ledger.undo() {
            Ok(receipt) => self.succeed(receipt.to_string()),
            Err(err) => self.fail("Undo failed", &err),
        }
    }

    pub fn sort(&mut self, key: SortKey) -> tally_status_t {
        self.ledger.sort_by(key);
        let by = match key {
            SortKey::Timestamp => "date",
            SortKey::Amount => "amount",
        };
        self.succeed(format!("Transactions sorted by {by} (merge sort)."))
    }

    /// Look up `id`; on a hit the search buffer holds the record as JSON,
    /// on a miss it is empty.
    pub fn search(&mut self, id: u64) -> tally_status_t {
        let found = self
            .ledger
            .find_by_id(TransactionId::new(id))
            .map(TransactionDto::from);

        match found {
            Ok(dto) => match serde_json::to_string(&dto) {
                Ok(json) => {
                    self.search_result = c_string(json);
                    self.succeed("Transaction found successfully (binary search).".to_string())
                }
                Err(err) => {
                    tracing::error!("failed to serialize transaction {id}: {err}");
                    self.search_result = CString::default();
                    self.set_message(format!("Error: could not encode transaction {id}."));
                    tally_status_t::TALLY_ERR_INVALID_ARGUMENT
                }
            },
            Err(err) => {
                self.search_result = CString::default();
                self.fail("Search failed", &err)
            }
        }
    }

    fn succeed(&mut self, message: String) -> tally_status_t {
        self.set_message(message);
        tally_status_t::TALLY_OK
    }

    fn fail(&mut self, context: &str, err: &LedgerError) -> tally_status_t {
        self.set_message(format!("{context}: {err}."));
        tally_status_t::from(err)
    }

    /// An amount that never reached the ledger.
    fn reject(&mut self, context: &str, reason: &str) -> tally_status_t {
        tracing::debug!("{context}: {reason}");
        self.set_message(format!("{context}: {reason}."));
        tally_status_t::TALLY_ERR_INVALID_AMOUNT
    }
}

fn to_decimal(amount: f64) -> Result<Decimal, String> {
    if !amount.is_finite() {
        return Err(format!("amount must be a finite number (got {amount})"));
    }
    Decimal::try_from(amount).map_err(|_| format!("amount {amount:e} is out of range"))
}

/// Build a C string, dropping interior NULs.
fn c_string(text: impl Into<String>) -> CString {
    let mut text = text.into();
    text.retain(|c| c != '\0');
    CString::new(text).unwrap_or_default()
}
