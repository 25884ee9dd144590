use tally_ledger::LedgerError;

/// Outcome code returned by every mutating export.
#[repr(C)]
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum tally_status_t {
    TALLY_OK = 0,
    TALLY_ERR_INVALID_ARGUMENT = 1,
    TALLY_ERR_INVALID_AMOUNT = 2,
    TALLY_ERR_INSUFFICIENT_FUNDS = 3,
    TALLY_ERR_NOTHING_TO_UNDO = 4,
    TALLY_ERR_NOT_FOUND = 5,
    TALLY_ERR_BALANCE_OVERFLOW = 6,
}

impl From<&LedgerError> for tally_status_t {
    fn from(err: &LedgerError) -> Self {
        match err {
            LedgerError::InvalidAmount(_) => tally_status_t::TALLY_ERR_INVALID_AMOUNT,
            LedgerError::InsufficientFunds { .. } => tally_status_t::TALLY_ERR_INSUFFICIENT_FUNDS,
            LedgerError::BalanceOverflow { .. } => tally_status_t::TALLY_ERR_BALANCE_OVERFLOW,
            LedgerError::NothingToUndo => tally_status_t::TALLY_ERR_NOTHING_TO_UNDO,
            LedgerError::NotFound(_) => tally_status_t::TALLY_ERR_NOT_FOUND,
            LedgerError::InvalidId(_) => tally_status_t::TALLY_ERR_INVALID_ARGUMENT,
        }
    }
}
