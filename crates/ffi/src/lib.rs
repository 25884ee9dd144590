//! `tally-ffi`
//!
//! **Responsibility:** C ABI over the ledger engine.
//!
//! Every exported function takes an opaque handle created by
//! `tally_ledger_new`. Each handle carries its own "last message" and search
//! buffer; there is no process-wide mutable state. Strings returned to the
//! caller stay valid until the next call on the same handle.
//!
//! Handles are not synchronized. Callers sharing one across threads must
//! serialize access themselves.

pub mod dto;
pub mod exports;
pub mod session;
pub mod status;

pub use dto::TransactionDto;
pub use session::Session;
pub use status::tally_status_t;
