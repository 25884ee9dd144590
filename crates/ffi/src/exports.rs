#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::ffi::{CStr, c_char};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tally_ledger::SortKey;

use crate::session::Session;
use crate::status::tally_status_t;

/// Install the JSON stderr logger (honours `RUST_LOG`). Idempotent.
#[unsafe(no_mangle)]
pub extern "C" fn tally_init_logging() {
    tally_observability::init();
}

/// Create a ledger. Returns null when `initial_balance` is NaN or infinite.
#[unsafe(no_mangle)]
pub extern "C" fn tally_ledger_new(initial_balance: f64) -> *mut Session {
    match Decimal::try_from(initial_balance) {
        Ok(balance) => Box::into_raw(Box::new(Session::new(balance))),
        Err(_) => {
            tracing::warn!("rejected initial balance {initial_balance}");
            std::ptr::null_mut()
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn tally_ledger_free(ledger: *mut Session) {
    if !ledger.is_null() {
        unsafe {
            drop(Box::from_raw(ledger));
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn tally_deposit(
    ledger: *mut Session,
    amount: f64,
    description: *const c_char,
) -> tally_status_t {
    with_description(ledger, description, "deposit", |s, d| s.deposit(amount, d))
}

#[unsafe(no_mangle)]
pub extern "C" fn tally_withdraw(
    ledger: *mut Session,
    amount: f64,
    description: *const c_char,
) -> tally_status_t {
    with_description(ledger, description, "withdrawal", |s, d| {
        s.withdraw(amount, d)
    })
}

#[unsafe(no_mangle)]
pub extern "C" fn tally_undo(ledger: *mut Session) -> tally_status_t {
    match session_mut(ledger) {
        Some(s) => s.undo(),
        None => tally_status_t::TALLY_ERR_INVALID_ARGUMENT,
    }
}

/// Current balance, or 0.0 for a null handle.
#[unsafe(no_mangle)]
pub extern "C" fn tally_balance(ledger: *const Session) -> f64 {
    session_ref(ledger)
        .and_then(|s| s.ledger().balance().to_f64())
        .unwrap_or(0.0)
}

#[unsafe(no_mangle)]
pub extern "C" fn tally_can_undo(ledger: *const Session) -> bool {
    session_ref(ledger).is_some_and(|s| s.ledger().can_undo())
}

#[unsafe(no_mangle)]
pub extern "C" fn tally_transaction_count(ledger: *const Session) -> usize {
    session_ref(ledger).map_or(0, |s| s.ledger().transaction_count())
}

#[unsafe(no_mangle)]
pub extern "C" fn tally_sort_by_date(ledger: *mut Session) -> tally_status_t {
    match session_mut(ledger) {
        Some(s) => s.sort(SortKey::Timestamp),
        None => tally_status_t::TALLY_ERR_INVALID_ARGUMENT,
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn tally_sort_by_amount(ledger: *mut Session) -> tally_status_t {
    match session_mut(ledger) {
        Some(s) => s.sort(SortKey::Amount),
        None => tally_status_t::TALLY_ERR_INVALID_ARGUMENT,
    }
}

/// JSON of the record with `id`, or an empty string when absent.
///
/// Returns null only for a null handle.
#[unsafe(no_mangle)]
pub extern "C" fn tally_search_by_id(ledger: *mut Session, id: u64) -> *const c_char {
    match session_mut(ledger) {
        Some(s) => {
            s.search(id);
            s.search_result().as_ptr()
        }
        None => std::ptr::null(),
    }
}

/// Message describing the outcome of the last call on this handle.
///
/// Returns null only for a null handle.
#[unsafe(no_mangle)]
pub extern "C" fn tally_last_message(ledger: *const Session) -> *const c_char {
    session_ref(ledger).map_or(std::ptr::null(), |s| s.last_message().as_ptr())
}

fn session_ref<'a>(ptr: *const Session) -> Option<&'a Session> {
    if ptr.is_null() {
        return None;
    }
    unsafe { Some(&*ptr) }
}

fn session_mut<'a>(ptr: *mut Session) -> Option<&'a mut Session> {
    if ptr.is_null() {
        return None;
    }
    unsafe { Some(&mut *ptr) }
}

fn cstr_to_str<'a>(ptr: *const c_char) -> Result<&'a str, &'static str> {
    if ptr.is_null() {
        return Err("null pointer");
    }
    unsafe { CStr::from_ptr(ptr).to_str().map_err(|_| "invalid utf-8") }
}

fn with_description(
    ledger: *mut Session,
    description: *const c_char,
    what: &str,
    op: impl FnOnce(&mut Session, &str) -> tally_status_t,
) -> tally_status_t {
    let Some(session) = session_mut(ledger) else {
        return tally_status_t::TALLY_ERR_INVALID_ARGUMENT;
    };
    match cstr_to_str(description) {
        Ok(d) => op(session, d),
        Err(reason) => {
            session.set_message(format!("Error: invalid {what} description ({reason})."));
            tally_status_t::TALLY_ERR_INVALID_ARGUMENT
        }
    }
}
