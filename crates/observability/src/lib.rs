//! Tracing and logging setup shared by the binaries and the foreign-call library.

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use self::tracing::{LogFormat, ObservabilityConfig, ParseLogFormatError};

/// Initialize process-wide observability with defaults (`RUST_LOG`, JSON).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    self::tracing::init(&ObservabilityConfig::default());
}

/// Initialize process-wide observability with an explicit configuration.
pub fn init_with(config: &ObservabilityConfig) {
    self::tracing::init(config);
}
