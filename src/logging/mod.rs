//! Logging and observability
//!
//! Library code emits `tracing` events with structured fields. Applications
//! embedding the client may install the subscriber provided here:
//! - console output
//! - JSON file output with daily or hourly rotation
//! - `RUST_LOG` filtering
//!
//! # Example
//!
//! ```no_run
//! use epd_gateway::logging::init_logging;
//! use epd_gateway::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a gateway transaction
///
/// # Example
///
/// ```no_run
/// use epd_gateway::log_transaction_start;
///
/// log_transaction_start!("ITI-67", "DocumentReference");
/// ```
#[macro_export]
macro_rules! log_transaction_start {
    ($transaction:expr, $endpoint:expr) => {
        tracing::info!(
            transaction = $transaction,
            endpoint = %$endpoint,
            "Starting transaction"
        );
    };
}

/// Log the completion of a gateway transaction
///
/// # Example
///
/// ```no_run
/// use epd_gateway::log_transaction_complete;
/// use std::time::Instant;
///
/// let started = Instant::now();
/// log_transaction_complete!("ITI-67", 3, started.elapsed());
/// ```
#[macro_export]
macro_rules! log_transaction_complete {
    ($transaction:expr, $count:expr, $duration:expr) => {
        tracing::info!(
            transaction = $transaction,
            count = $count,
            duration_ms = $duration.as_millis() as u64,
            "Transaction completed"
        );
    };
}
