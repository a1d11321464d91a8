//! Error types for transport-boundary contract violations
//!
//! The pipeline itself has no failure paths: numeric degeneracy (empty
//! qualifying history, zero time variance) and out-of-range extrapolation
//! are recoverable edge cases handled inline, not errors. What *is* an
//! error is a collaborator handing the core input that breaks its contract
//! — a negative glucose value or a timestamp that runs backwards. Those are
//! reported before any state is touched rather than silently miscomputed.
//!
//! Errors are small `Copy` values with `&'static` context only, so they can
//! cross the no_std boundary and be stored or queued without allocation.

use thiserror_no_std::Error;

use crate::time::Timestamp;

/// Result type for monitor operations
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Contract violations at the reading-arrival boundary
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorError {
    /// The transport delivered a negative glucose value
    #[error("glucose {value} mg/dL is negative; sensor contract requires >= 0")]
    NegativeGlucose {
        /// The offending value as delivered
        value: i32,
    },

    /// The transport delivered a timestamp older than the newest reading
    #[error("timestamp {current}s regresses behind {previous}s")]
    TimestampRegression {
        /// Timestamp of the newest stored reading
        previous: Timestamp,
        /// The offending timestamp as delivered
        current: Timestamp,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for MonitorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NegativeGlucose { value } => {
                defmt::write!(fmt, "negative glucose {}", value)
            }
            Self::TimestampRegression { previous, current } => {
                defmt::write!(fmt, "timestamp {} behind {}", current, previous)
            }
        }
    }
}
