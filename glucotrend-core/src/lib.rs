//! Trend estimation and alert encoding core for a wearable CGM companion
//!
//! Receives periodic glucose readings from the sensor transport, keeps a
//! short rolling history, estimates the rate of change, extrapolates a
//! lag-compensated glucose value, and encodes an alert decision into the
//! fixed 12-byte message consumed by the display/haptic driver.
//!
//! Key constraints:
//! - Runs on battery-powered wearable MCUs (no heap, no_std capable)
//! - One synchronous pipeline pass per reading, bounded arithmetic only
//! - Wire format must stay byte-compatible with the paired display firmware
//!
//! ```
//! use glucotrend_core::GlucoseMonitor;
//!
//! let mut monitor = GlucoseMonitor::new();
//!
//! // One invocation per sensor reading (value, seconds)
//! let decision = monitor.handle_glucose(142, 600)?;
//!
//! if decision.raise {
//!     // Wake the haptic driver
//! }
//! if monitor.message().is_ready() {
//!     // Hand the 12-byte frame to the transport
//! }
//! # Ok::<(), glucotrend_core::MonitorError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod alert;
pub mod constants;
pub mod errors;
pub mod estimator;
pub mod history;
pub mod message;
pub mod monitor;
pub mod projector;
pub mod time;

// Public API
pub use alert::{AlertDecision, AlertEngine, AlertState, AlertTier};
pub use errors::{MonitorError, MonitorResult};
pub use estimator::SlopeEstimator;
pub use history::{Reading, ReadingHistory, ReadingRing};
pub use message::{MessageKind, OutgoingMessage};
pub use monitor::{GlucoseMonitor, RetainedState};
pub use projector::{Projection, TimeToLimit, TrendProjector};

/// Crate version string, from Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
