//! Time handling for the trend pipeline
//!
//! The transport layer hands the core a timestamp with every reading; the
//! core never reads a clock of its own. Timestamps are seconds because that
//! is what the sensor reports, while the regression operates on whole
//! minutes.

/// Timestamp in seconds, as delivered by the sensor transport
///
/// Signed 64-bit to match the retained-state layout (8-byte signed
/// timestamp per history slot).
pub type Timestamp = i64;

/// Seconds per minute.
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Convert a timestamp to whole minutes.
///
/// Integer truncation is deliberate: the regression treats time as a
/// fixed-point grid of whole minutes, not fractional minutes. Two readings
/// inside the same minute land on the same x value and contribute no time
/// variance.
pub fn whole_minutes(timestamp_s: Timestamp) -> i64 {
    timestamp_s / SECONDS_PER_MINUTE
}
