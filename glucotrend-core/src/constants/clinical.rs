//! Clinical Thresholds and Sensor Characteristics
//!
//! Glucose values are mg/dL throughout, matching what the paired sensor
//! reports. Threshold choices follow common CGM practice (ADA target range
//! 80–180 mg/dL) and the behavior of the paired display firmware.

// ===== HISTORY =====

/// Number of readings kept for trend estimation.
///
/// Three points cover ~15 minutes at the sensor's 5-minute cadence, enough
/// for a stable least-squares slope without smearing short excursions.
pub const HISTORY_LEN: usize = 3;

/// Minimum glucose for a reading to enter the regression (mg/dL).
///
/// Separates real measurements from the zero sentinel and electrical
/// noise. The sensor never reports physiologic values this low.
pub const QUALIFYING_GLUCOSE_MIN_MG_DL: i32 = 20;

// ===== SENSOR LAG =====

/// Interstitial sensor reporting lag (minutes).
///
/// CGM sensors measure interstitial fluid, which trails blood glucose by
/// roughly 15 minutes. The projector extrapolates over this lag to estimate
/// the present value.
pub const SENSOR_LAG_MINUTES: f32 = 15.0;

// ===== SAFETY THRESHOLDS =====

/// Hyperglycemia limit for time-to-limit projection (mg/dL).
pub const HIGH_LIMIT_MG_DL: i32 = 180;

/// Hypoglycemia limit for time-to-limit projection (mg/dL).
pub const LOW_LIMIT_MG_DL: i32 = 80;

/// Lower bound of a credible lag-compensated estimate (mg/dL).
///
/// Extrapolation below this is treated as runaway and discarded in favor
/// of the raw reading.
pub const ESTIMATE_MIN_MG_DL: i32 = 40;

/// Upper bound of a credible lag-compensated estimate (mg/dL).
pub const ESTIMATE_MAX_MG_DL: i32 = 300;

/// Longest countdown the display can show (minutes).
///
/// Projections further out carry no actionable urgency and are reported as
/// "not applicable".
pub const COUNTDOWN_MAX_MINUTES: i32 = 99;

// ===== ALERT TIERS =====

/// Mild-low band, exclusive bounds (mg/dL): alerts between these values.
pub const MILD_LOW_FLOOR_MG_DL: i32 = 65;

/// Upper exclusive bound of the mild-low band (mg/dL).
pub const MILD_LOW_CEIL_MG_DL: i32 = 80;

/// Severe-low threshold (mg/dL): estimates below this are urgent.
pub const SEVERE_LOW_MG_DL: i32 = 60;

/// Slope magnitude that forces an immediate alert (mg/dL per minute).
///
/// 3 mg/dL/min sustained is a fast excursion by CGM standards; pacing is
/// bypassed so the wearer sees it at once.
pub const RAPID_SLOPE_MG_DL_PER_MIN: f32 = 3.0;

/// Glucose delta between consecutive readings that flags volatility (mg/dL).
///
/// A jump above this between two 5-minute samples usually means compression
/// lows or sensor noise; the display appends a `?` marker.
pub const VOLATILITY_DELTA_MG_DL: i32 = 25;

// ===== PACING CEILINGS =====
//
// Each tier alerts once, then stays silent for ceiling - 1 invocations
// while the condition persists. At the 5-minute cadence the windows are
// 30 minutes (mild low), 20 minutes (severe low), and 2 hours (high).

/// Repeat ceiling for the mild-low tier.
pub const MILD_LOW_REPEAT_CEILING: u32 = 6;

/// Repeat ceiling for the severe-low tier.
pub const SEVERE_LOW_REPEAT_CEILING: u32 = 4;

/// Repeat ceiling for the high tier.
pub const HIGH_REPEAT_CEILING: u32 = 24;
