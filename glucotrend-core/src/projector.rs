//! Lag compensation and time-to-limit projection
//!
//! The sensor reports interstitial glucose, which trails blood glucose by
//! roughly 15 minutes. Given the current reading and the trend slope, this
//! module extrapolates what glucose is likely to be *right now*, and
//! projects how many minutes remain until a safety threshold (180 high,
//! 80 low) is crossed.
//!
//! Both outputs are guarded. An estimate outside the credible band
//! [40, 300] is discarded in favor of the raw reading; this is expected
//! steady-state behavior under sensor noise at physiological extremes, not
//! an error. A countdown that projects past 99 minutes carries no urgency
//! and collapses to "not applicable".

use crate::constants::clinical::{
    COUNTDOWN_MAX_MINUTES, ESTIMATE_MAX_MG_DL, ESTIMATE_MIN_MG_DL, HIGH_LIMIT_MG_DL,
    LOW_LIMIT_MG_DL, SENSOR_LAG_MINUTES,
};

/// Minutes until a safety threshold is crossed
///
/// `NotApplicable` and `AtLimit` encode identically on the wire (the
/// display shows the slope instead of a countdown for both), but they mean
/// different things clinically: "nothing is projected to happen" versus
/// "the projection says it is happening now". Keeping them distinct here
/// lets a future display revision tell them apart without touching the
/// pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeToLimit {
    /// Not trending toward a limit, or the crossing is more than 99
    /// minutes out
    NotApplicable,
    /// The crossing is at most one minute away once sensor lag is
    /// subtracted, or already behind us
    AtLimit,
    /// Whole minutes until the crossing, 2..=99
    Minutes(u8),
}

/// Result of one projection pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// Lag-compensated glucose estimate in mg/dL
    pub estimated: i32,
    /// Projected minutes until a safety threshold is crossed
    pub time_to_limit: TimeToLimit,
}

/// Extrapolates current glucose and projects threshold crossings
#[derive(Debug, Clone)]
pub struct TrendProjector {
    /// Reporting lag compensated by the extrapolation (minutes)
    lag_minutes: f32,
    /// Hyperglycemia threshold (mg/dL)
    high_limit: i32,
    /// Hypoglycemia threshold (mg/dL)
    low_limit: i32,
}

impl Default for TrendProjector {
    fn default() -> Self {
        Self {
            lag_minutes: SENSOR_LAG_MINUTES,
            high_limit: HIGH_LIMIT_MG_DL,
            low_limit: LOW_LIMIT_MG_DL,
        }
    }
}

impl TrendProjector {
    /// Projector with custom limits, for sensors with different lag or
    /// clinical targets
    pub fn new_with_limits(lag_minutes: f32, high_limit: i32, low_limit: i32) -> Self {
        Self {
            lag_minutes,
            high_limit,
            low_limit,
        }
    }

    /// Run one projection from the current reading and trend slope
    pub fn project(&self, current: i32, slope: f32) -> Projection {
        Projection {
            estimated: self.estimate(current, slope),
            time_to_limit: self.time_to_limit(current, slope),
        }
    }

    /// Lag-compensated glucose estimate
    ///
    /// Falls back to the raw reading when extrapolation leaves the
    /// credible band.
    fn estimate(&self, current: i32, slope: f32) -> i32 {
        let estimated = (current as f32 + slope * self.lag_minutes) as i32;

        if !(ESTIMATE_MIN_MG_DL..=ESTIMATE_MAX_MG_DL).contains(&estimated) {
            return current;
        }
        estimated
    }

    /// Minutes until the relevant threshold, with sensor lag subtracted
    fn time_to_limit(&self, current: i32, slope: f32) -> TimeToLimit {
        let distance = if slope > 0.0 && current < self.high_limit {
            self.high_limit - current
        } else if slope < 0.0 && current > self.low_limit {
            current - self.low_limit
        } else {
            return TimeToLimit::NotApplicable;
        };

        // Truncate before subtracting the lag, keeping the countdown on the
        // same whole-minute grid as the regression
        let minutes = libm::fabsf(distance as f32 / slope) as i32 - self.lag_minutes as i32;

        if minutes > COUNTDOWN_MAX_MINUTES {
            TimeToLimit::NotApplicable
        } else if minutes <= 1 {
            TimeToLimit::AtLimit
        } else {
            TimeToLimit::Minutes(minutes as u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_slope_passes_reading_through() {
        let projection = TrendProjector::default().project(150, 0.0);
        assert_eq!(projection.estimated, 150);
        assert_eq!(projection.time_to_limit, TimeToLimit::NotApplicable);
    }

    #[test]
    fn estimate_compensates_lag() {
        // 120 + 2 mg/dL/min over 15 minutes of lag
        let projection = TrendProjector::default().project(120, 2.0);
        assert_eq!(projection.estimated, 150);
    }

    #[test]
    fn runaway_estimate_falls_back_to_reading() {
        // 280 + 3 * 15 = 325 > 300: discard
        assert_eq!(TrendProjector::default().project(280, 3.0).estimated, 280);
        // 55 - 2 * 15 = 25 < 40: discard
        assert_eq!(TrendProjector::default().project(55, -2.0).estimated, 55);
    }

    #[test]
    fn rising_countdown_toward_high_limit() {
        // (180 - 120) / 1.0 = 60 minutes, minus 15 lag
        let projection = TrendProjector::default().project(120, 1.0);
        assert_eq!(projection.time_to_limit, TimeToLimit::Minutes(45));
    }

    #[test]
    fn falling_countdown_toward_low_limit() {
        // (140 - 80) / 2.0 = 30 minutes, minus 15 lag
        let projection = TrendProjector::default().project(140, -2.0);
        assert_eq!(projection.time_to_limit, TimeToLimit::Minutes(15));
    }

    #[test]
    fn crossing_already_behind_is_at_limit() {
        // (90 - 80) / 5.0 = 2 minutes, minus 15 lag: already past
        let projection = TrendProjector::default().project(90, -5.0);
        assert_eq!(projection.time_to_limit, TimeToLimit::AtLimit);
    }

    #[test]
    fn distant_crossing_is_not_applicable() {
        // (180 - 100) / 0.5 = 160 minutes: beyond the display horizon
        let projection = TrendProjector::default().project(100, 0.5);
        assert_eq!(projection.time_to_limit, TimeToLimit::NotApplicable);
    }

    #[test]
    fn moving_away_from_limits_is_not_applicable() {
        // Rising while already above the high limit band
        let projection = TrendProjector::default().project(200, 1.0);
        assert_eq!(projection.time_to_limit, TimeToLimit::NotApplicable);
        // Falling while already below the low limit
        let projection = TrendProjector::default().project(70, -1.0);
        assert_eq!(projection.time_to_limit, TimeToLimit::NotApplicable);
    }
}
