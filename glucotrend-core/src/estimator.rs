//! Least-squares trend slope over the reading history
//!
//! Ordinary least squares of glucose against time-in-minutes, the textbook
//! two-pass form: means first, then covariance over variance. Time enters
//! as whole minutes (integer truncation, see [`crate::time`]) so the slope
//! unit is mg/dL per minute.
//!
//! Only readings above the qualifying threshold participate; sentinels and
//! noise-floor values never drag the trend toward zero. Degenerate inputs
//! (no qualifying points, or no time variance because all qualifying
//! samples share a minute) yield a slope of exactly `0.0` — never NaN.

use crate::constants::clinical::QUALIFYING_GLUCOSE_MIN_MG_DL;
use crate::history::{Reading, ReadingRing};
use crate::time::whole_minutes;

/// Computes the glucose trend slope from a reading ring
#[derive(Debug, Clone)]
pub struct SlopeEstimator {
    /// Readings at or below this value are excluded from the regression
    qualifying_min_mg_dl: i32,
}

impl Default for SlopeEstimator {
    fn default() -> Self {
        Self {
            qualifying_min_mg_dl: QUALIFYING_GLUCOSE_MIN_MG_DL,
        }
    }
}

impl SlopeEstimator {
    /// Estimator with a custom qualifying threshold
    pub fn new_with_threshold(qualifying_min_mg_dl: i32) -> Self {
        Self {
            qualifying_min_mg_dl,
        }
    }

    /// Least-squares slope in mg/dL per minute
    ///
    /// Returns `0.0` when fewer than one qualifying reading exists or when
    /// all qualifying readings fall in the same minute.
    pub fn estimate<const N: usize>(&self, history: &ReadingRing<N>) -> f32 {
        let mut count = 0u32;
        let mut sum_x = 0.0f32;
        let mut sum_y = 0.0f32;

        for reading in self.qualifying(history) {
            count += 1;
            sum_x += whole_minutes(reading.timestamp_s) as f32;
            sum_y += reading.glucose as f32;
        }

        if count == 0 {
            return 0.0;
        }

        let x_mean = sum_x / count as f32;
        let y_mean = sum_y / count as f32;

        let mut covariance = 0.0f32;
        let mut variance = 0.0f32;

        for reading in self.qualifying(history) {
            let dx = whole_minutes(reading.timestamp_s) as f32 - x_mean;
            let dy = reading.glucose as f32 - y_mean;
            covariance += dx * dy;
            variance += dx * dx;
        }

        if variance == 0.0 {
            return 0.0;
        }

        covariance / variance
    }

    fn qualifying<'a, const N: usize>(
        &'a self,
        history: &'a ReadingRing<N>,
    ) -> impl Iterator<Item = Reading> + 'a {
        let min = self.qualifying_min_mg_dl;
        history.iter().filter(move |r| r.glucose > min)
    }
}
