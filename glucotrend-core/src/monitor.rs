//! The per-reading pipeline and its retained state
//!
//! One call to [`GlucoseMonitor::handle_glucose`] runs the whole chain:
//! boundary validation, history insertion, slope estimation, lag-compensated
//! projection, alert pacing, and frame encoding. The call is synchronous and
//! non-reentrant; a multi-threaded host must serialize invocations itself,
//! there is no locking here.
//!
//! ## Retention
//!
//! The history ring and the pacing counter must survive the host's
//! low-power cycles. [`GlucoseMonitor::save`] and
//! [`GlucoseMonitor::restore`] are the explicit hooks at that boundary:
//! the host persists the [`RetainedState`] snapshot however it likes
//! (retained RAM, flash, serde under `std`) and hands it back verbatim
//! after wake-up.

use crate::alert::{AlertDecision, AlertEngine, AlertState};
use crate::constants::clinical::{HISTORY_LEN, VOLATILITY_DELTA_MG_DL};
use crate::errors::{MonitorError, MonitorResult};
use crate::estimator::SlopeEstimator;
use crate::history::{Reading, ReadingHistory};
use crate::message::OutgoingMessage;
use crate::projector::TrendProjector;
use crate::time::Timestamp;

// Optional logging, compiled out entirely without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Snapshot of everything that must survive a low-power cycle
///
/// Layout matches what retained RAM keeps for the core: three history
/// slots (newest first) and the pacing counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetainedState {
    /// History slots, newest first
    pub readings: [Reading; HISTORY_LEN],
    /// Alert pacing state
    pub alert: AlertState,
}

/// The trend-estimation and alert-encoding core
///
/// Owns the rolling history, the pacing state, and the outgoing frame.
/// Construct once at boot (or [`restore`](Self::restore) after a retention
/// cycle) and feed it one reading per transport event.
#[derive(Debug, Clone, Default)]
pub struct GlucoseMonitor {
    history: ReadingHistory,
    estimator: SlopeEstimator,
    projector: TrendProjector,
    alerts: AlertEngine,
    message: OutgoingMessage,
}

impl GlucoseMonitor {
    /// Monitor with default estimator and projector settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Monitor with custom estimation and projection parameters
    pub fn with_components(estimator: SlopeEstimator, projector: TrendProjector) -> Self {
        Self {
            estimator,
            projector,
            ..Self::default()
        }
    }

    /// Process one sensor reading end to end
    ///
    /// Validates the transport contract, inserts the reading, estimates
    /// the trend, projects the lag-compensated estimate and time to limit,
    /// advances alert pacing, and encodes the outgoing frame. The returned
    /// decision carries the immediate-alert signal for the haptic driver.
    ///
    /// Contract violations are reported before any state changes; the
    /// sentinel glucose `0` is a valid "absent" marker, not a violation.
    pub fn handle_glucose(
        &mut self,
        glucose: i32,
        timestamp_s: Timestamp,
    ) -> MonitorResult<AlertDecision> {
        if glucose < 0 {
            return Err(MonitorError::NegativeGlucose { value: glucose });
        }

        let previous = self.history.newest();
        if !previous.is_sentinel() && timestamp_s < previous.timestamp_s {
            return Err(MonitorError::TimestampRegression {
                previous: previous.timestamp_s,
                current: timestamp_s,
            });
        }

        log_debug!("reading {} mg/dL at {}s", glucose, timestamp_s);

        self.history.push(Reading::new(glucose, timestamp_s));

        let slope = self.estimator.estimate(&self.history);
        let projection = self.projector.project(glucose, slope);
        log_debug!(
            "slope {} mg/dL/min, estimate {} mg/dL, time to limit {:?}",
            slope,
            projection.estimated,
            projection.time_to_limit
        );

        let decision = self.alerts.evaluate(projection.estimated, slope);
        if decision.raise {
            log_debug!("raising alert, tier {:?}", decision.tier);
        }

        let volatile = self.volatile();
        self.message.encode_trend(
            decision.kind,
            projection.estimated,
            slope,
            projection.time_to_limit,
            volatile,
        );

        // Self-healing: a sentinel in the newest slot means the history is
        // uninitialized junk, start over
        if self.history.newest().is_sentinel() {
            self.history.reset();
        }

        Ok(decision)
    }

    /// Encode the fixed missed-readings frame
    ///
    /// Invoked by the collaborator that tracks reading cadence; consults
    /// no history, slope, or alert state.
    pub fn missed_readings(&mut self) {
        log_debug!("missed readings");
        self.message.encode_missed();
    }

    /// The outgoing frame, for the transport to inspect and transmit
    pub fn message(&self) -> &OutgoingMessage {
        &self.message
    }

    /// Mutable frame access, for the transport to clear the ready flag
    pub fn message_mut(&mut self) -> &mut OutgoingMessage {
        &mut self.message
    }

    /// The reading history, newest first
    pub fn history(&self) -> &ReadingHistory {
        &self.history
    }

    /// Snapshot the state that must survive a low-power cycle
    pub fn save(&self) -> RetainedState {
        RetainedState {
            readings: self.history.snapshot(),
            alert: self.alerts.state(),
        }
    }

    /// Reinstate a [`save`](Self::save) snapshot after wake-up
    pub fn restore(&mut self, state: &RetainedState) {
        self.history.restore(&state.readings);
        self.alerts.restore(state.alert);
    }

    /// True when the two newest readings disagree enough to distrust
    fn volatile(&self) -> bool {
        let (newest, previous) = self.history.newest_pair();
        !newest.is_sentinel()
            && !previous.is_sentinel()
            && (newest.glucose - previous.glucose).abs() > VOLATILITY_DELTA_MG_DL
    }
}
