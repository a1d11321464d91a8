//! Alert tiers, repeat pacing, and the per-reading decision
//!
//! Turning a projection into a buzz is a pacing problem: a low that
//! persists for an hour must not vibrate the wearer twelve times. Each
//! tier owns a repeat ceiling; the shared counter lets a tier alert once,
//! then swallows repeats until the ceiling re-arms it. Returning to the
//! normal band clears the counter immediately, so the next excursion
//! alerts without delay.
//!
//! A rapid change (|slope| at or above 3 mg/dL/min) bypasses pacing
//! entirely — by the time a paced repeat would fire, a fast excursion is a
//! different situation.

use crate::constants::clinical::{
    HIGH_LIMIT_MG_DL, HIGH_REPEAT_CEILING, LOW_LIMIT_MG_DL, MILD_LOW_CEIL_MG_DL,
    MILD_LOW_FLOOR_MG_DL, MILD_LOW_REPEAT_CEILING, RAPID_SLOPE_MG_DL_PER_MIN,
    SEVERE_LOW_MG_DL, SEVERE_LOW_REPEAT_CEILING,
};
use crate::message::MessageKind;

/// The band the estimated glucose fell into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertTier {
    /// 65 < estimate < 80 mg/dL: drifting low
    MildLow,
    /// Estimate below 60 mg/dL: urgent low
    SevereLow,
    /// Estimate above 180 mg/dL: high
    High,
    /// 80..=180 mg/dL: in range, pacing counter cleared
    Normal,
}

impl AlertTier {
    /// Repeat ceiling for this tier; `None` for the normal band, which
    /// has no silence window
    pub const fn repeat_ceiling(&self) -> Option<u32> {
        match self {
            Self::MildLow => Some(MILD_LOW_REPEAT_CEILING),
            Self::SevereLow => Some(SEVERE_LOW_REPEAT_CEILING),
            Self::High => Some(HIGH_REPEAT_CEILING),
            Self::Normal => None,
        }
    }
}

/// Outcome of one alert evaluation
///
/// `raise` is the signal the host's haptic driver acts on immediately;
/// `kind` is what lands in byte 0 of the outgoing frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertDecision {
    /// Buzz the wearer now
    pub raise: bool,
    /// Band the estimate fell into; `None` in the 60..=65 dead zone
    pub tier: Option<AlertTier>,
    /// The rapid-change override fired
    pub rapid_change: bool,
    /// Message kind for the outgoing frame
    pub kind: MessageKind,
}

/// Persistent pacing state, preserved across low-power cycles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlertState {
    /// Invocations since the active tier last alerted; 0 means armed
    pub repeat_counter: u32,
}

/// Hysteresis and pacing state machine over projection results
#[derive(Debug, Clone, Default)]
pub struct AlertEngine {
    state: AlertState,
}

impl AlertEngine {
    /// Engine with the counter armed
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pacing state, for the persistence hook
    pub fn state(&self) -> AlertState {
        self.state
    }

    /// Reinstate pacing state saved before a low-power cycle
    pub fn restore(&mut self, state: AlertState) {
        self.state = state;
    }

    /// Evaluate one projection and advance the pacing counter
    pub fn evaluate(&mut self, estimated: i32, slope: f32) -> AlertDecision {
        let tier = Self::classify(estimated);

        let mut raise = false;
        if let Some(tier) = tier {
            match tier.repeat_ceiling() {
                Some(ceiling) => raise = self.pace(ceiling),
                // Safe again: clear the silence window immediately
                None => self.state.repeat_counter = 0,
            }
        }

        let rapid_change = libm::fabsf(slope) >= RAPID_SLOPE_MG_DL_PER_MIN;
        if rapid_change {
            raise = true;
        }

        AlertDecision {
            raise,
            tier,
            rapid_change,
            kind: MessageKind::DoublePulse,
        }
    }

    /// Band the estimate falls into; the bands are disjoint, with a gap
    /// at 60..=65 where nothing matches and the counter is left alone
    fn classify(estimated: i32) -> Option<AlertTier> {
        if estimated > MILD_LOW_FLOOR_MG_DL && estimated < MILD_LOW_CEIL_MG_DL {
            return Some(AlertTier::MildLow);
        }
        if estimated < SEVERE_LOW_MG_DL {
            return Some(AlertTier::SevereLow);
        }
        if estimated > HIGH_LIMIT_MG_DL {
            return Some(AlertTier::High);
        }
        if (LOW_LIMIT_MG_DL..=HIGH_LIMIT_MG_DL).contains(&estimated) {
            return Some(AlertTier::Normal);
        }
        None
    }

    /// One pacing step: alert when armed, otherwise count toward the
    /// ceiling and re-arm on reaching it
    fn pace(&mut self, ceiling: u32) -> bool {
        if self.state.repeat_counter == 0 {
            self.state.repeat_counter = 1;
            return true;
        }

        self.state.repeat_counter += 1;
        if self.state.repeat_counter >= ceiling {
            self.state.repeat_counter = 0;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mild_low_paces_at_six() {
        let mut engine = AlertEngine::new();

        // 7 invocations at 70 mg/dL: alert on the 1st and 7th only
        let raised: [bool; 7] = core::array::from_fn(|_| engine.evaluate(70, 0.0).raise);
        assert_eq!(raised, [true, false, false, false, false, false, true]);
    }

    #[test]
    fn severe_low_paces_at_four() {
        let mut engine = AlertEngine::new();

        let raised: [bool; 5] = core::array::from_fn(|_| engine.evaluate(50, 0.0).raise);
        assert_eq!(raised, [true, false, false, false, true]);
        assert_eq!(engine.evaluate(50, 0.0).tier, Some(AlertTier::SevereLow));
    }

    #[test]
    fn normal_band_resets_counter() {
        let mut engine = AlertEngine::new();

        assert!(engine.evaluate(70, 0.0).raise);
        assert!(!engine.evaluate(70, 0.0).raise);

        // Back in range: counter clears, no alert
        let decision = engine.evaluate(120, 0.0);
        assert!(!decision.raise);
        assert_eq!(decision.tier, Some(AlertTier::Normal));

        // Next excursion alerts immediately again
        assert!(engine.evaluate(70, 0.0).raise);
    }

    #[test]
    fn normal_band_bounds_are_inclusive() {
        let mut engine = AlertEngine::new();
        assert_eq!(engine.evaluate(80, 0.0).tier, Some(AlertTier::Normal));
        assert_eq!(engine.evaluate(180, 0.0).tier, Some(AlertTier::Normal));
    }

    #[test]
    fn dead_zone_between_severe_and_mild() {
        let mut engine = AlertEngine::new();

        // 60..=65 matches no band: no alert, counter untouched
        let decision = engine.evaluate(62, 0.0);
        assert!(!decision.raise);
        assert_eq!(decision.tier, None);
        assert_eq!(engine.state().repeat_counter, 0);
    }

    #[test]
    fn rapid_change_bypasses_pacing() {
        let mut engine = AlertEngine::new();

        // Burn the mild-low alert so the tier is silenced
        assert!(engine.evaluate(70, 0.0).raise);
        assert!(!engine.evaluate(70, 0.0).raise);

        // A fast fall still alerts
        let decision = engine.evaluate(70, -3.0);
        assert!(decision.raise);
        assert!(decision.rapid_change);
    }

    #[test]
    fn high_tier_long_ceiling() {
        let mut engine = AlertEngine::new();

        assert!(engine.evaluate(220, 0.0).raise);
        for _ in 0..22 {
            assert!(!engine.evaluate(220, 0.0).raise);
        }
        // 24th invocation re-arms, 25th alerts again
        assert!(!engine.evaluate(220, 0.0).raise);
        assert!(engine.evaluate(220, 0.0).raise);
    }

    #[test]
    fn state_survives_restore() {
        let mut engine = AlertEngine::new();
        engine.evaluate(70, 0.0);
        engine.evaluate(70, 0.0);

        let saved = engine.state();
        let mut resumed = AlertEngine::new();
        resumed.restore(saved);

        assert_eq!(resumed.state().repeat_counter, 2);
    }
}
