//! Constants for the GlucoTrend core
//!
//! Centralized, documented constants used throughout the pipeline. All
//! numeric values are defined here with their purpose and rationale so the
//! algorithm modules stay free of magic numbers.
//!
//! ## Organization
//!
//! - **Clinical**: glucose thresholds, sensor lag, pacing ceilings
//! - **Protocol**: the 12-byte display message layout and byte codes
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, document purpose and source
//! 3. Use descriptive names that include units where relevant

/// Glucose thresholds, sensor characteristics, and alert pacing ceilings.
pub mod clinical;

/// Display message byte layout and wire codes.
pub mod protocol;

// Re-export commonly used constants for convenience
pub use clinical::{
    ESTIMATE_MAX_MG_DL, ESTIMATE_MIN_MG_DL, HIGH_LIMIT_MG_DL, HISTORY_LEN, LOW_LIMIT_MG_DL,
    QUALIFYING_GLUCOSE_MIN_MG_DL, SENSOR_LAG_MINUTES,
};

pub use protocol::{BLANK, CHANNEL_MARKER, GLUCOSE_SUPPRESSED, MESSAGE_LEN};
