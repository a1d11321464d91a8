//! Display Message Wire Protocol
//!
//! Byte layout of the fixed 12-byte frame consumed by the paired
//! display/haptic firmware. Offsets and codes are load-bearing: the display
//! indexes the frame directly, so any change here must ship together with a
//! firmware update.
//!
//! ```text
//! ┌────┬────┬────┬────┬────┬────┬────┬────┬────┬────┬────┬────┐
//! │ 0  │ 1  │ 2  │ 3  │ 4  │ 5  │ 6  │ 7  │ 8  │ 9  │ 10 │ 11 │
//! ├────┼────┼────┴────┴────┼────┼────┴────┴────┴────┼────┼────┤
//! │kind│chan│ glucose asc  │pad │ countdown / slope │dir │vol │
//! └────┴────┴──────────────┴────┴───────────────────┴────┴────┘
//! ```

// ===== FRAME =====

/// Total frame length in bytes.
pub const MESSAGE_LEN: usize = 12;

/// Blank padding byte (ASCII space).
pub const BLANK: u8 = 0x20;

/// Channel/version marker carried in byte 1.
pub const CHANNEL_MARKER: u8 = 0x01;

/// Suppression sentinel in the first glucose-digit position.
///
/// While this value sits at [`GLUCOSE_OFFSET`] the frame is not handed to
/// the transport.
pub const GLUCOSE_SUPPRESSED: u8 = 0xFF;

// ===== BYTE OFFSETS =====

/// Byte 0: message kind code (see [`crate::message::MessageKind`]).
pub const KIND_OFFSET: usize = 0;

/// Byte 1: channel marker.
pub const CHANNEL_OFFSET: usize = 1;

/// Bytes 2..=4: up to three ASCII digits of estimated glucose.
pub const GLUCOSE_OFFSET: usize = 2;

/// Width of the glucose digit field.
pub const GLUCOSE_WIDTH: usize = 3;

/// Byte 5: permanently blank separator.
pub const SEPARATOR_OFFSET: usize = 5;

/// Byte 6: integer digit of |slope| when the limit is at hand.
pub const SLOPE_INT_OFFSET: usize = 6;

/// Byte 7: decimal point of the slope rendering, or first countdown digit.
pub const SLOPE_POINT_OFFSET: usize = 7;

/// Byte 8: fractional slope digit, or second countdown digit.
pub const SLOPE_FRAC_OFFSET: usize = 8;

/// Bytes 7..=8: up to two ASCII digits of the countdown.
pub const COUNTDOWN_OFFSET: usize = 7;

/// Width of the countdown digit field.
pub const COUNTDOWN_WIDTH: usize = 2;

/// Byte 9: trailing pad of the countdown/slope field.
pub const TAIL_PAD_OFFSET: usize = 9;

/// Byte 10: trend direction indicator.
pub const DIRECTION_OFFSET: usize = 10;

/// Byte 11: volatility flag.
pub const VOLATILITY_OFFSET: usize = 11;

// ===== INDICATOR CODES =====

/// Direction byte for a rising trend.
pub const DIRECTION_RISING: u8 = b'+';

/// Direction byte for a falling trend.
pub const DIRECTION_FALLING: u8 = b'-';

/// Volatility flag byte.
pub const VOLATILITY_MARK: u8 = b'?';

/// Decimal point in the slope rendering.
pub const DECIMAL_POINT: u8 = b'.';

/// Slope magnitude below which the slope field stays blank.
pub const SLOPE_DISPLAY_MIN: f32 = 0.1;

// ===== MISSED READINGS =====

/// ASCII body of the missed-readings frame ("Miss").
pub const MISSED_TEXT: [u8; 4] = *b"Miss";
