//! Conversions between the textual and numeric color forms.
//!
//! Palettes store colors as text, either 8 bits per channel (`#rrggbb`) or
//! 16 bits per channel (`#rrrrggggbbbb`). The derivation engine works on
//! 16-bit channel values, and the stylesheets want `#rrggbb` again. This
//! module moves colors between those three forms:
//!
//! | From | To | Function |
//! |------|----|----------|
//! | `#rrggbb` / `#rrrrggggbbbb` | [`WideHex`] | [`widen_to_16bit`] |
//! | wide text | [`Rgb16`] | [`parse_channels`] |
//! | `[f64; 3]` | [`WideHex`] | [`channels_to_hex`] |
//! | wide text | `#rrggbb` | [`narrow_to_8bit`] |
//!
//! None of these conversions can fail. Text that is not a recognizable color
//! widens to mid-gray ([`FALLBACK_WIDE`]) so that a damaged palette file still
//! produces a usable theme.
//!
//! # Example
//!
//! ```rust
//! use cdetheme_color::codec::{narrow_to_8bit, widen_to_16bit, Rgb16};
//!
//! let wide = widen_to_16bit("#ab1200");
//! assert_eq!(wide.as_str(), "#abab12120000");
//! assert_eq!(wide.channels(), Rgb16(0xabab, 0x1212, 0x0000));
//! assert_eq!(narrow_to_8bit(wide.as_str()), "#ab1200");
//!
//! // Unrecognized input never fails
//! assert_eq!(widen_to_16bit("teal").as_str(), "#888888888888");
//! ```

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Largest value a 16-bit channel can hold.
pub const MAX_CHANNEL: u16 = u16::MAX;

/// Wide form returned for text that matches neither color pattern.
pub const FALLBACK_WIDE: &str = "#888888888888";

static NARROW_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").expect("valid pattern")
});

static WIDE_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[0-9a-fA-F]{12}$").expect("valid pattern"));

static WIDE_GROUPS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#([0-9a-fA-F]{4})([0-9a-fA-F]{4})([0-9a-fA-F]{4})").expect("valid pattern")
});

static NARROW_GROUPS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})").expect("valid pattern")
});

// ─── Rgb16 ──────────────────────────────────────────────────────────────────

/// A color as three 16-bit channels (0–65535).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb16(pub u16, pub u16, pub u16);

impl Rgb16 {
    /// Channels as floating point values, the form the derivation math uses.
    pub fn to_f64(self) -> [f64; 3] {
        [f64::from(self.0), f64::from(self.1), f64::from(self.2)]
    }

    /// Smallest of the three channels.
    pub fn min_channel(self) -> u16 {
        self.0.min(self.1).min(self.2)
    }

    /// Largest of the three channels.
    pub fn max_channel(self) -> u16 {
        self.0.max(self.1).max(self.2)
    }
}

// ─── WideHex ────────────────────────────────────────────────────────────────

/// A color in 16-bit-per-channel text form, `#rrrrggggbbbb`.
///
/// Letter case is whatever the source text used; widening and narrowing
/// never change it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WideHex(String);

impl WideHex {
    /// The `#rrrrggggbbbb` text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the channel values.
    pub fn channels(&self) -> Rgb16 {
        parse_channels(&self.0)
    }

    /// Drops each channel to its most significant byte, giving `#rrggbb`.
    pub fn narrow(&self) -> String {
        narrow_to_8bit(&self.0)
    }
}

impl fmt::Display for WideHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WideHex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ─── Conversions ────────────────────────────────────────────────────────────

/// Converts `#rrggbb` or `#rrrrggggbbbb` text to the 16-bit text form.
///
/// Surrounding whitespace is ignored. The 8-bit pattern is tried first and
/// each channel byte is doubled (`ab` becomes `abab`); 12-digit text passes
/// through unchanged. Anything else yields [`FALLBACK_WIDE`].
pub fn widen_to_16bit(text: &str) -> WideHex {
    let text = text.trim();

    if let Some(caps) = NARROW_COLOR.captures(text) {
        let mut wide = String::with_capacity(13);
        wide.push('#');
        for group in 1..=3 {
            let byte = &caps[group];
            wide.push_str(byte);
            wide.push_str(byte);
        }
        return WideHex(wide);
    }

    if let Some(found) = WIDE_COLOR.find(text) {
        return WideHex(found.as_str().to_string());
    }

    WideHex(FALLBACK_WIDE.to_string())
}

/// Extracts channel values from color text.
///
/// Looks for three 4-digit hex groups after a `#`, then for three 2-digit
/// groups (taken as-is, not scaled). Text with neither yields black.
pub fn parse_channels(text: &str) -> Rgb16 {
    captured_channels(&WIDE_GROUPS, text)
        .or_else(|| captured_channels(&NARROW_GROUPS, text))
        .unwrap_or_default()
}

fn captured_channels(pattern: &Regex, text: &str) -> Option<Rgb16> {
    let caps = pattern.captures(text)?;
    let channel = |group: usize| u16::from_str_radix(&caps[group], 16).ok();
    Some(Rgb16(channel(1)?, channel(2)?, channel(3)?))
}

/// Quantizes one derived channel value to a 16-bit integer.
///
/// The value is truncated toward zero and then clamped to `0..=65535`.
/// NaN maps to 0.
pub fn quantize_channel(value: f64) -> u16 {
    value.trunc().clamp(0.0, f64::from(MAX_CHANNEL)) as u16
}

/// Encodes one channel as exactly four lower-case hex digits.
pub fn encode_channel(value: f64) -> String {
    format!("{:04x}", quantize_channel(value))
}

/// Encodes three (possibly out-of-range) channel values as `#rrrrggggbbbb`.
pub fn channels_to_hex(channels: [f64; 3]) -> WideHex {
    let [r, g, b] = channels;
    WideHex(format!(
        "#{}{}{}",
        encode_channel(r),
        encode_channel(g),
        encode_channel(b)
    ))
}

/// Narrows `#rrrrggggbbbb` text to `#rrggbb` by keeping the high byte of each
/// channel. This truncates; `#12ff...` narrows to `#12`, not `#13`.
pub fn narrow_to_8bit(text: &str) -> String {
    let part = |range: std::ops::Range<usize>| text.get(range).unwrap_or("");
    format!("#{}{}{}", part(1..3), part(5..7), part(9..11))
}
