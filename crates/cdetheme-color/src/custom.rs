//! Synthesizing a palette from a single base color.
//!
//! The eight slot colors are variations of the base in HSV space: each slot
//! rotates the hue by a fixed offset, scales the value by a fixed factor and
//! slightly desaturates.
//!
//! | Slot | Hue offset | Value factor |
//! |------|-----------:|-------------:|
//! | 1 | 0.00 | 1.10 |
//! | 2 | 0.45 | 0.85 |
//! | 3 | 0.15 | 0.95 |
//! | 4 | 0.08 | 0.90 |
//! | 5 | 0.00 | 1.00 |
//! | 6 | 0.55 | 0.88 |
//! | 7 | 0.30 | 0.80 |
//! | 8 | 0.05 | 0.92 |
//!
//! ```rust
//! use cdetheme_color::{CustomColor, Slot};
//!
//! let custom: CustomColor = "100,120,180".parse().unwrap();
//! let palette = custom.palette();
//! assert_eq!(palette.name(), "Custom(100,120,180)");
//! assert_eq!(palette.color(Slot::MainBackground), "#6c7eb4");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::CustomColorError;
use crate::palette::{Palette, SLOT_COUNT};

const HUE_OFFSETS: [f64; SLOT_COUNT] = [0.0, 0.45, 0.15, 0.08, 0.0, 0.55, 0.30, 0.05];
const VALUE_FACTORS: [f64; SLOT_COUNT] = [1.1, 0.85, 0.95, 0.9, 1.0, 0.88, 0.8, 0.92];
const SATURATION_FACTOR: f64 = 0.9;

/// An 8-bit RGB base color given as `R,G,B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl CustomColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Palette name, `Custom(R,G,B)`.
    pub fn name(&self) -> String {
        format!("Custom({},{},{})", self.red, self.green, self.blue)
    }

    /// The base color as `#rrggbb`.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Builds the eight-slot palette of variations.
    pub fn palette(&self) -> Palette {
        let (hue, saturation, value) = rgb_to_hsv(
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        );

        let colors = std::array::from_fn(|i| {
            let h = (hue + HUE_OFFSETS[i]).rem_euclid(1.0);
            let s = (saturation * SATURATION_FACTOR).min(1.0);
            let v = (value * VALUE_FACTORS[i]).min(1.0);
            let (r, g, b) = hsv_to_rgb(h, s, v);
            format!("#{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b))
        });

        Palette::new(self.name(), colors)
    }
}

impl fmt::Display for CustomColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.red, self.green, self.blue)
    }
}

impl FromStr for CustomColor {
    type Err = CustomColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err(CustomColorError::Arity { found: parts.len() });
        }

        let mut channels = [0u8; 3];
        for (channel, part) in channels.iter_mut().zip(parts) {
            let part = part.trim();
            let value: i64 = part.parse().map_err(|_| CustomColorError::NotANumber {
                value: part.to_string(),
            })?;
            *channel =
                u8::try_from(value).map_err(|_| CustomColorError::OutOfRange { value })?;
        }

        let [red, green, blue] = channels;
        Ok(Self::new(red, green, blue))
    }
}

/// Unit-range channel to a byte, truncating.
fn to_byte(channel: f64) -> u8 {
    (channel * 255.0) as u8
}

/// RGB (each 0–1) to hue, saturation and value (each 0–1).
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let value = max;
    if min == max {
        return (0.0, 0.0, value);
    }

    let range = max - min;
    let saturation = range / max;
    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;
    let hue = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    ((hue / 6.0).rem_euclid(1.0), saturation, value)
}

/// Hue, saturation and value (each 0–1) to RGB (each 0–1).
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }

    let sector = (h * 6.0).trunc();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
