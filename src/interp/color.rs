use std::fmt;

use crate::{
    animation::lerp::Lerp,
    foundation::error::{ScrollError, ScrollResult},
};

/// Straight (non-premultiplied) RGBA8. Serializes as `#rrggbb` or `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn parse_hex(s: &str) -> ScrollResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        let byte = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| ScrollError::validation(format!("bad hex color '{s}'")))
        };
        match hex.len() {
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(ScrollError::validation(format!(
                "hex color '{s}' must have 6 or 8 digits"
            ))),
        }
    }

    pub fn to_css(self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            let a = crate::foundation::math::round_to(f64::from(self.a) / 255.0, 3);
            format!("rgba({}, {}, {}, {a})", self.r, self.g, self.b)
        }
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl serde::Serialize for Rgba8 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Rgba8 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgba8::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

/// HSL with hue in degrees and saturation/lightness in percent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn to_rgba8(self) -> Rgba8 {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return Rgba8::rgb(v, v, v);
        }

        fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 0.5 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            }
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let ch = |t: f64| (hue_to_rgb(p, q, t) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgba8::rgb(ch(h + 1.0 / 3.0), ch(h), ch(h - 1.0 / 3.0))
    }
}

impl Lerp for Hsl {
    // Hue travels the short way around the wheel.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let mut dh = (b.h - a.h).rem_euclid(360.0);
        if dh > 180.0 {
            dh -= 360.0;
        }
        Self {
            h: (a.h + dh * t).rem_euclid(360.0),
            s: a.s + (b.s - a.s) * t,
            l: a.l + (b.l - a.l) * t,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interp/color.rs"]
mod tests;
