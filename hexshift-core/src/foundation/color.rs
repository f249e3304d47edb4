use crate::foundation::error::{HexshiftError, HexshiftResult};
use serde::{Deserialize, Serialize};

/// 8-bit RGB color in the channel order the marker format emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Opaque white, the fallback for empty gradients and lenient decoding.
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Build a color from explicit channel values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string.
    ///
    /// Accepts 3 or 6 hex digits with an optional leading `#`,
    /// case-insensitive, surrounding whitespace ignored. The 3-digit form
    /// doubles each digit (`#F80` -> `#FF8800`).
    pub fn from_hex(s: &str) -> HexshiftResult<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        fn parse_six(digits: &str) -> Option<Rgb> {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some(Rgb { r, g, b })
        }

        if !digits.is_ascii() {
            return Err(HexshiftError::invalid_color(trimmed));
        }

        let parsed = match digits.len() {
            3 => {
                let mut doubled = String::with_capacity(6);
                for ch in digits.chars() {
                    doubled.push(ch);
                    doubled.push(ch);
                }
                parse_six(&doubled)
            }
            6 => parse_six(digits),
            _ => None,
        };

        parsed.ok_or_else(|| HexshiftError::invalid_color(trimmed))
    }

    /// Format as exactly six uppercase hex digits, no `#` prefix.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Interpolate between `a` and `b` with factor `t`, per channel in f64.
    ///
    /// Channel results round half away from zero (`f64::round`), so a
    /// midpoint like `127.5` becomes `128`.
    pub fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Rgb {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
        }
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&format!("#{}", self.to_hex()))
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
