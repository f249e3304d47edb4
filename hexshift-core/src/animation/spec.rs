use crate::foundation::error::{HexshiftError, HexshiftResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the sampling phase advances from frame to frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShiftMode {
    /// Phase grows without bound; the gradient scrolls and tiles.
    #[default]
    Wrap,
    /// Phase walks a triangle wave between 0 and 1 and back.
    PingPong,
}

impl ShiftMode {
    /// Canonical lowercase name (`wrap` / `pingpong`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wrap => "wrap",
            Self::PingPong => "pingpong",
        }
    }
}

impl fmt::Display for ShiftMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftMode {
    type Err = HexshiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wrap" => Ok(Self::Wrap),
            "pingpong" => Ok(Self::PingPong),
            other => Err(HexshiftError::invalid_shift_mode(other)),
        }
    }
}

impl Serialize for ShiftMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ShiftMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One frame-generation request.
///
/// Building one is pure; [`AnimationSpec::validate`] gates generation.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationSpec {
    /// Text whose characters are colorized; may be empty.
    pub text: String,
    /// Number of frames to produce; must be at least 1.
    pub frames: u32,
    /// Phase schedule across frames.
    pub mode: ShiftMode,
    /// Phase advance per frame; `None` derives one character step per frame.
    pub shift_per_frame: Option<f64>,
    /// `change-interval` value emitted into the document, in milliseconds.
    pub interval_ms: u32,
    /// Root mapping key of the emitted document.
    pub root_key: String,
    /// Frame list key of the emitted document.
    pub list_key: String,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            text: String::new(),
            frames: 48,
            mode: ShiftMode::Wrap,
            shift_per_frame: None,
            interval_ms: 200,
            root_key: "web".to_owned(),
            list_key: "texts".to_owned(),
        }
    }
}

impl AnimationSpec {
    /// Validate static invariants for this request.
    pub fn validate(&self) -> HexshiftResult<()> {
        if self.frames == 0 {
            return Err(HexshiftError::InvalidFrameCount);
        }
        Ok(())
    }

    /// Effective phase advance per frame for a text of `char_count`
    /// characters: the explicit value when set, otherwise one character step
    /// (`1 / char_count`), or 0 for empty text.
    pub fn resolved_shift(&self, char_count: usize) -> f64 {
        match self.shift_per_frame {
            Some(shift) => shift,
            None if char_count == 0 => 0.0,
            None => 1.0 / char_count as f64,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spec.rs"]
mod tests;
