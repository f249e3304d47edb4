use crate::foundation::color::Rgb;
use crate::foundation::error::{HexshiftError, HexshiftResult};

/// One gradient anchor: a position along the text axis and its color.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorStop {
    /// Position in `[0, 1]`; values outside are clamped during normalization.
    pub position: f64,
    /// Anchor color.
    pub color: Rgb,
}

impl ColorStop {
    /// Build a stop from a position and a color value.
    pub fn new(position: f64, color: Rgb) -> Self {
        Self { position, color }
    }

    /// Build a stop from a position and a hex color string.
    pub fn from_hex(position: f64, color: &str) -> HexshiftResult<Self> {
        Ok(Self {
            position,
            color: Rgb::from_hex(color)?,
        })
    }
}

/// A raw, user-authored gradient: any number of stops, in any order, with
/// positions possibly outside `[0, 1]`.
///
/// Sampling goes through [`Gradient::normalize`] first.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Gradient {
    /// Authored stops, order preserved.
    pub stops: Vec<ColorStop>,
}

impl Gradient {
    /// Build a gradient from an authored stop list.
    pub fn new(stops: Vec<ColorStop>) -> Self {
        Self { stops }
    }

    /// Build a gradient from hex color strings.
    ///
    /// With explicit `positions`, each color pairs with the position at the
    /// same index and the two lists must have equal length. Without
    /// positions, colors distribute evenly across `[0, 1]`; a single color
    /// sits at 0.
    pub fn from_hex_colors<S: AsRef<str>>(
        colors: &[S],
        positions: Option<&[f64]>,
    ) -> HexshiftResult<Self> {
        let positions: Vec<f64> = match positions {
            Some(explicit) => {
                if explicit.len() != colors.len() {
                    return Err(HexshiftError::MismatchedPositions {
                        positions: explicit.len(),
                        colors: colors.len(),
                    });
                }
                explicit.to_vec()
            }
            None => {
                let denom = colors.len().saturating_sub(1).max(1) as f64;
                (0..colors.len()).map(|i| i as f64 / denom).collect()
            }
        };

        let mut stops = Vec::with_capacity(colors.len());
        for (color, position) in colors.iter().zip(positions) {
            stops.push(ColorStop::from_hex(position, color.as_ref())?);
        }
        Ok(Self { stops })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/stop.rs"]
mod tests;
