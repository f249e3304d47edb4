use crate::foundation::color::Rgb;
use crate::gradient::stop::{ColorStop, Gradient};

/// A boundary-complete gradient ready for sampling.
///
/// Invariants, established by [`Gradient::normalize`]: at least two stops,
/// positions non-decreasing, first position exactly 0.0, last exactly 1.0.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedGradient {
    stops: Vec<ColorStop>,
}

impl NormalizedGradient {
    /// Normalized stops, ascending by position.
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }
}

impl Gradient {
    /// Normalize this gradient into a sampleable form.
    ///
    /// Positions are clamped into `[0, 1]` and stably sorted, so stops
    /// sharing a position keep their authored order. An empty gradient
    /// becomes solid white. When the outermost stops do not reach 0 or 1,
    /// flat synthetic stops carrying the nearest color are added so the full
    /// axis is covered.
    pub fn normalize(&self) -> NormalizedGradient {
        let mut stops: Vec<ColorStop> = self
            .stops
            .iter()
            .map(|s| ColorStop::new(s.position.clamp(0.0, 1.0), s.color))
            .collect();
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));

        if stops.is_empty() {
            stops.push(ColorStop::new(0.0, Rgb::WHITE));
            stops.push(ColorStop::new(1.0, Rgb::WHITE));
        }

        let first = stops[0];
        if first.position > 0.0 {
            stops.insert(0, ColorStop::new(0.0, first.color));
        }
        let last = stops[stops.len() - 1];
        if last.position < 1.0 {
            stops.push(ColorStop::new(1.0, last.color));
        }

        NormalizedGradient { stops }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/normalize.rs"]
mod tests;
