use crate::foundation::color::Rgb;
use crate::gradient::normalize::NormalizedGradient;

/// Minimum segment width used when two stops share a position.
const SEGMENT_EPS: f64 = 1e-8;

impl NormalizedGradient {
    /// Sample the gradient color at parameter `t`.
    ///
    /// With `wrap`, `t` is reduced modulo 1 (`rem_euclid`) so the gradient
    /// tiles periodically; otherwise it is clamped into `[0, 1]`. The color
    /// interpolates linearly per channel between the two stops enclosing `t`.
    /// Exactly at a position shared by several stops, the earliest wins.
    pub fn sample(&self, t: f64, wrap: bool) -> Rgb {
        let t = if wrap {
            t.rem_euclid(1.0)
        } else {
            t.clamp(0.0, 1.0)
        };

        let stops = self.stops();
        let idx = stops.partition_point(|s| s.position < t).max(1);
        if idx >= stops.len() {
            // Float edge: no stop at or beyond t, hold the final color.
            return stops[stops.len() - 1].color;
        }

        let left = stops[idx - 1];
        let right = stops[idx];
        let span = (right.position - left.position).max(SEGMENT_EPS);
        let local = (t - left.position) / span;
        Rgb::lerp(left.color, right.color, local)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/sample.rs"]
mod tests;
