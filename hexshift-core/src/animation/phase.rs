use crate::animation::spec::ShiftMode;

/// Phase offset for frame `frame` of a `frame_count`-frame animation.
///
/// `Wrap` grows linearly (`frame * shift_per_frame`); spatial tiling happens
/// later in the sampler. `PingPong` ignores `shift_per_frame` and walks a
/// triangle wave over a cycle of `2 * (frame_count - 1)` frames: 0 at frame
/// 0, exactly 1 at frame `frame_count - 1`, back down to 0. A single-frame
/// animation pins the phase at 0.
pub fn phase_for_frame(
    frame: u32,
    frame_count: u32,
    mode: ShiftMode,
    shift_per_frame: f64,
) -> f64 {
    match mode {
        ShiftMode::Wrap => f64::from(frame) * shift_per_frame,
        ShiftMode::PingPong => {
            if frame_count <= 1 {
                return 0.0;
            }
            let peak = u64::from(frame_count) - 1;
            let cycle = 2 * peak;
            let k = u64::from(frame) % cycle;
            let up = if k <= peak { k } else { cycle - k };
            up as f64 / peak as f64
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/phase.rs"]
mod tests;
