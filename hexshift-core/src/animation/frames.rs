use crate::animation::phase::phase_for_frame;
use crate::animation::spec::AnimationSpec;
use crate::foundation::color::Rgb;
use crate::foundation::error::HexshiftResult;
use crate::gradient::normalize::NormalizedGradient;
use crate::gradient::set::GradientSet;
use crate::gradient::stop::Gradient;
use rayon::prelude::*;

/// One colorized character of a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameCell {
    /// The character, unchanged from the input text.
    pub ch: char,
    /// Sampled color for this character.
    pub color: Rgb,
}

/// One fully colorized rendition of the input text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    /// Cells in text order, one per character.
    pub cells: Vec<FrameCell>,
}

/// Threading controls for multi-frame generation.
#[derive(Clone, Debug, Default)]
pub struct FrameThreading {
    /// Enable frame-level parallelism (rayon), using a dedicated thread pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon
    /// defaults.
    pub threads: Option<usize>,
}

/// Generate all frames sequentially.
pub fn generate_frames(set: &GradientSet, spec: &AnimationSpec) -> HexshiftResult<Vec<Frame>> {
    generate_frames_with(set, spec, &FrameThreading::default())
}

/// Generate all frames, optionally in parallel.
///
/// Validates the request before any work, then produces exactly `spec.frames`
/// frames with one cell per character of `spec.text`. Gradients cycle
/// round-robin by frame index; each character samples its gradient at
/// `i / max(1, n - 1)` plus the frame's phase, always with spatial wrapping.
/// The parallel path collects frames in ascending index order and produces
/// output identical to the sequential path.
#[tracing::instrument(skip(set, spec))]
pub fn generate_frames_with(
    set: &GradientSet,
    spec: &AnimationSpec,
    threading: &FrameThreading,
) -> HexshiftResult<Vec<Frame>> {
    spec.validate()?;

    let normalized: Vec<NormalizedGradient> =
        set.gradients().iter().map(Gradient::normalize).collect();
    let chars: Vec<char> = spec.text.chars().collect();
    let shift = spec.resolved_shift(chars.len());

    let build = |frame: u32| build_frame(&normalized, &chars, spec, shift, frame);

    if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        Ok(pool.install(|| (0..spec.frames).into_par_iter().map(build).collect()))
    } else {
        Ok((0..spec.frames).map(build).collect())
    }
}

fn build_frame(
    normalized: &[NormalizedGradient],
    chars: &[char],
    spec: &AnimationSpec,
    shift: f64,
    frame: u32,
) -> Frame {
    let gradient = &normalized[frame as usize % normalized.len()];
    let phase = phase_for_frame(frame, spec.frames, spec.mode, shift);
    let denom = chars.len().saturating_sub(1).max(1) as f64;

    let cells = chars
        .iter()
        .enumerate()
        .map(|(i, &ch)| FrameCell {
            ch,
            color: gradient.sample(i as f64 / denom + phase, true),
        })
        .collect();
    Frame { cells }
}

fn build_thread_pool(threads: Option<usize>) -> HexshiftResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(anyhow::anyhow!("generate 'threads' must be >= 1 when set").into());
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build rayon thread pool: {e}").into())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/frames.rs"]
mod tests;
