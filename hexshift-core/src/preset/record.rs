use crate::animation::spec::{AnimationSpec, ShiftMode};
use crate::foundation::error::HexshiftResult;
use crate::gradient::set::{GradientSet, MAX_GRADIENTS};
use crate::gradient::stop::Gradient;

/// One saved generation request, as persisted in the preset catalog.
///
/// The serde shape is the catalog wire format; field defaults mirror the
/// front-end defaults so partial records still load.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PresetRecord {
    /// Text to colorize.
    #[serde(default)]
    pub text: String,
    /// Number of frames.
    #[serde(default = "default_frames")]
    pub frames: u32,
    /// `change-interval` milliseconds.
    #[serde(default = "default_interval")]
    pub interval: u32,
    /// Phase schedule.
    #[serde(default)]
    pub shift_mode: ShiftMode,
    /// Optional explicit phase advance per frame.
    #[serde(default)]
    pub shift_per_frame: Option<f64>,
    /// Root mapping key of the emitted document.
    #[serde(default = "default_root_key")]
    pub root_key: String,
    /// Frame list key of the emitted document.
    #[serde(default = "default_list_key")]
    pub list_key: String,
    /// Saved gradients in authored order, each a stop list.
    #[serde(default)]
    pub gradients: Vec<Gradient>,
}

fn default_frames() -> u32 {
    48
}

fn default_interval() -> u32 {
    200
}

fn default_root_key() -> String {
    "web".to_owned()
}

fn default_list_key() -> String {
    "texts".to_owned()
}

impl PresetRecord {
    /// Snapshot a generation request for saving.
    ///
    /// Gradients are stored normalized, so the catalog always carries
    /// boundary-complete stop lists.
    pub fn from_parts(set: &GradientSet, spec: &AnimationSpec) -> Self {
        Self {
            text: spec.text.clone(),
            frames: spec.frames,
            interval: spec.interval_ms,
            shift_mode: spec.mode,
            shift_per_frame: spec.shift_per_frame,
            root_key: spec.root_key.clone(),
            list_key: spec.list_key.clone(),
            gradients: set
                .gradients()
                .iter()
                .map(|g| Gradient::new(g.normalize().stops().to_vec()))
                .collect(),
        }
    }

    /// Rebuild the generation request this record describes.
    ///
    /// Keeps at most [`MAX_GRADIENTS`] gradients; fails with
    /// `EmptyGradientSet` when the record carries none.
    pub fn into_parts(self) -> HexshiftResult<(GradientSet, AnimationSpec)> {
        let mut gradients = self.gradients;
        gradients.truncate(MAX_GRADIENTS);
        let set = GradientSet::new(gradients)?;
        let spec = AnimationSpec {
            text: self.text,
            frames: self.frames,
            mode: self.shift_mode,
            shift_per_frame: self.shift_per_frame,
            interval_ms: self.interval,
            root_key: self.root_key,
            list_key: self.list_key,
        };
        Ok((set, spec))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preset/record.rs"]
mod tests;
