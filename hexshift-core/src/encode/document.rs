use crate::animation::frames::generate_frames;
use crate::animation::spec::AnimationSpec;
use crate::encode::marker::encode_frame;
use crate::foundation::error::HexshiftResult;
use crate::gradient::set::GradientSet;

/// Serialize encoded frames into the final `change-interval` document.
///
/// The byte shape is a wire contract:
///
/// ```text
/// {root_key}:
///   change-interval: {interval_ms}
///   {list_key}:
///   - '{frame}'
/// ```
///
/// Each frame is wrapped in single quotes with embedded quotes doubled; keys
/// are emitted verbatim; the document ends with a newline.
pub fn yaml_document(
    frames: &[String],
    interval_ms: u32,
    root_key: &str,
    list_key: &str,
) -> String {
    let mut out = String::new();
    out.push_str(root_key);
    out.push_str(":\n");
    out.push_str(&format!("  change-interval: {interval_ms}\n"));
    out.push_str(&format!("  {list_key}:\n"));
    for frame in frames {
        let escaped = frame.replace('\'', "''");
        out.push_str(&format!("  - '{escaped}'\n"));
    }
    out
}

/// Generate, encode, and serialize in one call.
///
/// The one-shot equivalent of [`generate_frames`] + [`encode_frame`] +
/// [`yaml_document`], using the interval and keys carried by `spec`.
pub fn generate_document(set: &GradientSet, spec: &AnimationSpec) -> HexshiftResult<String> {
    let frames = generate_frames(set, spec)?;
    let encoded: Vec<String> = frames.iter().map(encode_frame).collect();
    Ok(yaml_document(
        &encoded,
        spec.interval_ms,
        &spec.root_key,
        &spec.list_key,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/document.rs"]
mod tests;
