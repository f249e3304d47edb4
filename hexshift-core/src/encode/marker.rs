use crate::animation::frames::{Frame, FrameCell};
use crate::foundation::color::Rgb;

/// Two-character control marker preceding each `RRGGBB` color run.
pub const COLOR_MARKER: &str = "&#";

/// Encode a frame as marker runs: `&#RRGGBB` then the character, one run per
/// cell, no separators.
pub fn encode_frame(frame: &Frame) -> String {
    let mut out = String::with_capacity(frame.cells.len() * 9);
    for cell in &frame.cells {
        out.push_str(COLOR_MARKER);
        out.push_str(&cell.color.to_hex());
        out.push(cell.ch);
    }
    out
}

/// Decode a marker-encoded frame, leniently.
///
/// A well-formed run (`&#`, six hex digits, one character) becomes one cell.
/// Anything else is consumed one character at a time as a white-colored
/// literal cell, so arbitrary input never fails.
pub fn decode_frame(encoded: &str) -> Frame {
    let chars: Vec<char> = encoded.chars().collect();
    let mut cells = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '&' && i + 8 < chars.len() && chars[i + 1] == '#' {
            let run: String = chars[i + 2..i + 8].iter().collect();
            if run.chars().all(|c| c.is_ascii_hexdigit())
                && let Ok(color) = Rgb::from_hex(&run)
            {
                cells.push(FrameCell {
                    ch: chars[i + 8],
                    color,
                });
                i += 9;
                continue;
            }
        }
        cells.push(FrameCell {
            ch: chars[i],
            color: Rgb::WHITE,
        });
        i += 1;
    }

    Frame { cells }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/marker.rs"]
mod tests;
