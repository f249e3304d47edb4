use super::*;

fn frame(cells: &[(char, Rgb)]) -> Frame {
    Frame {
        cells: cells
            .iter()
            .map(|&(ch, color)| FrameCell { ch, color })
            .collect(),
    }
}

#[test]
fn encode_emits_marker_runs_without_separators() {
    let f = frame(&[('a', Rgb::new(0, 0, 0)), ('b', Rgb::WHITE)]);
    assert_eq!(encode_frame(&f), "&#000000a&#FFFFFFb");
}

#[test]
fn encode_of_an_empty_frame_is_empty() {
    assert_eq!(encode_frame(&Frame::default()), "");
}

#[test]
fn decode_inverts_encode_including_unicode() {
    let f = frame(&[
        ('«', Rgb::new(0x3B, 0x28, 0xCC)),
        ('♥', Rgb::new(0x63, 0xA2, 0xF8)),
        ('»', Rgb::new(0x71, 0xAA, 0xF6)),
    ]);
    assert_eq!(decode_frame(&encode_frame(&f)), f);
}

#[test]
fn decode_treats_plain_text_as_white_literals() {
    let decoded = decode_frame("ab");
    assert_eq!(decoded, frame(&[('a', Rgb::WHITE), ('b', Rgb::WHITE)]));
}

#[test]
fn decode_keeps_malformed_runs_as_literal_characters() {
    // Six characters follow the marker, but 'G' is not a hex digit.
    let decoded = decode_frame("&#00GG00x");
    assert_eq!(decoded.cells.len(), 9);
    assert!(decoded.cells.iter().all(|c| c.color == Rgb::WHITE));

    // Run truncated by the end of input.
    let decoded = decode_frame("&#00FF0");
    assert_eq!(decoded.cells.len(), 7);
    assert!(decoded.cells.iter().all(|c| c.color == Rgb::WHITE));
}

#[test]
fn decode_resumes_after_a_literal_ampersand() {
    let decoded = decode_frame("&&#00FF00y");
    assert_eq!(
        decoded,
        frame(&[('&', Rgb::WHITE), ('y', Rgb::new(0, 255, 0))])
    );
}
