use super::*;
use crate::foundation::error::HexshiftError;

fn solid(hex: &str) -> Gradient {
    Gradient::from_hex_colors(&[hex], None).unwrap()
}

fn frame_colors(frame: &Frame) -> Vec<Rgb> {
    frame.cells.iter().map(|c| c.color).collect()
}

#[test]
fn produces_one_frame_per_index_and_one_cell_per_char() {
    let set = GradientSet::single(solid("#123456"));
    let spec = AnimationSpec {
        text: "hey".to_owned(),
        frames: 5,
        ..AnimationSpec::default()
    };
    let frames = generate_frames(&set, &spec).unwrap();
    assert_eq!(frames.len(), 5);
    for frame in &frames {
        let text: String = frame.cells.iter().map(|c| c.ch).collect();
        assert_eq!(text, "hey");
    }
}

#[test]
fn empty_text_still_yields_every_frame() {
    let set = GradientSet::single(solid("#FFFFFF"));
    let spec = AnimationSpec {
        frames: 4,
        ..AnimationSpec::default()
    };
    let frames = generate_frames(&set, &spec).unwrap();
    assert_eq!(frames.len(), 4);
    assert!(frames.iter().all(|f| f.cells.is_empty()));
}

#[test]
fn zero_frames_is_rejected_before_any_work() {
    let set = GradientSet::single(solid("#FFFFFF"));
    let spec = AnimationSpec {
        text: "hi".to_owned(),
        frames: 0,
        ..AnimationSpec::default()
    };
    assert!(matches!(
        generate_frames(&set, &spec),
        Err(HexshiftError::InvalidFrameCount)
    ));
}

#[test]
fn gradients_cycle_round_robin_across_frames() {
    let set = GradientSet::new(vec![solid("#FF0000"), solid("#0000FF")]).unwrap();
    let spec = AnimationSpec {
        text: "!!".to_owned(),
        frames: 4,
        shift_per_frame: Some(0.0),
        ..AnimationSpec::default()
    };
    let frames = generate_frames(&set, &spec).unwrap();
    let red = Rgb::new(255, 0, 0);
    let blue = Rgb::new(0, 0, 255);
    assert_eq!(frame_colors(&frames[0]), vec![red, red]);
    assert_eq!(frame_colors(&frames[1]), vec![blue, blue]);
    assert_eq!(frame_colors(&frames[2]), vec![red, red]);
    assert_eq!(frame_colors(&frames[3]), vec![blue, blue]);
}

#[test]
fn wrap_slides_the_gradient_and_tiles_at_one() {
    let set =
        GradientSet::single(Gradient::from_hex_colors(&["#000000", "#FFFFFF"], None).unwrap());
    let spec = AnimationSpec {
        text: "abc".to_owned(),
        frames: 2,
        shift_per_frame: Some(0.5),
        ..AnimationSpec::default()
    };
    let frames = generate_frames(&set, &spec).unwrap();

    let black = Rgb::new(0, 0, 0);
    let mid = Rgb::new(128, 128, 128);
    // Characters sit at 0, 0.5 and 1.0; sampling wraps, so 1.0 folds to 0.0.
    assert_eq!(frame_colors(&frames[0]), vec![black, mid, black]);
    // Frame 1 shifts every character by half the axis.
    assert_eq!(frame_colors(&frames[1]), vec![mid, black, mid]);
}

#[test]
fn default_shift_advances_one_character_per_frame() {
    let set =
        GradientSet::single(Gradient::from_hex_colors(&["#000000", "#FFFFFF"], None).unwrap());
    let spec = AnimationSpec {
        text: "abcd".to_owned(),
        frames: 2,
        ..AnimationSpec::default()
    };
    let frames = generate_frames(&set, &spec).unwrap();
    // Four characters derive a shift of 1/4, so frame 1 starts at t = 0.25.
    assert_eq!(frames[1].cells[0].color, Rgb::new(64, 64, 64));
}

#[test]
fn single_character_anchors_at_zero() {
    let set =
        GradientSet::single(Gradient::from_hex_colors(&["#000000", "#FFFFFF"], None).unwrap());
    let spec = AnimationSpec {
        text: "x".to_owned(),
        frames: 1,
        ..AnimationSpec::default()
    };
    let frames = generate_frames(&set, &spec).unwrap();
    assert_eq!(frames[0].cells[0].color, Rgb::new(0, 0, 0));
}

#[test]
fn zero_worker_threads_is_rejected() {
    let set = GradientSet::single(solid("#FFFFFF"));
    let spec = AnimationSpec {
        text: "x".to_owned(),
        frames: 1,
        ..AnimationSpec::default()
    };
    let threading = FrameThreading {
        parallel: true,
        threads: Some(0),
    };
    let err = generate_frames_with(&set, &spec, &threading).unwrap_err();
    assert!(err.to_string().contains("threads"));
}
