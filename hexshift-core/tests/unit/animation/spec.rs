use super::*;
use serde_json::json;

#[test]
fn mode_parses_canonical_names() {
    assert_eq!("wrap".parse::<ShiftMode>().unwrap(), ShiftMode::Wrap);
    assert_eq!("pingpong".parse::<ShiftMode>().unwrap(), ShiftMode::PingPong);
}

#[test]
fn mode_rejects_anything_else() {
    for bad in ["Wrap", "PINGPONG", "bounce", ""] {
        assert!(
            matches!(
                bad.parse::<ShiftMode>(),
                Err(HexshiftError::InvalidShiftMode(_))
            ),
            "expected InvalidShiftMode for {bad:?}"
        );
    }
}

#[test]
fn mode_display_round_trips() {
    for mode in [ShiftMode::Wrap, ShiftMode::PingPong] {
        assert_eq!(mode.to_string().parse::<ShiftMode>().unwrap(), mode);
    }
}

#[test]
fn mode_serde_uses_lowercase_strings() {
    assert_eq!(
        serde_json::to_value(ShiftMode::PingPong).unwrap(),
        json!("pingpong")
    );
    let back: ShiftMode = serde_json::from_value(json!("wrap")).unwrap();
    assert_eq!(back, ShiftMode::Wrap);
    assert!(serde_json::from_value::<ShiftMode>(json!("diagonal")).is_err());
}

#[test]
fn default_spec_matches_front_end_defaults() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.text, "");
    assert_eq!(spec.frames, 48);
    assert_eq!(spec.mode, ShiftMode::Wrap);
    assert_eq!(spec.shift_per_frame, None);
    assert_eq!(spec.interval_ms, 200);
    assert_eq!(spec.root_key, "web");
    assert_eq!(spec.list_key, "texts");
}

#[test]
fn validate_rejects_zero_frames() {
    let spec = AnimationSpec {
        frames: 0,
        ..AnimationSpec::default()
    };
    assert!(matches!(
        spec.validate(),
        Err(HexshiftError::InvalidFrameCount)
    ));

    let one = AnimationSpec {
        frames: 1,
        ..AnimationSpec::default()
    };
    assert!(one.validate().is_ok());
}

#[test]
fn resolved_shift_defaults_to_one_character_step() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.resolved_shift(4), 0.25);
    assert_eq!(spec.resolved_shift(0), 0.0);

    let explicit = AnimationSpec {
        shift_per_frame: Some(0.125),
        ..AnimationSpec::default()
    };
    assert_eq!(explicit.resolved_shift(4), 0.125);
}
