use crate::{FpsType, FrameRate, FrameRateSettings, MarkerError};

fn common(label: &str) -> FrameRateSettings {
    FrameRateSettings {
        fps_type: FpsType::Common,
        common: Some(label.to_string()),
        ..FrameRateSettings::default()
    }
}

/// WHAT: NTSC labels map to exact 1001 fractions
/// WHY: Rounded rates drift against the real recording timeline
#[test]
fn given_ntsc_labels_when_resolving_then_exact_fractions() {
    assert_eq!(FrameRate::resolve(&common("59.94")), FrameRate::new(60_000, 1001));
    assert_eq!(FrameRate::resolve(&common("29.97")), FrameRate::new(30_000, 1001));
    assert_eq!(FrameRate::resolve(&common("23.976")), FrameRate::new(24_000, 1001));
}

/// WHAT: Integral labels map to n/1
/// WHY: Common presets are whole rates
#[test]
fn given_integral_labels_when_resolving_then_over_one() {
    for (label, expected) in [("60", 60), ("30", 30), ("25", 25), ("24", 24)] {
        assert_eq!(FrameRate::resolve(&common(label)), FrameRate::new(expected, 1));
    }
}

/// WHAT: Suffixed host labels map to their own presets
/// WHY: The host stores some presets as "25 PAL" or "24 NTSC"
#[test]
fn given_label_with_suffix_when_looking_up_then_suffixed_preset_used() {
    assert_eq!(FrameRate::from_label("25 PAL"), Some(FrameRate::new(25, 1)));
    assert_eq!(FrameRate::from_label("50 PAL"), Some(FrameRate::new(50, 1)));
    assert_eq!(FrameRate::from_label(" 29.97 "), Some(FrameRate::new(30_000, 1001)));
    assert_eq!(FrameRate::from_label("12.5"), None);
}

/// WHAT: "24 NTSC" is the 23.976 preset
/// WHY: Reading it as 24/1 drifts every exported marker by 0.1%
#[test]
fn given_24_ntsc_label_when_resolving_then_drop_frame_rate() {
    let rate = FrameRate::resolve(&common("24 NTSC"));

    assert_eq!(rate, FrameRate::new(24_000, 1001));
    assert!(rate.is_ntsc());
}

/// WHAT: Unknown suffixes are not matched by their leading number
/// WHY: A guessed rate is worse than the explicit fields
#[test]
fn given_unknown_suffix_when_looking_up_then_none() {
    assert_eq!(FrameRate::from_label("30 NTSC"), None);
}

/// WHAT: Unknown labels fall back to the explicit fields
/// WHY: Custom rates are carried in numerator/denominator
#[test]
fn given_unknown_label_when_resolving_then_explicit_fields_used() {
    let settings = FrameRateSettings {
        numerator: Some(25),
        denominator: Some(2),
        ..common("12.5")
    };

    assert_eq!(FrameRate::resolve(&settings), FrameRate::new(25, 2));
}

/// WHAT: Integer mode uses the integer field
/// WHY: The host's second frame-rate mode stores a whole number
#[test]
fn given_integer_mode_when_resolving_then_over_one() {
    let settings = FrameRateSettings {
        fps_type: FpsType::Integer,
        integer: Some(48),
        ..FrameRateSettings::default()
    };

    assert_eq!(FrameRate::resolve(&settings), FrameRate::new(48, 1));
}

/// WHAT: Zero denominators clamp to 1
/// WHY: Consumers divide by the denominator
#[test]
fn given_zero_denominator_when_resolving_then_clamped_to_one() {
    let settings = FrameRateSettings {
        fps_type: FpsType::Fraction,
        numerator: Some(30),
        denominator: Some(0),
        ..FrameRateSettings::default()
    };

    assert_eq!(FrameRate::resolve(&settings), FrameRate::new(30, 1));
    assert_eq!(FrameRate::new(7, 0).denominator, 1);
}

/// WHAT: Missing numerator is malformed and resolves to 60/1
/// WHY: A broken config must still yield a usable rate
#[test]
fn given_missing_numerator_when_resolving_then_default_rate() {
    let settings = FrameRateSettings {
        fps_type: FpsType::Fraction,
        numerator: None,
        denominator: Some(1001),
        ..FrameRateSettings::default()
    };

    assert!(matches!(
        settings.explicit(),
        Err(MarkerError::MalformedHostConfig { .. })
    ));
    assert_eq!(FrameRate::resolve(&settings), FrameRate::DEFAULT);
    assert_eq!(FrameRate::resolve(&FrameRateSettings::default()), FrameRate::new(60, 1));
}

/// WHAT: Host mode values map to frame-rate types
/// WHY: The host stores the mode as 0, 1 or 2
#[test]
fn given_host_mode_values_when_mapping_then_expected_types() {
    assert_eq!(FpsType::from_host_value(0), FpsType::Common);
    assert_eq!(FpsType::from_host_value(1), FpsType::Integer);
    assert_eq!(FpsType::from_host_value(2), FpsType::Fraction);
}

/// WHAT: Frame math truncates and NTSC timebases round up
/// WHY: Editor markers are placed by frame index
#[test]
fn given_rates_when_converting_ms_then_expected_frames_and_timebase() {
    let ntsc = FrameRate::new(30_000, 1001);
    assert_eq!(ntsc.frames_at(1_000), 29);
    assert_eq!(ntsc.timebase(), 30);
    assert!(ntsc.is_ntsc());

    let pal = FrameRate::new(25, 1);
    assert_eq!(pal.frames_at(2_000), 50);
    assert_eq!(pal.frames_at(39), 0);
    assert_eq!(pal.timebase(), 25);
    assert!(!pal.is_ntsc());
}
