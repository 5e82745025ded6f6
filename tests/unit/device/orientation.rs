use super::*;

#[test]
fn names_parse_back_to_the_same_orientation() {
    for o in DeviceOrientation::ALL {
        assert_eq!(o.as_str().parse::<DeviceOrientation>().unwrap(), o);
        assert_eq!(o.to_string(), o.as_str());
    }
    assert_eq!(
        "Landscape-Left".parse::<DeviceOrientation>().unwrap(),
        DeviceOrientation::LandscapeLeft
    );
}

#[test]
fn unknown_name_is_a_validation_error() {
    let err = "sideways".parse::<DeviceOrientation>().unwrap_err();
    assert!(matches!(err, FramerError::Validation(_)));
    assert!(err.to_string().contains("landscape-right"));
}

#[test]
fn landscape_variants_are_opposite_quarter_turns() {
    let l = DeviceOrientation::LandscapeLeft.quarter_turns();
    let r = DeviceOrientation::LandscapeRight.quarter_turns();
    assert_eq!((l + r) % 4, 0);
    assert_eq!(DeviceOrientation::UpsideDown.quarter_turns(), 2);
    assert_eq!(DeviceOrientation::Standard.quarter_turns(), 0);
}

#[test]
fn indices_are_dense() {
    for (i, o) in DeviceOrientation::ALL.into_iter().enumerate() {
        assert_eq!(o.index(), i);
    }
}

#[test]
fn serde_uses_kebab_case() {
    let json = serde_json::to_string(&DeviceOrientation::LandscapeLeft).unwrap();
    assert_eq!(json, "\"landscape-left\"");
}
