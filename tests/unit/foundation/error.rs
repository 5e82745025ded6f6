use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FramerError::device_not_found("x")
            .to_string()
            .contains("device not found:")
    );
    assert!(
        FramerError::graphics("x")
            .to_string()
            .contains("graphics error:")
    );
    assert!(
        FramerError::asset("x")
            .to_string()
            .contains("frame asset error:")
    );
    assert!(
        FramerError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn orientation_not_supported_names_both_sides() {
    let msg = FramerError::orientation_not_supported("iPhone 12", "standard").to_string();
    assert_eq!(msg, "orientation 'standard' is not supported for 'iPhone 12'");
}

#[test]
fn exit_codes_are_distinct_per_abort_kind() {
    let codes = [
        FramerError::device_not_found("x").exit_code(),
        FramerError::orientation_not_supported("d", "o").exit_code(),
        FramerError::graphics("x").exit_code(),
        FramerError::asset("x").exit_code(),
    ];
    for (i, a) in codes.iter().enumerate() {
        assert_ne!(*a, 0);
        for b in &codes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FramerError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert_eq!(err.exit_code(), 1);
}
