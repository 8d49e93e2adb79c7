use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SatError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SatError::decode("x").to_string().contains("decode error:"));
    assert!(SatError::encode("x").to_string().contains("encode error:"));
    assert!(SatError::render("x").to_string().contains("render error:"));
}

#[test]
fn only_validation_reports_as_validation() {
    assert!(SatError::validation("x").is_validation());
    assert!(!SatError::decode("x").is_validation());
    assert!(!SatError::encode("x").is_validation());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SatError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
