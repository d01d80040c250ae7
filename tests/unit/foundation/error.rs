use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FrameboothError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FrameboothError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        FrameboothError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        FrameboothError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FrameboothError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: FrameboothError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, FrameboothError::Serde(_)));
}
