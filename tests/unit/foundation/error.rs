use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ReelError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ReelError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        ReelError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn timing_errors_name_their_input() {
    let err = ReelError::malformed_timing("abc");
    assert!(err.to_string().contains("'abc'"));

    let err = ReelError::InvalidSceneDuration {
        scene_index: 2,
        timing: "5-3".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("scene 2"));
    assert!(msg.contains("5-3"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ReelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
