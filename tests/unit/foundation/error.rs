use super::*;

fn sample_errors() -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    errors.push("bg", "must be 6 hex digits");
    errors.push("dob", "must be a YYYY-MM-DD date");
    errors
}

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LifeGridError::Validation(sample_errors())
            .to_string()
            .starts_with("validation error: bg: must be 6 hex digits; dob:")
    );
    assert!(
        LifeGridError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LifeGridError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn validation_maps_to_400_with_every_issue() {
    let err = LifeGridError::from(sample_errors());
    assert_eq!(err.status_code(), 400);

    let body: serde_json::Value = serde_json::from_str(&err.response_body()).unwrap();
    assert_eq!(body["error"], "Validation Error");
    let issues = body["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0]["field"], "bg");
    assert_eq!(issues[1]["field"], "dob");
}

#[test]
fn internal_failures_do_not_leak_details() {
    let err = LifeGridError::render("pixmap allocation failed at 0x1234");
    assert_eq!(err.status_code(), 500);
    let body = err.response_body();
    assert!(body.contains("Internal Server Error"));
    assert!(!body.contains("pixmap"));
}
