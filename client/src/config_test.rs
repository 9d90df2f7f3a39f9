use super::*;

#[test]
fn missing_override_uses_default() {
    assert_eq!(resolve_endpoint(None), "/api/Candidate");
}

#[test]
fn blank_override_uses_default() {
    assert_eq!(resolve_endpoint(Some("  ")), DEFAULT_CANDIDATE_API);
}

#[test]
fn override_is_trimmed() {
    assert_eq!(resolve_endpoint(Some(" https://api.test/Candidate ")), "https://api.test/Candidate");
}

#[test]
fn redirect_delay_is_one_and_a_half_seconds() {
    assert_eq!(REDIRECT_DELAY.as_millis(), 1500);
}
