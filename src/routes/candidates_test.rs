use super::*;

#[test]
fn upstream_status_is_passed_through() {
    let err = CandidateError::Status { status: 422, message: "Email taken".to_owned() };
    assert_eq!(candidate_error_to_status(&err), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(candidate_error_message(&err), "Email taken");
}

#[test]
fn invalid_upstream_status_becomes_bad_gateway() {
    let err = CandidateError::Status { status: 42, message: "odd".to_owned() };
    assert_eq!(candidate_error_to_status(&err), StatusCode::BAD_GATEWAY);
}

#[test]
fn transport_failures_map_to_gateway_errors() {
    assert_eq!(
        candidate_error_to_status(&CandidateError::Unreachable("refused".to_owned())),
        StatusCode::GATEWAY_TIMEOUT
    );
    assert_eq!(candidate_error_to_status(&CandidateError::Parse("eof".to_owned())), StatusCode::BAD_GATEWAY);
    assert_eq!(
        candidate_error_to_status(&CandidateError::ClientBuild("tls".to_owned())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn error_response_carries_status() {
    let response = CandidateError::Status { status: 404, message: "gone".to_owned() }.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
