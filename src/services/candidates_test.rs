use super::*;

#[test]
fn seed_matches_sample_candidates() {
    let seed = seed_candidates();
    assert_eq!(seed.len(), 7);
    assert_eq!(seed[0].name, "Roy Rohmat");
    assert_eq!(seed[0].phone_number, "08917652341");
    assert_eq!(seed.iter().filter(|c| c.position == "BackEnd").count(), 3);
}

#[test]
fn next_id_is_one_past_max() {
    let mut seed = seed_candidates();
    assert_eq!(next_id(&seed), 8);
    seed.retain(|c| c.id != 3);
    assert_eq!(next_id(&seed), 8);
    assert_eq!(next_id(&[]), 1);
}

#[test]
fn candidate_serializes_camel_case() {
    let value = serde_json::to_value(&seed_candidates()[1]).unwrap();
    assert_eq!(value["id"], 2);
    assert_eq!(value["phoneNumber"], "08889975432");
    assert!(value.get("phone_number").is_none());
}

#[test]
fn parse_list_accepts_string_ids_and_nulls() {
    let text = r#"[{"id":"12","name":"Rina","position":null,"phoneNumber":"0812","email":"r@x.id"}]"#;
    let list = parse_list(text).unwrap();
    assert_eq!(list[0].id, 12);
    assert_eq!(list[0].position, "");
}

#[test]
fn parse_list_rejects_non_array() {
    let err = parse_list(r#"{"message":"nope"}"#).unwrap_err();
    assert!(matches!(err, CandidateError::Parse(_)));
}

#[test]
fn parse_list_rejects_bad_id() {
    assert!(parse_list(r#"[{"id":"abc","name":"x"}]"#).is_err());
}

#[test]
fn new_candidate_accepts_missing_fields() {
    let input: NewCandidate = serde_json::from_str(r#"{"name":"Only Name"}"#).unwrap();
    assert_eq!(input.name, "Only Name");
    assert_eq!(input.email, "");
}

#[test]
fn upstream_message_prefers_body_message() {
    assert_eq!(upstream_message(r#"{"message":"Email taken"}"#), "Email taken");
    assert_eq!(upstream_message("<html>"), "Unknown error");
    assert_eq!(upstream_message(r#"{"message":"  "}"#), "Unknown error");
}

#[tokio::test]
async fn memory_create_appends_with_next_id() {
    let source = CandidateSource::memory();
    let created = source
        .create(NewCandidate { name: "Sari Dewi".to_owned(), position: "UI/UX".to_owned(), ..NewCandidate::default() })
        .await
        .unwrap();
    assert_eq!(created.id, 8);

    let list = source.list().await.unwrap();
    assert_eq!(list.len(), 8);
    assert_eq!(list.last(), Some(&created));
}

#[tokio::test]
async fn memory_create_does_not_validate() {
    let source = CandidateSource::memory();
    let created = source.create(NewCandidate::default()).await.unwrap();
    assert_eq!(created.name, "");
}

#[tokio::test]
async fn unreachable_upstream_is_classified() {
    let source = CandidateSource::upstream("http://127.0.0.1:9/api/Candidate", Duration::from_millis(500)).unwrap();
    assert_eq!(source.describe(), "upstream http://127.0.0.1:9/api/Candidate");
    let err = source.list().await.unwrap_err();
    assert!(matches!(err, CandidateError::Unreachable(_)));
}

/// Serve one HTTP response on a local port after `delay`.
async fn slow_upstream(delay: Duration, status: &'static str, body: &'static str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0_u8; 4096];
        let _ = socket.read(&mut buf).await;
        tokio::time::sleep(delay).await;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
    });
    format!("http://{addr}/api/Candidate")
}

#[tokio::test]
async fn slow_read_outlasts_write_timeout() {
    let url = slow_upstream(Duration::from_millis(600), "200 OK", r#"[{"id":1,"name":"Roy Rohmat"}]"#).await;
    let source = CandidateSource::upstream(&url, Duration::from_millis(200)).unwrap();
    let list = source.list().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].name, "Roy Rohmat");
}

#[tokio::test]
async fn slow_write_is_cut_off_by_write_timeout() {
    let url = slow_upstream(Duration::from_secs(2), "201 Created", r#"{"id":9,"name":"Late"}"#).await;
    let source = CandidateSource::upstream(&url, Duration::from_millis(200)).unwrap();
    let err = source.create(NewCandidate::default()).await.unwrap_err();
    assert!(matches!(err, CandidateError::Unreachable(_)));
}

#[tokio::test]
async fn upstream_error_status_keeps_its_message() {
    let url = slow_upstream(Duration::ZERO, "422 Unprocessable Entity", r#"{"message":"Email taken"}"#).await;
    let source = CandidateSource::upstream(&url, Duration::from_secs(5)).unwrap();
    let err = source.create(NewCandidate::default()).await.unwrap_err();
    assert!(matches!(err, CandidateError::Status { status: 422, ref message } if message == "Email taken"));
}
