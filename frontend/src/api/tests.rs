use super::*;
use mehndihub_shared::SessionData;

// ---- 错误归一化 ----

#[test]
fn validation_errors_are_concatenated() {
    let err = decode_response::<Ack>(
        400,
        "Bad Request",
        r#"{"errors":[{"msg":"a"},{"msg":"b"}]}"#,
    )
    .unwrap_err();
    assert_eq!(err, "Validation errors: a, b");
}

#[test]
fn validation_errors_accept_message_field_spelling() {
    let err = decode_response::<Ack>(
        422,
        "Unprocessable Entity",
        r#"{"errors":[{"message":"Email is required"}]}"#,
    )
    .unwrap_err();
    assert_eq!(err, "Validation errors: Email is required");
}

#[test]
fn backend_message_wins_when_no_error_list() {
    let err = decode_response::<Ack>(403, "Forbidden", r#"{"message":"X"}"#).unwrap_err();
    assert_eq!(err, "X");
}

#[test]
fn empty_error_list_falls_back_to_message() {
    let err =
        decode_response::<Ack>(400, "Bad Request", r#"{"errors":[],"message":"nope"}"#).unwrap_err();
    assert_eq!(err, "nope");
}

#[test]
fn bare_failure_uses_status_line() {
    let err = decode_response::<Ack>(502, "Bad Gateway", r#"{}"#).unwrap_err();
    assert_eq!(err, "Server error: 502 Bad Gateway");
}

#[test]
fn non_json_body_is_invalid_response() {
    let err = decode_response::<Ack>(500, "Internal Server Error", "<html>boom</html>").unwrap_err();
    assert_eq!(err, "Server returned invalid response: 500 Internal Server Error");

    // 2xx 的非 JSON 响应同样无效
    let err = decode_response::<Ack>(200, "OK", "").unwrap_err();
    assert_eq!(err, "Server returned invalid response: 200 OK");
}

#[test]
fn success_envelope_decodes() {
    let body = r#"{
        "success": true,
        "token": "tok123",
        "data": { "user": {
            "id": "1",
            "firstName": "Mina",
            "lastName": "Raza",
            "email": "mina@example.com",
            "userType": "client"
        }}
    }"#;
    let resp = decode_response::<SessionData>(200, "OK", body).unwrap();
    assert!(resp.success);
    assert_eq!(resp.token.as_deref(), Some("tok123"));
    assert_eq!(resp.data.user.id, "1");
}

#[test]
fn success_envelope_with_wrong_shape_is_invalid() {
    let err = decode_response::<SessionData>(200, "OK", r#"{"success":true}"#).unwrap_err();
    assert_eq!(err, "Server returned invalid response: 200 OK");
}

// ---- 请求头构造 ----

#[test]
fn bearer_header_present_only_with_token() {
    let headers = request_headers(Some("tok123"));
    assert!(headers.contains(&("Content-Type", "application/json".to_string())));
    assert!(headers.contains(&("Authorization", "Bearer tok123".to_string())));

    // 无令牌时完全省略 Authorization，而不是发送 "Bearer null"
    let headers = request_headers(None);
    assert_eq!(headers, vec![("Content-Type", "application/json".to_string())]);
}

// ---- URL 拼接 ----

#[test]
fn base_url_is_normalized() {
    let api = ApiClient::with_base_url("https://api.example.com/api/");
    assert_eq!(api.url("/bookings"), "https://api.example.com/api/bookings");
    assert_eq!(api.url("bookings"), "https://api.example.com/api/bookings");
}
