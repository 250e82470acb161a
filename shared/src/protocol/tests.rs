use super::*;
use crate::{Timestamp, UserStatus};

fn sample_user_json() -> &'static str {
    r#"{
        "id": "u1",
        "firstName": "Ayesha",
        "lastName": "Khan",
        "email": "ayesha@example.com",
        "userType": "artist",
        "status": "active",
        "city": "Lahore"
    }"#
}

#[test]
fn user_profile_deserializes_camel_case() {
    let user: UserProfile = serde_json::from_str(sample_user_json()).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.user_type, UserType::Artist);
    assert_eq!(user.status, UserStatus::Active);
    assert_eq!(user.full_name(), "Ayesha Khan");
    assert_eq!(user.city.as_deref(), Some("Lahore"));
    // Optional fields absent from the payload stay None.
    assert_eq!(user.phone, None);
}

#[test]
fn envelope_optional_fields_default() {
    let body = format!(
        r#"{{ "success": true, "data": {{ "user": {} }} }}"#,
        sample_user_json()
    );
    let resp: ApiResponse<SessionData> = serde_json::from_str(&body).unwrap();
    assert!(resp.success);
    assert_eq!(resp.message, None);
    assert_eq!(resp.token, None);
    assert_eq!(resp.data.user.email, "ayesha@example.com");
}

#[test]
fn login_envelope_carries_token() {
    let body = format!(
        r#"{{ "success": true, "token": "tok123", "data": {{ "user": {} }} }}"#,
        sample_user_json()
    );
    let resp: ApiResponse<SessionData> = serde_json::from_str(&body).unwrap();
    assert_eq!(resp.token.as_deref(), Some("tok123"));
}

#[test]
fn booking_status_wire_names() {
    assert_eq!(
        serde_json::to_string(&BookingStatus::InProgress).unwrap(),
        r#""in_progress""#
    );
    let status: BookingStatus = serde_json::from_str(r#""cancelled""#).unwrap();
    assert_eq!(status, BookingStatus::Cancelled);
    assert!(!status.is_cancellable());
    assert!(BookingStatus::Confirmed.is_cancellable());
}

#[test]
fn timestamp_is_transparent_millis() {
    let ts: Timestamp = serde_json::from_str("1767139200000").unwrap();
    assert_eq!(ts.as_millis(), 1_767_139_200_000);
    assert_eq!(serde_json::to_string(&ts).unwrap(), "1767139200000");
    // 2025-12-31T00:00:00Z
    assert_eq!(ts.format_date(), "31 Dec 2025");
}

#[test]
fn timestamp_parses_date_input_values() {
    let ts = Timestamp::parse_ymd("2026-03-14").expect("valid date");
    assert_eq!(ts.format_date(), "14 Mar 2026");
    assert!(Timestamp::parse_ymd("14/03/2026").is_none());
    assert!(Timestamp::parse_ymd("").is_none());
}

#[test]
fn update_profile_skips_unset_fields() {
    let req = UpdateProfileRequest {
        city: Some("Karachi".to_string()),
        ..Default::default()
    };
    assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"city":"Karachi"}"#);
}
