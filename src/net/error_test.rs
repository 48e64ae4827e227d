use super::*;
use crate::net::types::User;

#[test]
fn from_status_classifies_common_codes() {
    assert_eq!(ApiError::from_status(400, Some("bad".into())), ApiError::Validation("bad".into()));
    assert_eq!(ApiError::from_status(401, None), ApiError::Auth(String::new()));
    assert_eq!(ApiError::from_status(403, None), ApiError::Auth(String::new()));
    assert_eq!(ApiError::from_status(404, None), ApiError::NotFound(String::new()));
    assert_eq!(
        ApiError::from_status(502, Some("down".into())),
        ApiError::Server { status: 502, message: "down".into() }
    );
}

#[test]
fn message_or_prefers_server_text() {
    let err = ApiError::Auth("Invalid credentials".into());
    assert_eq!(err.message_or("Login failed."), "Invalid credentials");
}

#[test]
fn message_or_falls_back_on_blank_or_network() {
    assert_eq!(ApiError::Auth("  ".into()).message_or("fallback"), "fallback");
    assert_eq!(ApiError::Network("connection refused".into()).message_or("fallback"), "fallback");
}

#[test]
fn decode_envelope_returns_data_on_success() {
    let user: User = decode_envelope(
        200,
        r#"{"success":true,"data":{"_id":"u1","name":"A","email":"a@b.co","role":"user"}}"#,
    )
    .unwrap();
    assert_eq!(user.id, "u1");
}

#[test]
fn decode_envelope_maps_error_status_with_message() {
    let err = decode_envelope::<User>(401, r#"{"success":false,"error":"Invalid credentials"}"#).unwrap_err();
    assert_eq!(err, ApiError::Auth("Invalid credentials".into()));
}

#[test]
fn decode_envelope_handles_non_json_error_body() {
    let err = decode_envelope::<User>(500, "<html>oops</html>").unwrap_err();
    assert_eq!(err, ApiError::Server { status: 500, message: String::new() });
}

#[test]
fn decode_envelope_extracts_error_when_data_shape_mismatches() {
    let err = decode_envelope::<User>(400, r#"{"success":false,"data":[1,2],"error":"Email taken"}"#).unwrap_err();
    assert_eq!(err, ApiError::Validation("Email taken".into()));
}

#[test]
fn decode_envelope_treats_unsuccessful_2xx_as_server_error() {
    let err = decode_envelope::<User>(200, r#"{"success":false,"error":"nope"}"#).unwrap_err();
    assert_eq!(err, ApiError::Server { status: 200, message: "nope".into() });
}

#[test]
fn decode_envelope_missing_data_is_not_found() {
    let err = decode_envelope::<User>(200, r#"{"success":true,"data":null}"#).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn decode_envelope_malformed_success_body_is_network_error() {
    let err = decode_envelope::<User>(200, "not json").unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[test]
fn decode_ack_accepts_empty_and_dataless_success() {
    assert_eq!(decode_ack(204, ""), Ok(()));
    assert_eq!(decode_ack(200, r#"{"success":true}"#), Ok(()));
    assert_eq!(decode_ack(200, r#"{"success":true,"data":{}}"#), Ok(()));
}

#[test]
fn decode_ack_propagates_failures() {
    let err = decode_ack(401, r#"{"success":false,"error":"Not authorized"}"#).unwrap_err();
    assert_eq!(err.message_or("x"), "Not authorized");
}
