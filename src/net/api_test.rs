use super::*;

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[test]
fn hospital_query_omits_blank_values() {
    assert!(hospital_query(None, None).is_empty());
    assert!(hospital_query(Some("   "), None).is_empty());
}

#[test]
fn hospital_query_trims_city_and_keeps_id() {
    assert_eq!(hospital_query(Some("  Pune "), None), vec![("city", "Pune")]);
    assert_eq!(hospital_query(None, Some("h1")), vec![("id", "h1")]);
}

#[test]
fn http_api_keeps_configured_base_url() {
    let api = HttpApi::new(ApiConfig::new("http://api.test/v1"));
    assert_eq!(api.config().url(AUTH_ME_PATH), "http://api.test/v1/auth/me");
    assert_eq!(api.config().url(HOSPITAL_DELETE_PATH), "http://api.test/v1/hospitals/delete");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_calls_report_network_error() {
    let api = HttpApi::new(ApiConfig::new("http://api.test/v1"));
    let err = futures::executor::block_on(api.list_hospitals(Some("Pune"))).unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    let err = futures::executor::block_on(api.current_user("t")).unwrap_err();
    assert_eq!(err.message_or("fallback"), "fallback");
}
