use super::*;

fn hospital(id: &str) -> Hospital {
    Hospital {
        id: id.to_owned(),
        name: "Sunrise".into(),
        city: "Nagpur".into(),
        image: String::new(),
        speciality: vec!["Eye".into()],
        rating: 3.0,
        description: None,
        images: vec![],
        number_of_doctors: None,
        number_of_departments: None,
    }
}

#[test]
fn load_defaults_to_loading() {
    let load: Load<Hospital> = Load::default();
    assert!(load.is_loading());
    assert!(load.error_message().is_none());
}

#[test]
fn listing_failure_uses_generic_message() {
    let load = listing_load(Err(ApiError::Network("offline".into())));
    assert_eq!(load.error_message(), Some(LISTING_FAILED_MESSAGE));
}

#[test]
fn detail_not_found_is_distinct_from_failure() {
    assert_eq!(detail_load(Err(ApiError::NotFound(String::new()))), Load::NotFound);
    assert_eq!(
        detail_load(Err(ApiError::Server { status: 500, message: "boom".into() })).error_message(),
        Some(DETAIL_FAILED_MESSAGE)
    );
    assert_eq!(Load::<Hospital>::NotFound.error_message(), Some(NOT_FOUND_MESSAGE));
}

#[test]
fn detail_success_is_ready() {
    let load = detail_load(Ok(hospital("h1")));
    assert_eq!(load.ready().map(|h| h.id.as_str()), Some("h1"));
}

#[test]
fn heading_reflects_active_search() {
    let idle = SearchState::default();
    assert_eq!(listing_heading(&idle), "Available Hospitals");

    let searching = SearchState {
        query: "Pun".into(),
        results: Some(vec![hospital("h1")]),
        results_query: Some("Pune".into()),
    };
    assert_eq!(listing_heading(&searching), "Search Results for \"Pune\"");
}

#[test]
fn summary_pluralizes() {
    assert_eq!(result_summary(0), "No hospitals found. Try a different city.");
    assert_eq!(result_summary(1), "Found 1 hospital");
    assert_eq!(result_summary(3), "Found 3 hospitals");
}

#[test]
fn delete_notice_prefers_server_message() {
    assert_eq!(delete_notice(&Ok(())), Notice::Success(DELETE_SUCCESS_MESSAGE.into()));
    let denied = delete_notice(&Err(ApiError::Auth("Not authorized to delete".into())));
    assert_eq!(denied.message(), "Not authorized to delete");
    assert_eq!(denied.css_class(), "notice notice--error");
    let offline = delete_notice(&Err(ApiError::Network("offline".into())));
    assert_eq!(offline.message(), DELETE_FAILED_MESSAGE);
}

#[test]
fn only_latest_fetch_is_current() {
    let mut fetches = FetchSeq::default();
    let first = fetches.begin();
    assert!(fetches.is_current(first));

    let second = fetches.begin();
    assert!(!fetches.is_current(first));
    assert!(fetches.is_current(second));
}

#[test]
fn stale_detail_does_not_overwrite_newer_route() {
    // /hospitals/a starts, then the route moves to /hospitals/b; a answers last.
    let mut fetches = FetchSeq::default();
    let mut detail = Load::<Hospital>::Loading;
    let for_a = fetches.begin();
    let for_b = fetches.begin();

    if fetches.is_current(for_b) {
        detail = detail_load(Ok(hospital("b")));
    }
    if fetches.is_current(for_a) {
        detail = detail_load(Err(ApiError::NotFound("gone".into())));
    }
    assert_eq!(detail.ready().map(|h| h.id.as_str()), Some("b"));
}
