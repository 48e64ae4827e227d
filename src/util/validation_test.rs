use super::*;

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_shape_accepts_plain_addresses() {
    assert!(is_valid_email("vikash@gmail.com"));
    assert!(is_valid_email("a.b@c.d.e"));
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    for bad in ["", "plain", "@x.io", "a@", "a@io", "a@.io", "a@io.", "a b@c.io", "a@b@c.io"] {
        assert!(!is_valid_email(bad), "{bad:?} should be rejected");
    }
}

// =============================================================
// Login
// =============================================================

#[test]
fn credentials_pass_and_trim_email() {
    let creds = validate_credentials(" vikash@gmail.com ", "vikash123").unwrap();
    assert_eq!(creds.email, "vikash@gmail.com");
    assert_eq!(creds.password, "vikash123");
}

#[test]
fn credentials_report_each_field() {
    let errors = validate_credentials("", "").unwrap_err();
    assert_eq!(errors.get("email"), Some("Email is required"));
    assert_eq!(errors.get("password"), Some("Password is required"));

    let errors = validate_credentials("nope", "12345").unwrap_err();
    assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
    assert_eq!(errors.get("password"), Some("Password must be at least 6 characters"));
}

#[test]
fn password_length_counts_characters_not_bytes() {
    assert!(validate_credentials("a@b.co", "ééééé").is_err());
    assert!(validate_credentials("a@b.co", "éééééé").is_ok());
}

#[test]
fn clear_field_drops_only_that_message() {
    let mut errors = validate_credentials("", "").unwrap_err();
    errors.clear_field("email");
    assert_eq!(errors.get("email"), None);
    assert_eq!(errors.len(), 1);
}

// =============================================================
// Register
// =============================================================

#[test]
fn registration_requires_name_and_matching_confirmation() {
    let errors = validate_registration("  ", "a@b.co", "secret1", "secret2").unwrap_err();
    assert_eq!(errors.get("name"), Some("Name is required"));
    assert_eq!(errors.get("confirm"), Some("Passwords do not match"));
    assert_eq!(errors.get("email"), None);
}

#[test]
fn registration_builds_request() {
    let request = validate_registration(" Asha ", "asha@x.io", "secret1", "secret1").unwrap();
    assert_eq!(request.name, "Asha");
    assert_eq!(request.email, "asha@x.io");
}

// =============================================================
// Hospital
// =============================================================

fn draft() -> HospitalDraft {
    HospitalDraft {
        name: " Ruby Hall ".into(),
        city: "Pune".into(),
        image: "https://img/ruby.png".into(),
        speciality: vec!["Heart".into(), "Eye".into()],
        rating: 4,
        description: "Multi-speciality".into(),
        images: "https://img/1.png, ,https://img/2.png ".into(),
        number_of_doctors: "120".into(),
        number_of_departments: String::new(),
    }
}

#[test]
fn hospital_draft_converts_to_input() {
    let input = validate_hospital(&draft()).unwrap();
    assert_eq!(input.name, "Ruby Hall");
    assert_eq!(input.images, vec!["https://img/1.png".to_owned(), "https://img/2.png".to_owned()]);
    assert_eq!(input.number_of_doctors, 120);
    assert_eq!(input.number_of_departments, 0);
}

#[test]
fn hospital_draft_flags_missing_required_fields() {
    let errors = validate_hospital(&HospitalDraft::default()).unwrap_err();
    assert_eq!(errors.get("name"), Some("Name is required"));
    assert_eq!(errors.get("city"), Some("City is required"));
    assert_eq!(errors.get("image"), Some("Image URL is required"));
    assert_eq!(errors.get("speciality"), Some("Select at least one speciality"));
    assert_eq!(errors.get("rating"), None);
}

#[test]
fn hospital_draft_rejects_bad_rating_and_counts() {
    let bad = HospitalDraft { rating: 6, number_of_doctors: "ten".into(), number_of_departments: "-1".into(), ..draft() };
    let errors = validate_hospital(&bad).unwrap_err();
    assert_eq!(errors.get("rating"), Some("Rating must be between 1 and 5"));
    assert!(errors.get("numberOfDoctors").is_some());
    assert!(errors.get("numberOfDepartments").is_some());
}

#[test]
fn draft_from_input_joins_images_and_blanks_zero_counts() {
    let input = validate_hospital(&draft()).unwrap();
    let back = HospitalDraft::from(&input);
    assert_eq!(back.images, "https://img/1.png, https://img/2.png");
    assert_eq!(back.number_of_doctors, "120");
    assert_eq!(back.number_of_departments, "");
}
