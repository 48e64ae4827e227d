use super::*;

#[test]
fn user_accepts_mongo_id_and_role() {
    let user: User = serde_json::from_str(
        r#"{"_id":"u1","name":"vikash","email":"vikash@gmail.com","role":"admin"}"#,
    )
    .unwrap();
    assert_eq!(user.id, "u1");
    assert!(user.is_admin());
    assert_eq!(user.role.label(), "Administrator");
}

#[test]
fn user_role_defaults_to_user_and_tolerates_unknown_values() {
    let missing: User = serde_json::from_str(r#"{"id":"u2","name":"a","email":"a@b.co"}"#).unwrap();
    assert_eq!(missing.role, Role::User);

    let odd: User =
        serde_json::from_str(r#"{"id":"u3","name":"a","email":"a@b.co","role":"auditor"}"#).unwrap();
    assert!(!odd.is_admin());
    assert_eq!(odd.role.label(), "User");
}

#[test]
fn user_initial_uppercases_first_letter() {
    let user = User { id: "u".into(), name: "maya".into(), email: String::new(), role: Role::User };
    assert_eq!(user.initial(), 'M');
    let unnamed = User { name: String::new(), ..user };
    assert_eq!(unnamed.initial(), 'U');
}

#[test]
fn auth_payload_splits_token_from_user_fields() {
    let payload: AuthPayload = serde_json::from_str(
        r#"{"token":"t-123","_id":"u1","name":"N","email":"n@x.io","role":"user"}"#,
    )
    .unwrap();
    assert_eq!(payload.token, "t-123");
    assert_eq!(payload.user.email, "n@x.io");
}

#[test]
fn hospital_optional_details_default_when_absent() {
    let hospital: Hospital = serde_json::from_str(
        r#"{"_id":"h1","name":"City Care","city":"Pune","image":"https://img/1.png","speciality":["Heart"],"rating":4.5}"#,
    )
    .unwrap();
    assert_eq!(hospital.id, "h1");
    assert!(hospital.description.is_none());
    assert!(hospital.images.is_empty());
    assert_eq!(hospital.number_of_doctors, None);
}

#[test]
fn hospital_reads_camel_case_counters() {
    let hospital: Hospital = serde_json::from_str(
        r#"{"_id":"h1","name":"A","city":"B","image":"i","rating":3,"numberOfDoctors":12,"numberOfDepartments":4}"#,
    )
    .unwrap();
    assert_eq!(hospital.number_of_doctors, Some(12));
    assert_eq!(hospital.number_of_departments, Some(4));
}

#[test]
fn hospital_input_from_hospital_clamps_rating_and_fills_defaults() {
    let hospital = Hospital {
        id: "h1".into(),
        name: "A".into(),
        city: "B".into(),
        image: "i".into(),
        speciality: vec!["Eye".into()],
        rating: 4.6,
        description: None,
        images: vec![],
        number_of_doctors: None,
        number_of_departments: Some(3),
    };
    let input = HospitalInput::from(&hospital);
    assert_eq!(input.rating, 5);
    assert_eq!(input.description, "");
    assert_eq!(input.number_of_doctors, 0);
    assert_eq!(input.number_of_departments, 3);
}

#[test]
fn hospital_input_serializes_camel_case() {
    let input = HospitalInput { number_of_doctors: 7, ..HospitalInput::default() };
    let json = serde_json::to_value(&input).unwrap();
    assert_eq!(json["numberOfDoctors"], 7);
    assert!(json.get("number_of_doctors").is_none());
}

#[test]
fn details_input_copies_detail_fields() {
    let input = HospitalInput {
        description: "desc".into(),
        images: vec!["a".into()],
        number_of_doctors: 2,
        number_of_departments: 1,
        ..HospitalInput::default()
    };
    let details = HospitalDetailsInput::new("h9", &input);
    assert_eq!(details.id, "h9");
    assert_eq!(details.description, "desc");
    assert_eq!(details.images, vec!["a".to_owned()]);
}

#[test]
fn envelope_tolerates_missing_data_and_error() {
    let env: ApiEnvelope<Vec<Hospital>> = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(env.success);
    assert!(env.data.is_none());
    assert!(env.error.is_none());
}
