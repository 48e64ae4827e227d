use super::*;

fn hospital() -> Hospital {
    Hospital {
        id: "abc".into(),
        name: "Sunrise".into(),
        city: "Delhi".into(),
        image: "https://img/s.png".into(),
        speciality: vec!["Heart".into()],
        rating: 4.5,
        description: None,
        images: vec![],
        number_of_doctors: None,
        number_of_departments: None,
    }
}

#[test]
fn paths_embed_hospital_id() {
    assert_eq!(hospital_path("abc"), "/hospitals/abc");
    assert_eq!(edit_path("abc"), "/hospitals/abc/edit");
}

#[test]
fn detail_facts_omit_unknown_counts() {
    let facts = detail_facts(&hospital());
    assert_eq!(facts, vec![("City", "Delhi".to_owned()), ("Rating", "4.5 / 5".to_owned())]);
}

#[test]
fn detail_facts_include_known_counts() {
    let mut h = hospital();
    h.number_of_doctors = Some(120);
    h.number_of_departments = Some(0);
    let facts = detail_facts(&h);
    assert!(facts.contains(&("Doctors", "120".to_owned())));
    assert!(facts.contains(&("Departments", "0".to_owned())));
}
