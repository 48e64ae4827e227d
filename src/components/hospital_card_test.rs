use super::*;

fn hospital(image: &str) -> Hospital {
    Hospital {
        id: "h1".into(),
        name: "City General".into(),
        city: "Pune".into(),
        image: image.into(),
        speciality: vec![],
        rating: 4.0,
        description: None,
        images: vec![],
        number_of_doctors: None,
        number_of_departments: None,
    }
}

fn specs(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("s{i}")).collect()
}

#[test]
fn card_image_prefers_listing_image() {
    assert_eq!(card_image(&hospital("https://img/x.png")), "https://img/x.png");
}

#[test]
fn card_image_falls_back_to_stock_photo_seeded_by_id() {
    let url = card_image(&hospital("  "));
    assert!(url.starts_with("https://source.unsplash.com/"));
    assert!(url.ends_with("&sig=h1"));
}

#[test]
fn speciality_preview_shows_all_up_to_limit() {
    let all = specs(3);
    let (shown, more) = speciality_preview(&all);
    assert_eq!(shown.len(), 3);
    assert_eq!(more, None);
}

#[test]
fn speciality_preview_collapses_remainder() {
    let all = specs(5);
    let (shown, more) = speciality_preview(&all);
    assert_eq!(shown, &all[..3]);
    assert_eq!(more.as_deref(), Some("+2 more"));
}

#[test]
fn format_rating_drops_trailing_zero() {
    assert_eq!(format_rating(4.0), "4");
    assert_eq!(format_rating(4.5), "4.5");
}
