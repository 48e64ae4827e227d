//! Hospital summary card and the responsive grid of cards.

#[cfg(test)]
#[path = "hospital_card_test.rs"]
mod hospital_card_test;

use leptos::prelude::*;

use crate::net::types::Hospital;

/// Specialities shown on a card before collapsing the rest.
pub const CARD_SPECIALITY_LIMIT: usize = 3;

/// Cover image, or a generated stock photo when the listing has none.
pub fn card_image(hospital: &Hospital) -> String {
    if hospital.image.trim().is_empty() {
        format!(
            "https://source.unsplash.com/random/400x200/?hospital,medical,healthcare&sig={}",
            hospital.id
        )
    } else {
        hospital.image.clone()
    }
}

/// First few specialities plus a "+N more" chip label for the remainder.
pub fn speciality_preview(specialities: &[String]) -> (&[String], Option<String>) {
    if specialities.len() <= CARD_SPECIALITY_LIMIT {
        return (specialities, None);
    }
    let hidden = specialities.len() - CARD_SPECIALITY_LIMIT;
    (&specialities[..CARD_SPECIALITY_LIMIT], Some(format!("+{hidden} more")))
}

pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 { format!("{rating:.0}") } else { format!("{rating:.1}") }
}

#[component]
pub fn HospitalCard(hospital: Hospital) -> impl IntoView {
    let href = format!("/hospitals/{}", hospital.id);
    let image = card_image(&hospital);
    let rating = format_rating(hospital.rating);
    let (shown, more) = speciality_preview(&hospital.speciality);
    let chips = shown
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let class = if i % 2 == 0 { "chip chip--outlined" } else { "chip chip--filled" };
            view! { <span class=class>{spec.clone()}</span> }
        })
        .collect_view();
    let more = more.map(|label| view! { <span class="chip chip--outlined">{label}</span> });

    view! {
        <a class="hospital-card" href=href>
            <div class="hospital-card__media">
                <img src=image alt=hospital.name.clone()/>
                <span class="hospital-card__rating">"★ " {rating}</span>
            </div>
            <div class="hospital-card__body">
                <h3 class="hospital-card__name">{hospital.name}</h3>
                <p class="hospital-card__city">{hospital.city}</p>
                <p class="hospital-card__label">"Specialties:"</p>
                <div class="hospital-card__chips">{chips} {more}</div>
            </div>
        </a>
    }
}

#[component]
pub fn HospitalGrid(hospitals: Vec<Hospital>) -> impl IntoView {
    if hospitals.is_empty() {
        return view! {
            <div class="empty-state">
                <h3>"No hospitals found"</h3>
                <p>
                    "We couldn't find any hospitals matching your search criteria. "
                    "Try adjusting your search or explore other cities."
                </p>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="hospital-grid">
            {hospitals
                .into_iter()
                .map(|hospital| view! { <HospitalCard hospital/> })
                .collect_view()}
        </div>
    }
    .into_any()
}
