//! Create/edit form for a hospital listing.
//!
//! The form owns its draft and field errors; the page owns the request. A
//! submit that fails validation never reaches `on_submit`.

use leptos::prelude::*;

use crate::net::types::HospitalInput;
use crate::util::validation::{FieldErrors, HospitalDraft, SPECIALITIES, validate_hospital};

type Getter = fn(&HospitalDraft) -> String;
type Setter = fn(&mut HospitalDraft, String);

fn text_field(
    label: &'static str,
    field: &'static str,
    kind: &'static str,
    draft: RwSignal<HospitalDraft>,
    errors: RwSignal<FieldErrors>,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=kind
                prop:value=move || draft.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| set(d, value));
                    errors.update(|e| e.clear_field(field));
                }
            />
            {move || errors.with(|e| e.get(field)).map(|msg| view! { <span class="field__error">{msg}</span> })}
        </label>
    }
}

#[component]
pub fn HospitalForm(
    initial: HospitalDraft,
    submit_label: &'static str,
    #[prop(into)] busy: Signal<bool>,
    on_submit: Callback<HospitalInput>,
) -> impl IntoView {
    let draft = RwSignal::new(initial);
    let errors = RwSignal::new(FieldErrors::default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        match draft.with_untracked(validate_hospital) {
            Ok(input) => {
                errors.set(FieldErrors::default());
                on_submit.run(input);
            }
            Err(field_errors) => errors.set(field_errors),
        }
    };

    let toggle_speciality = move |spec: &'static str, checked: bool| {
        draft.update(|d| {
            d.speciality.retain(|s| s != spec);
            if checked {
                d.speciality.push(spec.to_owned());
            }
        });
        errors.update(|e| e.clear_field("speciality"));
    };

    view! {
        <form class="hospital-form" on:submit=submit novalidate>
            {text_field("Name", "name", "text", draft, errors, |d| d.name.clone(), |d, v| d.name = v)}
            {text_field("City", "city", "text", draft, errors, |d| d.city.clone(), |d, v| d.city = v)}
            {text_field("Image URL", "image", "url", draft, errors, |d| d.image.clone(), |d, v| d.image = v)}

            <fieldset class="field">
                <legend class="field__label">"Specialities"</legend>
                <div class="field__checks">
                    {SPECIALITIES
                        .iter()
                        .map(|&spec| {
                            view! {
                                <label class="check">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || draft.with(|d| d.speciality.iter().any(|s| s == spec))
                                        on:change=move |ev| toggle_speciality(spec, event_target_checked(&ev))
                                    />
                                    {spec}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
                {move || {
                    errors.with(|e| e.get("speciality")).map(|msg| view! { <span class="field__error">{msg}</span> })
                }}
            </fieldset>

            <label class="field">
                <span class="field__label">"Rating"</span>
                <select
                    class="field__input"
                    prop:value=move || draft.with(|d| d.rating.to_string())
                    on:change=move |ev| {
                        if let Ok(rating) = event_target_value(&ev).parse::<u8>() {
                            draft.update(|d| d.rating = rating);
                            errors.update(|e| e.clear_field("rating"));
                        }
                    }
                >
                    {(1..=5u8).map(|n| view! { <option value=n.to_string()>{n}</option> }).collect_view()}
                </select>
                {move || errors.with(|e| e.get("rating")).map(|msg| view! { <span class="field__error">{msg}</span> })}
            </label>

            <label class="field">
                <span class="field__label">"Description"</span>
                <textarea
                    class="field__input"
                    rows="4"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
            </label>

            {text_field(
                "Additional images (comma-separated URLs)",
                "images",
                "text",
                draft,
                errors,
                |d| d.images.clone(),
                |d, v| d.images = v,
            )}
            {text_field(
                "Number of doctors",
                "numberOfDoctors",
                "number",
                draft,
                errors,
                |d| d.number_of_doctors.clone(),
                |d, v| d.number_of_doctors = v,
            )}
            {text_field(
                "Number of departments",
                "numberOfDepartments",
                "number",
                draft,
                errors,
                |d| d.number_of_departments.clone(),
                |d, v| d.number_of_departments = v,
            )}

            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { submit_label }}
            </button>
        </form>
    }
}
