//! Hospital detail page with edit and delete actions for signed-in users.
//!
//! ERROR HANDLING
//! ==============
//! A missing hospital renders inline with a way back, not as a route-level
//! 404. Delete failures keep the user on the page with the server's message.

#[cfg(test)]
#[path = "hospital_detail_test.rs"]
mod hospital_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::app::AppSession;
use crate::components::error_banner::NoticeBanner;
use crate::net::types::Hospital;
use crate::state::hospitals::{FetchSeq, Load, Notice};
use crate::state::session::Session;
use crate::util::guard::install_pending_navigation;

pub fn hospital_path(id: &str) -> String {
    format!("/hospitals/{id}")
}

pub fn edit_path(id: &str) -> String {
    format!("/hospitals/{id}/edit")
}

/// Label/value rows for the facts panel. Unknown counts are omitted.
pub fn detail_facts(hospital: &Hospital) -> Vec<(&'static str, String)> {
    let mut facts = vec![("City", hospital.city.clone()), ("Rating", format!("{} / 5", hospital.rating))];
    if let Some(n) = hospital.number_of_doctors {
        facts.push(("Doctors", n.to_string()));
    }
    if let Some(n) = hospital.number_of_departments {
        facts.push(("Departments", n.to_string()));
    }
    facts
}

/// Fetch `id` into `detail`. A response that arrives after a newer fetch
/// started (the route moved on) is dropped.
fn load_detail(store: &AppSession, id: String, detail: RwSignal<Load<Hospital>>, fetches: RwSignal<FetchSeq>) {
    let Some(tag) = fetches.try_update(FetchSeq::begin) else {
        return;
    };
    detail.set(Load::Loading);
    let api = store.api().clone();
    leptos::task::spawn_local(async move {
        let result = api.fetch_hospital(&id).await;
        if !fetches.with_untracked(|f| f.is_current(tag)) {
            leptos::logging::log!("hospital {id} fetch superseded; result dropped");
            return;
        }
        detail.set(crate::state::hospitals::detail_load(result));
    });
}

fn delete_and_leave(
    store: &AppSession,
    id: String,
    notice: RwSignal<Option<Notice>>,
    deleting: RwSignal<bool>,
    go_to: RwSignal<Option<String>>,
) {
    let Some(token) = store.token() else {
        notice.set(Some(Notice::Error(crate::state::hospitals::DELETE_FAILED_MESSAGE.to_owned())));
        deleting.set(false);
        return;
    };
    let api = store.api().clone();
    leptos::task::spawn_local(async move {
        let result = api.delete_hospital(&token, &id).await;
        if let Err(e) = &result {
            leptos::logging::warn!("delete hospital {id} failed: {e}");
        }
        notice.set(Some(crate::state::hospitals::delete_notice(&result)));
        if result.is_err() {
            deleting.set(false);
        } else {
            #[cfg(feature = "hydrate")]
            gloo_timers::future::sleep(crate::config::DELETE_REDIRECT_DELAY).await;
            go_to.set(Some("/".to_owned()));
        }
    });
}

fn hospital_view(hospital: Hospital) -> impl IntoView {
    let facts = detail_facts(&hospital)
        .into_iter()
        .map(|(label, value)| {
            view! {
                <div class="detail__fact">
                    <dt>{label}</dt>
                    <dd>{value}</dd>
                </div>
            }
        })
        .collect_view();
    let chips = hospital
        .speciality
        .iter()
        .map(|spec| view! { <span class="chip chip--filled">{spec.clone()}</span> })
        .collect_view();
    let description = hospital.description.clone().filter(|d| !d.trim().is_empty()).map(|text| {
        view! {
            <section class="detail__section">
                <h2>"About"</h2>
                <p>{text}</p>
            </section>
        }
    });
    let gallery = (!hospital.images.is_empty()).then(|| {
        let images = hospital
            .images
            .iter()
            .map(|src| view! { <img class="detail__gallery-image" src=src.clone() alt=""/> })
            .collect_view();
        view! {
            <section class="detail__section">
                <h2>"Gallery"</h2>
                <div class="detail__gallery">{images}</div>
            </section>
        }
    });

    view! {
        <article class="detail">
            <img class="detail__cover" src=hospital.image.clone() alt=hospital.name.clone()/>
            <h1 class="detail__name">{hospital.name.clone()}</h1>
            <dl class="detail__facts">{facts}</dl>
            <section class="detail__section">
                <h2>"Specialities"</h2>
                <div class="detail__chips">{chips}</div>
            </section>
            {description}
            {gallery}
        </article>
    }
}

#[component]
pub fn HospitalDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<AppSession>();
    let params = use_params_map();
    let detail = RwSignal::new(Load::<Hospital>::Loading);
    let fetches = RwSignal::new(FetchSeq::default());
    let notice = RwSignal::new(None::<Notice>);
    let confirming = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let go_to = RwSignal::new(None::<String>);
    install_pending_navigation(go_to, use_navigate());

    let hospital_id = move || params.read().get("id").unwrap_or_default();

    // The component is reused across `/hospitals/:id` changes.
    {
        let store = store.clone();
        Effect::new(move || {
            let id = hospital_id();
            notice.set(None);
            load_detail(&store, id, detail, fetches);
        });
    }

    let on_delete = Callback::new(move |_: ()| {
        confirming.set(false);
        deleting.set(true);
        delete_and_leave(&store, hospital_id(), notice, deleting, go_to);
    });

    let actions = move || {
        let id = hospital_id();
        session.with(Session::is_authenticated).then(|| {
            view! {
                <div class="detail__actions">
                    <a class="btn btn--primary" href=edit_path(&id)>"Edit"</a>
                    <button
                        class="btn btn--danger"
                        disabled=move || deleting.get()
                        on:click=move |_| confirming.set(true)
                    >
                        "Delete"
                    </button>
                </div>
            }
        })
    };

    view! {
        <div class="detail-page">
            <NoticeBanner notice=notice/>
            {move || match detail.get() {
                Load::Loading => view! {
                    <div class="page-status">
                        <span class="spinner" aria-label="Loading"></span>
                    </div>
                }
                .into_any(),
                Load::Ready(hospital) => view! {
                    {hospital_view(hospital)}
                    {actions}
                }
                .into_any(),
                other => {
                    let message = other.error_message().unwrap_or_default().to_owned();
                    view! {
                        <div class="page-status">
                            <p class="alert alert--error">{message}</p>
                            <a class="btn" href="/">"Back to Home"</a>
                        </div>
                    }
                    .into_any()
                }
            }}
            <Show when=move || confirming.get()>
                <div class="dialog" role="dialog" aria-modal="true">
                    <div class="dialog__body">
                        <h2>"Confirm Delete"</h2>
                        <p>"Are you sure you want to delete this hospital? This action cannot be undone."</p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| confirming.set(false)>"Cancel"</button>
                            <button class="btn btn--danger" on:click=move |_| on_delete.run(())>"Delete"</button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
