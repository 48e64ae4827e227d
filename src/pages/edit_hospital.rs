//! Edit page for an existing hospital.
//!
//! Saving is two requests: the full record is replaced first, then the
//! detail fields are posted separately. The second request is only sent if
//! the first one succeeded.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::app::AppSession;
use crate::components::error_banner::ErrorBanner;
use crate::components::guarded::Guarded;
use crate::components::hospital_form::HospitalForm;
use crate::net::api::HttpApi;
use crate::net::error::ApiError;
use crate::net::types::{Hospital, HospitalDetailsInput, HospitalInput};
use crate::pages::hospital_detail::hospital_path;
use crate::state::hospitals::{FetchSeq, Load, UPDATE_FAILED_MESSAGE, detail_load};
use crate::util::guard::{DenyAction, RouteGuard, install_pending_navigation};
use crate::util::validation::HospitalDraft;

pub const EDIT_HOSPITAL_GUARD: RouteGuard =
    RouteGuard::authenticated(DenyAction::Message("You must be logged in to edit a hospital."));

async fn save_hospital(api: &HttpApi, token: &str, id: &str, input: &HospitalInput) -> Result<(), ApiError> {
    api.update_hospital(token, id, input).await?;
    api.update_hospital_details(token, &HospitalDetailsInput::new(id, input)).await
}

#[component]
fn EditHospitalForm() -> impl IntoView {
    let store = expect_context::<AppSession>();
    let params = use_params_map();
    let detail = RwSignal::new(Load::<Hospital>::Loading);
    let fetches = RwSignal::new(FetchSeq::default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let go_to = RwSignal::new(None::<String>);
    install_pending_navigation(go_to, use_navigate());

    let hospital_id = move || params.read().get("id").unwrap_or_default();

    {
        let api = store.api().clone();
        Effect::new(move || {
            let id = hospital_id();
            let api = api.clone();
            let Some(tag) = fetches.try_update(FetchSeq::begin) else {
                return;
            };
            detail.set(Load::Loading);
            leptos::task::spawn_local(async move {
                let result = api.fetch_hospital(&id).await;
                // Stale once the route has moved to another id.
                if fetches.with_untracked(|f| f.is_current(tag)) {
                    detail.set(detail_load(result));
                }
            });
        });
    }

    let on_submit = Callback::new(move |input: HospitalInput| {
        let Some(token) = store.token() else {
            error.set(Some(UPDATE_FAILED_MESSAGE.to_owned()));
            return;
        };
        let id = hospital_id();
        busy.set(true);
        error.set(None);
        let api = store.api().clone();
        leptos::task::spawn_local(async move {
            match save_hospital(&api, &token, &id, &input).await {
                Ok(()) => go_to.set(Some(hospital_path(&id))),
                Err(e) => {
                    leptos::logging::warn!("update hospital {id} failed: {e}");
                    error.set(Some(e.message_or(UPDATE_FAILED_MESSAGE)));
                    busy.set(false);
                }
            }
        });
    });

    move || match detail.get() {
        Load::Loading => view! {
            <div class="page-status">
                <span class="spinner" aria-label="Loading"></span>
            </div>
        }
        .into_any(),
        Load::Ready(hospital) => {
            let initial = HospitalDraft::from(&HospitalInput::from(&hospital));
            view! {
                <ErrorBanner message=error/>
                <HospitalForm initial submit_label="Update Hospital" busy=busy on_submit/>
            }
            .into_any()
        }
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
    }
}

#[component]
pub fn EditHospitalPage() -> impl IntoView {
    view! {
        <div class="form-page">
            <h1>"Edit Hospital"</h1>
            <Guarded guard=EDIT_HOSPITAL_GUARD>
                <EditHospitalForm/>
            </Guarded>
        </div>
    }
}
