//! Admin-only page for adding a hospital listing.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::components::error_banner::ErrorBanner;
use crate::components::guarded::Guarded;
use crate::components::hospital_form::HospitalForm;
use crate::net::types::HospitalInput;
use crate::pages::hospital_detail::hospital_path;
use crate::state::hospitals::CREATE_FAILED_MESSAGE;
use crate::util::guard::{DenyAction, RouteGuard, install_pending_navigation};
use crate::util::validation::HospitalDraft;

pub const CREATE_HOSPITAL_GUARD: RouteGuard = RouteGuard::admin(DenyAction::Redirect("/"));

#[component]
fn CreateHospitalForm() -> impl IntoView {
    let store = expect_context::<AppSession>();
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let go_to = RwSignal::new(None::<String>);
    install_pending_navigation(go_to, use_navigate());

    let on_submit = Callback::new(move |input: HospitalInput| {
        let Some(token) = store.token() else {
            error.set(Some(CREATE_FAILED_MESSAGE.to_owned()));
            return;
        };
        busy.set(true);
        error.set(None);
        let api = store.api().clone();
        leptos::task::spawn_local(async move {
            match api.create_hospital(&token, &input).await {
                Ok(hospital) => go_to.set(Some(hospital_path(&hospital.id))),
                Err(e) => {
                    leptos::logging::warn!("create hospital failed: {e}");
                    error.set(Some(e.message_or(CREATE_FAILED_MESSAGE)));
                    busy.set(false);
                }
            }
        });
    });

    view! {
        <ErrorBanner message=error/>
        <HospitalForm initial=HospitalDraft::default() submit_label="Create Hospital" busy=busy on_submit/>
    }
}

#[component]
pub fn CreateHospitalPage() -> impl IntoView {
    view! {
        <div class="form-page">
            <h1>"Add New Hospital"</h1>
            <Guarded guard=CREATE_HOSPITAL_GUARD>
                <CreateHospitalForm/>
            </Guarded>
        </div>
    }
}
