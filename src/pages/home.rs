//! Home page: the hospital listing, replaced by search results while a city
//! search is active.
//!
//! SYSTEM CONTEXT
//! ==============
//! The unfiltered listing is fetched once per mount. Search results arrive
//! through the shared `SearchBridge`, which only accepts them while this page
//! is marked active.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::error_banner::ErrorBanner;
use crate::components::hospital_card::HospitalGrid;
use crate::components::user_guide::UserGuide;
use crate::net::types::Hospital;
use crate::state::hospitals::{Load, listing_heading, result_summary};
use crate::state::search::SearchBridge;
use crate::state::session::Session;

fn load_listing(store: &AppSession, listing: RwSignal<Load<Vec<Hospital>>>) {
    #[cfg(feature = "hydrate")]
    {
        let api = store.api().clone();
        leptos::task::spawn_local(async move {
            let result = api.list_hospitals(None).await;
            listing.set(crate::state::hospitals::listing_load(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (store, listing);
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<AppSession>();
    let search = expect_context::<RwSignal<SearchBridge>>();
    let listing = RwSignal::new(Load::<Vec<Hospital>>::Loading);

    search.update(|s| s.set_listing_active(true));
    on_cleanup(move || search.update(|s| s.set_listing_active(false)));
    load_listing(&store, listing);

    // Search results win over the listing whenever a search is active.
    let shown = Memo::new(move |_| {
        search
            .with(|s| s.state.results.clone())
            .map(Load::Ready)
            .unwrap_or_else(|| listing.get())
    });

    let heading = move || search.with(|s| listing_heading(&s.state));
    let summary = move || shown.with(|load| load.ready().map(|hospitals| result_summary(hospitals.len())));

    view! {
        <div class="home-page">
            <Show when=move || session.with(|s| !s.loading && !s.is_authenticated())>
                <UserGuide/>
            </Show>
            <h1 class="home-page__heading">{heading}</h1>
            <p class="home-page__summary">{summary}</p>
            {move || match shown.get() {
                Load::Loading => view! {
                    <div class="page-status">
                        <span class="spinner"></span>
                        <p>"Loading hospitals..."</p>
                    </div>
                }
                .into_any(),
                Load::Ready(hospitals) => view! { <HospitalGrid hospitals/> }.into_any(),
                other => {
                    let message = other.error_message().map(str::to_owned);
                    view! { <ErrorBanner message=Signal::derive(move || message.clone())/> }.into_any()
                }
            }}
        </div>
    }
}
