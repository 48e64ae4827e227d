//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::config::ApiConfig;
use crate::net::api::HttpApi;
use crate::pages::{
    create_hospital::CreateHospitalPage, edit_hospital::EditHospitalPage, home::HomePage,
    hospital_detail::HospitalDetailPage, login::LoginPage, not_found::NotFoundPage, profile::ProfilePage,
    register::RegisterPage,
};
use crate::state::search::SearchBridge;
use crate::state::session::{Session, SessionStore};
use crate::util::storage::BrowserTokenStorage;

/// Session store as provided through context.
pub type AppSession = SessionStore<HttpApi, BrowserTokenStorage, RwSignal<Session>>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the single session, starts rehydration in the browser, and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    let store: AppSession = SessionStore::new(HttpApi::new(ApiConfig::from_env()), BrowserTokenStorage, session);
    let search = RwSignal::new(SearchBridge::default());

    provide_context(session);
    provide_context(store.clone());
    provide_context(search);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        store.rehydrate().await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = store;

    view! {
        <Stylesheet id="leptos" href="/pkg/hospital-admin.css"/>
        <Title text="Hospital Management System"/>

        <Router>
            <Navbar/>
            <div class="layout">
                <Sidebar/>
                <main class="layout__content">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route
                            path=(StaticSegment("hospitals"), StaticSegment("create"))
                            view=CreateHospitalPage
                        />
                        <Route
                            path=(StaticSegment("hospitals"), ParamSegment("id"), StaticSegment("edit"))
                            view=EditHospitalPage
                        />
                        <Route path=(StaticSegment("hospitals"), ParamSegment("id")) view=HospitalDetailPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
