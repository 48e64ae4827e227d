//! Top bar: brand link, city search box, theme toggle, and session menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The search box is the only writer of the shared `SearchBridge`. Each
//! keystroke reschedules one debounced fetch; the home page renders whatever
//! the bridge accepts.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::config::SEARCH_DEBOUNCE;
use crate::net::api::HttpApi;
use crate::state::search::{SearchBridge, SearchInput, SearchTicket};
use crate::state::session::Session;
use crate::util::debounce::{Debounce, Debouncer};
use crate::util::guard::install_pending_navigation;
use crate::util::theme::{self, Theme};

/// Fire a debounced search if `ticket` is still the latest keystroke.
fn run_search(search: RwSignal<SearchBridge>, api: HttpApi, ticket: SearchTicket) {
    let Some(query) = search.try_update(|s| s.fire(&ticket)).flatten() else {
        return;
    };
    leptos::task::spawn_local(async move {
        match api.list_hospitals(Some(&query)).await {
            Ok(results) => search.update(|s| {
                if !s.resolve(&ticket, results) {
                    leptos::logging::log!("search results for {:?} dropped", ticket.query);
                }
            }),
            Err(e) => {
                leptos::logging::warn!("search for {:?} failed: {e}", ticket.query);
                search.update(|s| s.fail(&ticket));
            }
        }
    });
}

/// Route one search-box outcome to the debouncer. A new ticket replaces the
/// pending timer, a cleared box cancels it, and an unchanged query leaves it
/// running.
pub fn dispatch_search_input<D: Debounce>(
    input: SearchInput,
    debouncer: &mut D,
    fire: impl FnOnce(SearchTicket) + 'static,
) {
    match input {
        SearchInput::Schedule(ticket) => debouncer.schedule(move || fire(ticket)),
        SearchInput::Cleared => debouncer.cancel(),
        SearchInput::Unchanged => {}
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<AppSession>();
    let search = expect_context::<RwSignal<SearchBridge>>();
    let go_to = RwSignal::new(None::<String>);
    install_pending_navigation(go_to, use_navigate());

    let debouncer = Rc::new(RefCell::new(Debouncer::new(SEARCH_DEBOUNCE)));
    let api = store.api().clone();
    let on_search = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let Some(input) = search.try_update(|s| s.input(&value)) else {
            debouncer.borrow_mut().cancel();
            return;
        };
        let api = api.clone();
        dispatch_search_input(input, &mut *debouncer.borrow_mut(), move |ticket| {
            run_search(search, api, ticket)
        });
    };

    // Server render is always light; the stored or system choice lands on hydrate.
    let scheme = RwSignal::new(Theme::Light);
    Effect::new(move || {
        let loaded = theme::load();
        theme::apply(loaded);
        scheme.set(loaded);
    });
    let on_theme = move |_| scheme.set(theme::toggle(scheme.get_untracked()));

    let logout = Callback::new(move |_: ()| {
        store.logout();
        go_to.set(Some("/".to_owned()));
    });

    let initial = move || {
        session.with(|s| s.user.as_ref().map(|u| u.initial().to_string()).unwrap_or_default())
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">"Hospital Management"</a>
            <input
                class="navbar__search"
                type="search"
                placeholder="Search hospitals by city..."
                prop:value=move || search.with(|s| s.state.query.clone())
                on:input=on_search
            />
            <Show when=move || search.with(SearchBridge::is_busy)>
                <span class="navbar__searching" aria-label="Searching"></span>
            </Show>
            <span class="navbar__spacer"></span>
            <button
                class="btn navbar__theme"
                type="button"
                title=move || scheme.get().toggle_label()
                aria-label=move || scheme.get().toggle_label()
                on:click=on_theme
            >
                {move || if scheme.get() == Theme::Dark { "☀" } else { "☾" }}
            </button>
            <Show
                when=move || session.with(Session::is_authenticated)
                fallback=|| {
                    view! {
                        <nav class="navbar__auth">
                            <a class="btn" href="/login">"Login"</a>
                            <a class="btn btn--outline" href="/register">"Register"</a>
                        </nav>
                    }
                }
            >
                <nav class="navbar__auth">
                    <a class="navbar__avatar" href="/profile" title="Profile">{initial}</a>
                    <button class="btn" on:click=move |_| logout.run(())>"Logout"</button>
                </nav>
            </Show>
        </header>
    }
}
