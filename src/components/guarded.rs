//! Wrapper that renders a page only when its `RouteGuard` allows it.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::guard::{GuardDecision, RouteGuard, install_guard_redirect};

#[component]
pub fn Guarded(guard: RouteGuard, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    install_guard_redirect(guard, session, use_navigate());

    let decision = Memo::new(move |_| session.with(|s| guard.decide(s)));

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Loading => view! {
            <div class="page-status">
                <span class="spinner" aria-label="Loading"></span>
            </div>
        }
        .into_any(),
        GuardDecision::Redirect(_) => view! { <div class="page-status">"Redirecting..."</div> }.into_any(),
        GuardDecision::Unauthorized(message) => view! {
            <div class="page-status">
                <p class="alert alert--error">{message}</p>
                <a class="btn" href="/login">"Log in"</a>
            </div>
        }
        .into_any(),
    }
}
