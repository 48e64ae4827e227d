//! Login page: email + password, plus a one-click demo account.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::components::error_banner::ErrorBanner;
use crate::config::{DEMO_EMAIL, DEMO_PASSWORD};
use crate::net::types::Credentials;
use crate::state::session::Session;
use crate::util::guard::install_pending_navigation;
use crate::util::validation::{FieldErrors, validate_credentials};

fn sign_in(store: AppSession, credentials: Credentials, busy: RwSignal<bool>, go_to: RwSignal<Option<String>>) {
    busy.set(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if store.login(&credentials).await {
            go_to.set(Some("/".to_owned()));
        }
        busy.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (store, credentials, go_to);
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<AppSession>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);
    let go_to = RwSignal::new(None::<String>);
    install_pending_navigation(go_to, use_navigate());
    {
        let store = store.clone();
        on_cleanup(move || store.clear_error());
    }

    let edited = {
        let store = store.clone();
        move |field: &'static str| {
            errors.update(|e| e.clear_field(field));
            store.clear_error();
        }
    };

    let on_submit = {
        let store = store.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            match validate_credentials(&email.get(), &password.get()) {
                Ok(credentials) => sign_in(store.clone(), credentials, busy, go_to),
                Err(field_errors) => errors.set(field_errors),
            }
        }
    };

    let dismiss = {
        let store = store.clone();
        Callback::new(move |_: ()| store.clear_error())
    };

    let on_demo = move |_| {
        if busy.get() {
            return;
        }
        email.set(DEMO_EMAIL.to_owned());
        password.set(DEMO_PASSWORD.to_owned());
        errors.set(FieldErrors::default());
        let credentials = Credentials { email: DEMO_EMAIL.to_owned(), password: DEMO_PASSWORD.to_owned() };
        sign_in(store.clone(), credentials, busy, go_to);
    };

    let field_error = move |field: &'static str| {
        move || errors.with(|e| e.get(field)).map(|msg| view! { <span class="field__error">{msg}</span> })
    };

    let on_email = {
        let edited = edited.clone();
        move |ev| {
            email.set(event_target_value(&ev));
            edited("email");
        }
    };
    let on_password = move |ev| {
        password.set(event_target_value(&ev));
        edited("password");
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <ErrorBanner message=Signal::derive(move || session.with(|s| s.error.clone())) on_dismiss=dismiss/>
                <button class="btn btn--secondary auth-card__demo" type="button" on:click=on_demo disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Login with Demo Account" }}
                </button>
                <div class="auth-card__divider">"or"</div>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input
                            class="field__input"
                            type="email"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=on_email
                        />
                        {field_error("email")}
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="field__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=on_password
                        />
                        {field_error("password")}
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <p class="auth-card__hint">
                    "Demo credentials: " <code>{DEMO_EMAIL}</code> " / " <code>{DEMO_PASSWORD}</code>
                </p>
                <p class="auth-card__switch">"No account yet? " <a href="/register">"Register"</a></p>
            </div>
        </div>
    }
}
