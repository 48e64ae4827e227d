//! Account registration page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::components::error_banner::ErrorBanner;
use crate::state::session::Session;
use crate::util::guard::install_pending_navigation;
use crate::util::validation::{FieldErrors, validate_registration};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<AppSession>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);
    let go_to = RwSignal::new(None::<String>);
    install_pending_navigation(go_to, use_navigate());
    {
        let store = store.clone();
        on_cleanup(move || store.clear_error());
    }

    let on_submit = {
        let store = store.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let request = match validate_registration(&name.get(), &email.get(), &password.get(), &confirm.get()) {
                Ok(request) => request,
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                }
            };
            busy.set(true);

            #[cfg(feature = "hydrate")]
            {
                let store = store.clone();
                leptos::task::spawn_local(async move {
                    if store.register(&request).await {
                        go_to.set(Some("/".to_owned()));
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&store, request);
        }
    };

    let dismiss = {
        let store = store.clone();
        Callback::new(move |_: ()| store.clear_error())
    };

    // One input row: label, bound signal, error key.
    let field = move |label: &'static str, kind: &'static str, key: &'static str, value: RwSignal<String>| {
        let store = store.clone();
        view! {
            <label class="field">
                <span class="field__label">{label}</span>
                <input
                    class="field__input"
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        value.set(event_target_value(&ev));
                        errors.update(|e| e.clear_field(key));
                        store.clear_error();
                    }
                />
                {move || errors.with(|e| e.get(key)).map(|msg| view! { <span class="field__error">{msg}</span> })}
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Register"</h1>
                <ErrorBanner message=Signal::derive(move || session.with(|s| s.error.clone())) on_dismiss=dismiss/>
                <form class="auth-form" on:submit=on_submit novalidate>
                    {field("Name", "text", "name", name)}
                    {field("Email", "email", "email", email)}
                    {field("Password", "password", "password", password)}
                    {field("Confirm password", "password", "confirm", confirm)}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__switch">"Already registered? " <a href="/login">"Login"</a></p>
            </div>
        </div>
    }
}
