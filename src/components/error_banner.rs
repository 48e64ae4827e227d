//! Inline alerts for page-level errors and mutation notices.

use leptos::prelude::*;

use crate::state::hospitals::Notice;

/// Red alert box; renders nothing while `message` is `None`. With
/// `on_dismiss` it gets a close button.
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            let close = on_dismiss.map(|dismiss| {
                view! {
                    <button class="alert__close" type="button" aria-label="Dismiss" on:click=move |_| dismiss.run(())>
                        "×"
                    </button>
                }
            });
            view! {
                <div class="alert alert--error" role="alert">
                    <span>{text}</span>
                    {close}
                </div>
            }
        })
    }
}

#[component]
pub fn NoticeBanner(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let class = n.css_class();
            let text = n.message().to_owned();
            view! { <div class=class role="status">{text}</div> }
        })
    }
}
