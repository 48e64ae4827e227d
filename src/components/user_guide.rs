//! Getting-started panel shown on the home page to visitors who are not
//! logged in.

use leptos::prelude::*;

use crate::config::{DEMO_EMAIL, DEMO_PASSWORD};

const STEPS: [(&str, &str); 4] = [
    ("Browse", "Every hospital in the directory is listed below, no account needed."),
    ("Search", "Type a city in the search bar to narrow the list as you type."),
    ("Sign in", "Log in or register to edit and delete hospital listings."),
    ("Administer", "Administrators can add new hospitals from the sidebar."),
];

#[component]
pub fn UserGuide() -> impl IntoView {
    view! {
        <section class="guide">
            <h2 class="guide__title">"Getting Started"</h2>
            <ol class="guide__steps">
                {STEPS
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <li>
                                <strong>{*title}</strong>
                                <p>{*body}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
            <p class="guide__demo">
                "Demo account: " <code>{DEMO_EMAIL}</code> " / " <code>{DEMO_PASSWORD}</code>
            </p>
        </section>
    }
}
