use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page-status not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you are looking for does not exist or has been moved."</p>
            <a class="btn btn--primary" href="/">"Go to Home"</a>
        </div>
    }
}
