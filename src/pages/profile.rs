//! Read-only profile of the signed-in user.

use leptos::prelude::*;

use crate::components::guarded::Guarded;
use crate::state::session::Session;
use crate::util::guard::{DenyAction, RouteGuard};

pub const PROFILE_GUARD: RouteGuard = RouteGuard::authenticated(DenyAction::Redirect("/login"));

#[component]
fn ProfileCard() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    move || {
        session.with(|s| {
            s.user.as_ref().map(|user| {
                let initial = user.initial().to_string();
                let name = user.name.clone();
                let email = user.email.clone();
                let role = user.role.label();
                let admin = user.is_admin();
                view! {
                    <div class="profile-card">
                        <span class="profile-card__avatar">{initial}</span>
                        <h2 class="profile-card__name">{name.clone()}</h2>
                        {admin.then(|| view! { <span class="chip chip--filled">"Admin"</span> })}
                        <dl class="profile-card__facts">
                            <div>
                                <dt>"Full Name"</dt>
                                <dd>{name}</dd>
                            </div>
                            <div>
                                <dt>"Email"</dt>
                                <dd>{email}</dd>
                            </div>
                            <div>
                                <dt>"Role"</dt>
                                <dd>{role}</dd>
                            </div>
                        </dl>
                    </div>
                }
            })
        })
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <div class="profile-page">
            <h1>"My Profile"</h1>
            <Guarded guard=PROFILE_GUARD>
                <ProfileCard/>
            </Guarded>
        </div>
    }
}
