//! Side navigation. Entries are shown only when their page's guard permits.

use leptos::prelude::*;

use crate::pages::create_hospital::CREATE_HOSPITAL_GUARD;
use crate::pages::profile::PROFILE_GUARD;
use crate::state::session::Session;
use crate::util::guard::RouteGuard;

struct NavItem {
    label: &'static str,
    path: &'static str,
    guard: RouteGuard,
}

const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Home", path: "/", guard: RouteGuard::PUBLIC },
    NavItem { label: "Find Hospitals", path: "/", guard: RouteGuard::PUBLIC },
    NavItem { label: "Add Hospital", path: "/hospitals/create", guard: CREATE_HOSPITAL_GUARD },
    NavItem { label: "Profile", path: "/profile", guard: PROFILE_GUARD },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let user_block = move || {
        session.with(|s| {
            s.user.as_ref().map(|user| {
                let name = user.name.clone();
                let role = user.role.label();
                let initial = user.initial().to_string();
                view! {
                    <div class="sidebar__user">
                        <span class="sidebar__avatar">{initial}</span>
                        <div>
                            <p class="sidebar__name">{name}</p>
                            <p class="sidebar__role">{role}</p>
                        </div>
                    </div>
                }
            })
        })
    };

    let links = move || {
        let current = session.get();
        NAV_ITEMS
            .iter()
            .filter(|item| item.guard.permits(&current))
            .map(|item| {
                view! {
                    <li>
                        <a class="sidebar__link" href=item.path>{item.label}</a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <aside class="sidebar">
            {user_block}
            <ul class="sidebar__nav">{links}</ul>
        </aside>
    }
}
