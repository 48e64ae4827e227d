//! Route guard shared by every protected page and the sidebar, plus the
//! navigation effects pages use to act on its decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page declares one `RouteGuard`: who may see it and what happens when
//! they may not (redirect or inline message). Navigation visibility asks the
//! same guard, so the admin rule lives in one place. While the session is
//! still rehydrating the guard answers `Loading` instead of guessing.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

/// Who may view a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Admin,
}

/// What a denied visitor gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenyAction {
    Redirect(&'static str),
    Message(&'static str),
}

/// Render decision for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Loading,
    Redirect(&'static str),
    Unauthorized(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteGuard {
    pub access: Access,
    pub on_deny: DenyAction,
}

impl RouteGuard {
    pub const PUBLIC: Self = Self { access: Access::Public, on_deny: DenyAction::Redirect("/") };

    pub const fn authenticated(on_deny: DenyAction) -> Self {
        Self { access: Access::Authenticated, on_deny }
    }

    pub const fn admin(on_deny: DenyAction) -> Self {
        Self { access: Access::Admin, on_deny }
    }

    pub fn decide(&self, session: &Session) -> GuardDecision {
        let allowed = match self.access {
            Access::Public => return GuardDecision::Render,
            Access::Authenticated => session.is_authenticated(),
            Access::Admin => session.is_admin(),
        };
        if session.loading {
            GuardDecision::Loading
        } else if allowed {
            GuardDecision::Render
        } else {
            match self.on_deny {
                DenyAction::Redirect(path) => GuardDecision::Redirect(path),
                DenyAction::Message(text) => GuardDecision::Unauthorized(text),
            }
        }
    }

    /// Whether links to the page should be shown right now.
    pub fn permits(&self, session: &Session) -> bool {
        self.decide(session) == GuardDecision::Render
    }
}

/// Navigate away whenever `guard` resolves to a redirect for the current session.
pub fn install_guard_redirect<F>(guard: RouteGuard, session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = guard.decide(&session.get()) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Navigate once `target` is set, then reset it.
///
/// Async handlers and callbacks record where to go instead of holding the
/// router's navigate function.
pub fn install_pending_navigation<F>(target: RwSignal<Option<String>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
}
