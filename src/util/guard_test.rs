use super::*;
use crate::net::types::{Role, User};

const LOGIN_REQUIRED: RouteGuard = RouteGuard::authenticated(DenyAction::Redirect("/"));
const LOGIN_MESSAGE: RouteGuard = RouteGuard::authenticated(DenyAction::Message("You must be logged in."));
const ADMIN_ONLY: RouteGuard = RouteGuard::admin(DenyAction::Redirect("/"));

fn user(role: Role) -> User {
    User { id: "u1".into(), name: "Asha".into(), email: "asha@example.com".into(), role }
}

#[test]
fn public_pages_always_render() {
    assert_eq!(RouteGuard::PUBLIC.decide(&Session::default()), GuardDecision::Render);
    assert_eq!(RouteGuard::PUBLIC.decide(&Session::signed_out()), GuardDecision::Render);
}

#[test]
fn protected_page_waits_while_rehydrating() {
    let session = Session::default();
    assert_eq!(LOGIN_REQUIRED.decide(&session), GuardDecision::Loading);
    assert_eq!(ADMIN_ONLY.decide(&session), GuardDecision::Loading);
}

#[test]
fn loading_then_signed_out_redirects() {
    let mut session = Session::default();
    assert_eq!(LOGIN_REQUIRED.decide(&session), GuardDecision::Loading);
    session.loading = false;
    assert_eq!(LOGIN_REQUIRED.decide(&session), GuardDecision::Redirect("/"));
}

#[test]
fn message_pages_show_unauthorized_instead_of_redirecting() {
    assert_eq!(
        LOGIN_MESSAGE.decide(&Session::signed_out()),
        GuardDecision::Unauthorized("You must be logged in.")
    );
}

#[test]
fn signed_in_user_renders_authenticated_page() {
    assert_eq!(LOGIN_REQUIRED.decide(&Session::signed_in(user(Role::User))), GuardDecision::Render);
}

#[test]
fn admin_page_denies_plain_user() {
    let session = Session::signed_in(user(Role::User));
    assert_eq!(ADMIN_ONLY.decide(&session), GuardDecision::Redirect("/"));
    assert_eq!(
        ADMIN_ONLY.decide(&Session::signed_in(user(Role::Admin))),
        GuardDecision::Render
    );
}

#[test]
fn permits_matches_render_decision() {
    assert!(!ADMIN_ONLY.permits(&Session::default()));
    assert!(!ADMIN_ONLY.permits(&Session::signed_in(user(Role::User))));
    assert!(ADMIN_ONLY.permits(&Session::signed_in(user(Role::Admin))));
    assert!(RouteGuard::PUBLIC.permits(&Session::default()));
}
