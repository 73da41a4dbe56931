use super::*;

fn session(role: &str) -> Session {
    serde_json::from_value(serde_json::json!({
        "email": "user@shop.test",
        "role": role,
        "tenantId": "shop-1",
        "accessToken": "tok",
        "tokenType": "Bearer"
    }))
    .unwrap()
}

const GATED: [Role; 2] = [Role::Tenant, Role::Admin];

#[test]
fn guard_waits_until_storage_is_read() {
    let auth = AuthState { session: Some(session("isAdmin")), loaded: false, signed_out: false };
    assert_eq!(resolve_access(&auth, &GATED), Access::Pending);
    assert_eq!(resolve_access(&AuthState::default(), &GATED), Access::Pending);
}

#[test]
fn missing_session_redirects_to_login() {
    let access = resolve_access(&AuthState::loaded(None), &GATED);
    assert_eq!(access, Access::Denied(Denial::Unauthenticated));
    assert_eq!(Denial::Unauthenticated.redirect_path(), "/login");
    assert_eq!(Denial::Unauthenticated.message(), Some("Please login to access this page."));
}

#[test]
fn own_logout_redirects_to_login_without_a_toast() {
    let mut auth = AuthState::loaded(Some(session("isTenant")));
    auth.sign_out();
    let access = resolve_access(&auth, &GATED);
    assert_eq!(access, Access::Denied(Denial::SignedOut));
    assert_eq!(Denial::SignedOut.redirect_path(), "/login");
    assert_eq!(Denial::SignedOut.message(), None);
}

#[test]
fn unrecognized_role_redirects_home() {
    let access = resolve_access(&AuthState::loaded(Some(session("isAuditor"))), &GATED);
    assert_eq!(access, Access::Denied(Denial::Forbidden));
    assert_eq!(Denial::Forbidden.redirect_path(), "/");
    assert_eq!(Denial::Forbidden.message(), Some("You do not have permission to access this page."));
}

#[test]
fn allowed_roles_are_granted() {
    for role in ["isTenant", "isAdmin"] {
        let auth = AuthState::loaded(Some(session(role)));
        assert_eq!(resolve_access(&auth, &GATED), Access::Granted);
    }
}

#[test]
fn admin_only_route_forbids_tenant() {
    let auth = AuthState::loaded(Some(session("isTenant")));
    assert_eq!(resolve_access(&auth, &[Role::Admin]), Access::Denied(Denial::Forbidden));
}

#[test]
fn landing_path_follows_role() {
    assert_eq!(landing_path(None), "/login");
    assert_eq!(landing_path(Some(&session("isTenant"))), "/mainLayout");
    assert_eq!(landing_path(Some(&session("isAdmin"))), "/mainLayout/tenants");
    assert_eq!(landing_path(Some(&session("isAuditor"))), "/");
}

#[test]
fn tenant_always_sees_dashboard() {
    for segment in ["", "tenants", "reports/weekly"] {
        assert_eq!(layout_page(Some(&Role::Tenant), segment), LayoutPage::Dashboard);
    }
}

#[test]
fn admin_index_redirects_to_tenants() {
    assert_eq!(layout_page(Some(&Role::Admin), ""), LayoutPage::RedirectToTenants);
    assert_eq!(layout_page(Some(&Role::Admin), "/"), LayoutPage::RedirectToTenants);
}

#[test]
fn admin_other_segments_show_tenants() {
    assert_eq!(layout_page(Some(&Role::Admin), "tenants"), LayoutPage::Tenants);
    assert_eq!(layout_page(Some(&Role::Admin), "anything/else"), LayoutPage::Tenants);
}

#[test]
fn unknown_or_missing_role_renders_nothing() {
    assert_eq!(layout_page(None, "tenants"), LayoutPage::Empty);
    assert_eq!(layout_page(Some(&Role::Other("x".into())), ""), LayoutPage::Empty);
}
