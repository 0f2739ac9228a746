mod support;

use local_storefront::{
    error::AppError,
    render::{Page, RenderEvent},
    services::auth_service::{DEMO_USER_ID, DEMO_USER_NAME},
};
use support::{fixed_now, harness};

#[test]
fn login_accepts_any_non_empty_pair() {
    let mut h = harness();

    let applied = h.shop.login("a@b.com", "x").unwrap();

    let user = h.shop.current_user().cloned().unwrap();
    assert_eq!(user, applied.value);
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.name, DEMO_USER_NAME);
    assert_eq!(user.id, DEMO_USER_ID);
    assert!(
        h.renderer
            .events()
            .contains(&RenderEvent::UserStatus(Some(DEMO_USER_NAME.to_string())))
    );
    assert_eq!(h.renderer.last_page(), Some(Page::Login));
}

#[test]
fn logout_clears_user() {
    let mut h = harness();
    h.shop.login("a@b.com", "x").unwrap();

    h.shop.logout();

    assert!(h.shop.current_user().is_none());
    assert_eq!(
        h.renderer.events().last(),
        Some(&RenderEvent::Toast("Signed out".to_string()))
    );
    let raw = h.store.raw().unwrap();
    let blob: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(blob["user"].is_null());
}

#[test]
fn login_requires_both_fields() {
    let mut h = harness();

    let err = h.shop.login("a@b.com", "").unwrap_err();
    assert!(matches!(err, AppError::MissingFields(_)));
    let err = h.shop.login("", "secret").unwrap_err();
    assert!(matches!(err, AppError::MissingFields(_)));

    assert!(h.shop.current_user().is_none());
    assert_eq!(h.renderer.alerts().len(), 2);
}

#[test]
fn register_uses_clock_for_id_and_replaces_user() {
    let mut h = harness();
    h.shop.login("old@b.com", "x").unwrap();

    let user = h.shop.register("Ada", "ada@b.com", "pw").unwrap().value;

    assert_eq!(user.id, fixed_now().timestamp_millis());
    assert_eq!(user.name, "Ada");
    assert_eq!(h.shop.current_user(), Some(&user));
}

#[test]
fn register_does_not_check_duplicate_emails() {
    let mut h = harness();

    h.shop.register("Ada", "same@b.com", "pw").unwrap();
    let second = h.shop.register("Bea", "same@b.com", "pw").unwrap();

    assert_eq!(second.value.name, "Bea");
}

#[test]
fn register_requires_all_fields() {
    let mut h = harness();

    let err = h.shop.register("", "ada@b.com", "pw").unwrap_err();

    assert!(matches!(err, AppError::MissingFields(_)));
    assert!(h.shop.current_user().is_none());
}
