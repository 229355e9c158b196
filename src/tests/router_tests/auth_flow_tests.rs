use chrono::Utc;

use crate::auth::magic::{MagicLinkConfig, MagicLinkService};
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, init_test_db, post, sign_in};

#[test]
fn login_page_loads_successfully() {
    let db = init_test_db();

    let resp = handle(get("/login", None), &db).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sign in"));
    assert!(body.contains("form"));
}

#[test]
fn request_link_returns_partial_html_for_htmx() {
    let db = init_test_db();
    let email = "test@example.com";

    let resp = handle(
        post("/auth/request-link", None, &[("email", email)]),
        &db,
    )
    .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);

    // Verify success message
    assert!(body.contains("Check your email"));
    assert!(body.contains(email));

    // Verify it is a partial (no full html structure), which is crucial for HTMX swapping
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
}

#[test]
fn magic_link_signs_the_user_in() {
    let db = init_test_db();

    // Issue a link directly through the service; the route only logs it.
    let service = MagicLinkService::new(MagicLinkConfig::default());
    let now = Utc::now().timestamp();
    let issued = db
        .with_conn(|conn| service.request_link(conn, "visitor@example.com", now))
        .unwrap();

    let resp = handle(get(&issued.link, None), &db).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "location").as_deref(), Some("/"));

    let cookie = header(&resp, "set-cookie").expect("expected a session cookie");
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));

    // The cookie value (before the attributes) is a live session.
    let session_pair = cookie.split(';').next().unwrap().to_string();
    let resp = handle(get("/favorites", Some(&session_pair)), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("My Favorite Properties"));
}

#[test]
fn used_magic_link_cannot_sign_in_again() {
    let db = init_test_db();

    let service = MagicLinkService::new(MagicLinkConfig::default());
    let now = Utc::now().timestamp();
    let issued = db
        .with_conn(|conn| service.request_link(conn, "visitor@example.com", now))
        .unwrap();

    handle(get(&issued.link, None), &db).unwrap();

    let err = handle(get(&issued.link, None), &db)
        .err()
        .expect("expected an error");
    match err {
        crate::errors::ServerError::Unauthorized(_) => {}
        other => panic!("expected Unauthorized, got: {other:?}"),
    }
}

#[test]
fn logout_revokes_the_session() {
    let db = init_test_db();
    let (_, cookie) = sign_in(&db, "leaver@example.com");

    // Signed in: favorites page renders.
    let resp = handle(get("/favorites", Some(&cookie)), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let resp = handle(post("/auth/logout", Some(&cookie), &[]), &db).unwrap();
    assert_eq!(resp.status(), 303);
    let cleared = header(&resp, "set-cookie").unwrap();
    assert!(cleared.contains("Max-Age=0"));

    // The old cookie no longer resolves to a user.
    let resp = handle(get("/favorites", Some(&cookie)), &db).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "location").as_deref(), Some("/login"));
}
