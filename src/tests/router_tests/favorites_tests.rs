use crate::domain::listing::PropertyType;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    body_string, count_rows, get, header, init_test_db, post, seed_listing, sign_in,
};

#[test]
fn anonymous_favorites_page_redirects_to_login() {
    let db = init_test_db();

    let resp = handle(get("/favorites", None), &db).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "location").as_deref(), Some("/login"));
}

#[test]
fn anonymous_toggle_redirects_to_login_without_mutating() {
    let db = init_test_db();
    let (owner, _) = sign_in(&db, "owner@example.com");
    let listing = seed_listing(&db, owner, "Maple Cottage", "Portland, OR", 450_000.0, 3, PropertyType::House);

    let resp = handle(
        post("/favorites/toggle", None, &[("property_id", &listing.id)]),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "location").as_deref(), Some("/login"));

    assert_eq!(count_rows(&db, "select count(*) from favorites", rusqlite::params![]), 0);
}

#[test]
fn toggle_adds_then_removes_and_renders_confirmed_state() {
    let db = init_test_db();
    let (owner, _) = sign_in(&db, "owner@example.com");
    let (fan, cookie) = sign_in(&db, "fan@example.com");
    let listing = seed_listing(&db, owner, "Maple Cottage", "Portland, OR", 450_000.0, 3, PropertyType::House);

    // First toggle: the pair is inserted and the control comes back saved.
    let resp = handle(
        post(
            "/favorites/toggle",
            Some(&cookie),
            &[("property_id", &listing.id)],
        ),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("saved"));
    assert_eq!(
        count_rows(
            &db,
            "select count(*) from favorites where user_id = ?",
            rusqlite::params![fan],
        ),
        1
    );

    // Second toggle: the pair is removed again.
    let resp = handle(
        post(
            "/favorites/toggle",
            Some(&cookie),
            &[("property_id", &listing.id)],
        ),
        &db,
    )
    .unwrap();
    assert!(!body_string(resp).contains("saved"));
    assert_eq!(
        count_rows(
            &db,
            "select count(*) from favorites where user_id = ?",
            rusqlite::params![fan],
        ),
        0
    );
}

#[test]
fn favorites_page_lists_saved_properties() {
    let db = init_test_db();
    let (owner, _) = sign_in(&db, "owner@example.com");
    let (_, cookie) = sign_in(&db, "fan@example.com");
    let listing = seed_listing(&db, owner, "Maple Cottage", "Portland, OR", 450_000.0, 3, PropertyType::House);
    seed_listing(&db, owner, "Sunset Retreat", "Malibu, CA", 2_100_000.0, 5, PropertyType::Villa);

    handle(
        post(
            "/favorites/toggle",
            Some(&cookie),
            &[("property_id", &listing.id)],
        ),
        &db,
    )
    .unwrap();

    let resp = handle(get("/favorites", Some(&cookie)), &db).unwrap();
    let body = body_string(resp);
    assert!(body.contains("Maple Cottage"));
    assert!(!body.contains("Sunset Retreat"));
}

#[test]
fn toggling_a_vanished_listing_is_not_found() {
    let db = init_test_db();
    let (_, cookie) = sign_in(&db, "fan@example.com");

    let err = handle(
        post(
            "/favorites/toggle",
            Some(&cookie),
            &[("property_id", "lst_gone")],
        ),
        &db,
    )
    .err()
    .expect("expected an error");
    match err {
        ServerError::NotFound => {}
        other => panic!("expected NotFound, got: {other:?}"),
    }
}

#[test]
fn toggle_requires_a_property_id() {
    let db = init_test_db();
    let (_, cookie) = sign_in(&db, "fan@example.com");

    let err = handle(post("/favorites/toggle", Some(&cookie), &[]), &db)
        .err()
        .expect("expected an error");
    match err {
        ServerError::BadRequest(_) => {}
        other => panic!("expected BadRequest, got: {other:?}"),
    }
}
