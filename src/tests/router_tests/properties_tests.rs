use crate::domain::listing::PropertyType;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    body_string, count_rows, get, header, init_test_db, post, seed_listing, sign_in,
};

fn valid_form<'a>(title: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("title", title),
        ("location", "Austin, TX"),
        ("price", "650000"),
        ("beds", "4"),
        ("baths", "3"),
        ("sqft", "2800"),
        ("type", "House"),
        ("image_url", ""),
    ]
}

#[test]
fn anonymous_submission_redirects_to_login() {
    let db = init_test_db();

    let resp = handle(post("/properties", None, &valid_form("Cozy Family Home")), &db).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "location").as_deref(), Some("/login"));
    assert_eq!(
        count_rows(&db, "select count(*) from properties", rusqlite::params![]),
        0
    );
}

#[test]
fn invalid_submission_is_rejected_before_the_store() {
    let db = init_test_db();
    let (_, cookie) = sign_in(&db, "owner@example.com");

    let mut form = valid_form("Cozy Family Home");
    form.retain(|(k, _)| *k != "price");
    form.push(("price", "-5"));

    let err = handle(post("/properties", Some(&cookie), &form), &db)
        .err()
        .expect("expected an error");
    match err {
        ServerError::BadRequest(_) => {}
        other => panic!("expected BadRequest, got: {other:?}"),
    }
    assert_eq!(
        count_rows(&db, "select count(*) from properties", rusqlite::params![]),
        0
    );
}

#[test]
fn submitted_listing_shows_up_in_my_properties_and_browse() {
    let db = init_test_db();
    let (_, cookie) = sign_in(&db, "owner@example.com");

    let resp = handle(
        post("/properties", Some(&cookie), &valid_form("Cozy Family Home")),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(
        header(&resp, "location").as_deref(),
        Some("/my-properties")
    );

    let resp = handle(get("/my-properties", Some(&cookie)), &db).unwrap();
    assert!(body_string(resp).contains("Cozy Family Home"));

    let resp = handle(get("/", None), &db).unwrap();
    assert!(body_string(resp).contains("Cozy Family Home"));
}

#[test]
fn my_properties_requires_sign_in() {
    let db = init_test_db();

    let resp = handle(get("/my-properties", None), &db).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "location").as_deref(), Some("/login"));
}

#[test]
fn delete_is_rejected_for_non_owners() {
    let db = init_test_db();
    let (owner, _) = sign_in(&db, "owner@example.com");
    let (_, intruder_cookie) = sign_in(&db, "intruder@example.com");
    let listing = seed_listing(&db, owner, "Maple Cottage", "Portland, OR", 450_000.0, 3, PropertyType::House);

    let err = handle(
        post(
            "/properties/delete",
            Some(&intruder_cookie),
            &[("id", &listing.id)],
        ),
        &db,
    )
    .err()
    .expect("expected an error");
    match err {
        ServerError::Forbidden(_) => {}
        other => panic!("expected Forbidden, got: {other:?}"),
    }

    // The listing survives the rejected attempt.
    assert_eq!(
        count_rows(&db, "select count(*) from properties", rusqlite::params![]),
        1
    );
}

#[test]
fn owner_can_delete_their_listing() {
    let db = init_test_db();
    let (owner, cookie) = sign_in(&db, "owner@example.com");
    let listing = seed_listing(&db, owner, "Maple Cottage", "Portland, OR", 450_000.0, 3, PropertyType::House);

    let resp = handle(
        post("/properties/delete", Some(&cookie), &[("id", &listing.id)]),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    assert_eq!(
        count_rows(&db, "select count(*) from properties", rusqlite::params![]),
        0
    );

    // Deleting again reports the listing as gone.
    let err = handle(
        post("/properties/delete", Some(&cookie), &[("id", &listing.id)]),
        &db,
    )
    .err()
    .expect("expected an error");
    match err {
        ServerError::NotFound => {}
        other => panic!("expected NotFound, got: {other:?}"),
    }
}
