use crate::domain::listing::PropertyType;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_db, seed_listing, sign_in};

#[test]
fn browse_page_loads_with_empty_store() {
    let db = init_test_db();

    let resp = handle(get("/", None), &db).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Featured Properties"));
    assert!(body.contains("No properties match your filters"));
}

#[test]
fn browse_page_lists_stored_properties() {
    let db = init_test_db();
    let (owner, _) = sign_in(&db, "owner@example.com");
    seed_listing(&db, owner, "Maple Cottage", "Portland, OR", 450_000.0, 3, PropertyType::House);
    seed_listing(&db, owner, "Sunset Retreat", "Malibu, CA", 2_100_000.0, 5, PropertyType::Villa);

    let resp = handle(get("/", None), &db).unwrap();
    let body = body_string(resp);

    assert!(body.contains("Maple Cottage"));
    assert!(body.contains("Sunset Retreat"));
}

#[test]
fn type_filter_narrows_the_grid() {
    let db = init_test_db();
    let (owner, _) = sign_in(&db, "owner@example.com");
    seed_listing(&db, owner, "Maple Cottage", "Portland, OR", 450_000.0, 3, PropertyType::House);
    seed_listing(&db, owner, "Sunset Retreat", "Malibu, CA", 2_100_000.0, 5, PropertyType::Villa);

    let resp = handle(get("/?type=Villa", None), &db).unwrap();
    let body = body_string(resp);

    assert!(body.contains("Sunset Retreat"));
    assert!(!body.contains("Maple Cottage"));
}

#[test]
fn search_query_filters_by_location() {
    let db = init_test_db();
    let (owner, _) = sign_in(&db, "owner@example.com");
    seed_listing(&db, owner, "Maple Cottage", "Portland, OR", 450_000.0, 3, PropertyType::House);
    seed_listing(&db, owner, "Sunset Retreat", "Malibu, CA", 2_100_000.0, 5, PropertyType::Villa);

    let resp = handle(get("/?q=malibu", None), &db).unwrap();
    let body = body_string(resp);

    assert!(body.contains("Sunset Retreat"));
    assert!(!body.contains("Maple Cottage"));
}

#[test]
fn unknown_type_param_is_a_bad_request() {
    let db = init_test_db();

    let err = handle(get("/?type=Castle", None), &db)
        .err()
        .expect("expected an error");
    match err {
        ServerError::BadRequest(_) => {}
        other => panic!("expected BadRequest, got: {other:?}"),
    }
}

#[test]
fn detail_page_shows_the_listing() {
    let db = init_test_db();
    let (owner, _) = sign_in(&db, "owner@example.com");
    let listing = seed_listing(
        &db,
        owner,
        "Maple Cottage",
        "Portland, OR",
        450_000.0,
        3,
        PropertyType::House,
    );

    let resp = handle(get(&format!("/properties/{}", listing.id), None), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Maple Cottage"));
    assert!(body.contains("Portland, OR"));
    assert!(body.contains("$450,000"));
    assert!(body.contains("Property Description"));
}

#[test]
fn unknown_listing_is_not_found() {
    let db = init_test_db();

    let err = handle(get("/properties/lst_missing", None), &db)
        .err()
        .expect("expected an error");
    match err {
        ServerError::NotFound => {}
        other => panic!("expected NotFound, got: {other:?}"),
    }
}
