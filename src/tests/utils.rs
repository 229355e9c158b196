use std::io::Read;

use astra::Body;
use chrono::Utc;
use http::{Method, Request};

use crate::auth::sessions::create_session;
use crate::db::auth::get_or_create_user;
use crate::db::connection::{init_db, Database};
use crate::db::properties::insert_listing;
use crate::domain::listing::{Listing, PropertyType};
use crate::domain::validate::NewListing;

/// Initialize a fresh in-memory test DB using the production schema.
pub fn init_test_db() -> Database {
    let db = Database::new(":memory:");

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

/// Create a user plus a live session, returning (user_id, Cookie header value).
pub fn sign_in(db: &Database, email: &str) -> (i64, String) {
    let now = Utc::now().timestamp();
    db.with_conn(|conn| {
        let user_id = get_or_create_user(conn, email, now)?;
        let token = create_session(conn, user_id, now)?;
        Ok((user_id, format!("session={token}")))
    })
    .expect("sign_in failed")
}

/// Insert a listing fixture owned by `owner`.
pub fn seed_listing(
    db: &Database,
    owner: i64,
    title: &str,
    location: &str,
    price: f64,
    beds: i64,
    property_type: PropertyType,
) -> Listing {
    insert_listing(
        db,
        owner,
        &NewListing {
            title: title.to_string(),
            location: location.to_string(),
            price,
            beds,
            baths: 2.0,
            sqft: 2000,
            property_type,
            image_url: None,
        },
        false,
        Utc::now().naive_utc(),
    )
    .expect("seed_listing failed")
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post(uri: &str, cookie: Option<&str>, form: &[(&str, &str)]) -> Request<Body> {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in form {
        serializer.append_pair(k, v);
    }
    let body = serializer.finish();

    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::from(body.into_bytes())).unwrap()
}

pub fn body_string(resp: astra::Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}

pub fn header(resp: &astra::Response, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub fn count_rows(db: &Database, sql: &str, params: &[&dyn rusqlite::ToSql]) -> i64 {
    db.with_conn(|conn| {
        conn.query_row(sql, params, |r| r.get(0))
            .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))
    })
    .unwrap()
}
