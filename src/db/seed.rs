// src/db/seed.rs
//
// Sample inventory for a fresh install, owned by a reserved account so the
// browse page has something to show before anyone lists a property.

use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::db::auth::get_or_create_user;
use crate::db::connection::Database;
use crate::db::properties::{count_listings, insert_listing};
use crate::domain::listing::PropertyType;
use crate::domain::validate::NewListing;
use crate::errors::ServerError;

const SEED_JSON: &str = include_str!("../../data/seed_listings.json");
const SEED_OWNER_EMAIL: &str = "listings@estatehub.example";

#[derive(Debug, Deserialize)]
struct SeedListing {
    title: String,
    location: String,
    price: f64,
    beds: i64,
    baths: f64,
    sqft: i64,
    #[serde(rename = "type")]
    property_type: String,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    image_url: Option<String>,
}

/// Load the bundled sample listings into an empty store. No-op when any
/// listings already exist. Returns the number of rows inserted.
pub fn seed_if_empty(db: &Database) -> Result<usize, ServerError> {
    if count_listings(db)? > 0 {
        return Ok(0);
    }

    let rows: Vec<SeedListing> = serde_json::from_str(SEED_JSON)
        .map_err(|e| ServerError::DbError(format!("parse seed file failed: {e}")))?;

    let now = Utc::now();
    let owner = db.with_conn(|conn| get_or_create_user(conn, SEED_OWNER_EMAIL, now.timestamp()))?;

    let mut inserted = 0;
    for row in rows {
        let property_type: PropertyType = row
            .property_type
            .parse()
            .map_err(|e: String| ServerError::DbError(format!("bad seed row: {e}")))?;

        let new = NewListing {
            title: row.title,
            location: row.location,
            price: row.price,
            beds: row.beds,
            baths: row.baths,
            sqft: row.sqft,
            property_type,
            image_url: row.image_url,
        };

        // Stagger timestamps so the browse order matches the file order.
        let created_at = now.naive_utc() - chrono::Duration::seconds(inserted as i64);
        insert_listing(db, owner, &new, row.featured, created_at)?;
        inserted += 1;
    }

    info!(count = inserted, "seeded sample listings");
    Ok(inserted)
}
