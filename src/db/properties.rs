// src/db/properties.rs
//
// Listing store passthroughs for the `properties` table. Every view
// refetches through these; nothing here caches.

use chrono::NaiveDateTime;
use rusqlite::{params, OptionalExtension, Row};

use crate::db::connection::Database;
use crate::domain::listing::{generate_listing_id, Listing, PropertyType};
use crate::domain::validate::NewListing;
use crate::errors::ServerError;

const LISTING_COLUMNS: &str = "id, user_id, title, location, price, beds, baths, sqft, \
                               property_type, image_url, featured, created_at";

pub(crate) fn row_to_listing(row: &Row) -> rusqlite::Result<Listing> {
    let type_raw: String = row.get(8)?;
    let property_type: PropertyType = type_raw.parse().map_err(|e: String| {
        rusqlite::Error::FromSqlConversionFailure(8, rusqlite::types::Type::Text, e.into())
    })?;

    Ok(Listing {
        id: row.get(0)?,
        user_id: row.get(1)?,
        title: row.get(2)?,
        location: row.get(3)?,
        price: row.get(4)?,
        beds: row.get(5)?,
        baths: row.get(6)?,
        sqft: row.get(7)?,
        property_type,
        image_url: row.get(9)?,
        featured: row.get(10)?,
        created_at: row.get(11)?,
    })
}

/// Fetch every listing, newest first.
pub fn all_listings(db: &Database) -> Result<Vec<Listing>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(&format!(
                "select {LISTING_COLUMNS} from properties
                 order by created_at desc, rowid desc"
            ))
            .map_err(|e| ServerError::DbError(format!("prepare listings failed: {e}")))?;

        let rows = stmt
            .query_map([], row_to_listing)
            .map_err(|e| ServerError::DbError(format!("query listings failed: {e}")))?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.map_err(|e| ServerError::DbError(format!("read listing failed: {e}")))?);
        }
        Ok(out)
    })
}

/// Fetch one listing by id. `None` means it no longer exists.
pub fn listing_by_id(db: &Database, id: &str) -> Result<Option<Listing>, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            &format!("select {LISTING_COLUMNS} from properties where id = ?"),
            params![id],
            row_to_listing,
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("select listing failed: {e}")))
    })
}

/// Fetch the listings owned by one user, newest first.
pub fn listings_by_owner(db: &Database, user_id: i64) -> Result<Vec<Listing>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(&format!(
                "select {LISTING_COLUMNS} from properties
                 where user_id = ?
                 order by created_at desc, rowid desc"
            ))
            .map_err(|e| ServerError::DbError(format!("prepare owner listings failed: {e}")))?;

        let rows = stmt
            .query_map(params![user_id], row_to_listing)
            .map_err(|e| ServerError::DbError(format!("query owner listings failed: {e}")))?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.map_err(|e| ServerError::DbError(format!("read listing failed: {e}")))?);
        }
        Ok(out)
    })
}

/// Insert a validated submission for `owner` and return the stored row.
pub fn insert_listing(
    db: &Database,
    owner: i64,
    new: &NewListing,
    featured: bool,
    now: NaiveDateTime,
) -> Result<Listing, ServerError> {
    let id = generate_listing_id();

    db.with_conn(|conn| {
        conn.execute(
            "insert into properties
               (id, user_id, title, location, price, beds, baths, sqft,
                property_type, image_url, featured, created_at)
             values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                id,
                owner,
                new.title,
                new.location,
                new.price,
                new.beds,
                new.baths,
                new.sqft,
                new.property_type.as_str(),
                new.image_url,
                featured,
                now,
            ],
        )
        .map_err(|e| ServerError::DbError(format!("insert listing failed: {e}")))?;
        Ok(())
    })?;

    Ok(Listing {
        id,
        user_id: owner,
        title: new.title.clone(),
        location: new.location.clone(),
        price: new.price,
        beds: new.beds,
        baths: new.baths,
        sqft: new.sqft,
        property_type: new.property_type,
        image_url: new.image_url.clone(),
        featured,
        created_at: now,
    })
}

/// Delete a listing, enforcing ownership at the store layer. The delete is
/// scoped to `(id, user_id)`; when nothing is affected we distinguish a
/// listing that belongs to someone else from one that is already gone.
pub fn delete_owned(db: &Database, id: &str, user_id: i64) -> Result<(), ServerError> {
    db.with_conn(|conn| {
        let affected = conn
            .execute(
                "delete from properties where id = ? and user_id = ?",
                params![id, user_id],
            )
            .map_err(|e| ServerError::DbError(format!("delete listing failed: {e}")))?;

        if affected == 1 {
            return Ok(());
        }

        let exists: Option<i64> = conn
            .query_row("select 1 from properties where id = ?", params![id], |r| {
                r.get(0)
            })
            .optional()
            .map_err(|e| ServerError::DbError(format!("check listing failed: {e}")))?;

        match exists {
            Some(_) => Err(ServerError::Forbidden(
                "listing belongs to another user".into(),
            )),
            None => Err(ServerError::NotFound),
        }
    })
}

/// Number of listings in the store. Used to decide whether to seed.
pub fn count_listings(db: &Database) -> Result<i64, ServerError> {
    db.with_conn(|conn| {
        conn.query_row("select count(*) from properties", [], |r| r.get(0))
            .map_err(|e| ServerError::DbError(format!("count listings failed: {e}")))
    })
}
