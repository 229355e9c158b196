// src/db/favorites.rs
//
// The favorites relation: at most one row per (user, listing) pair, enforced
// by a unique index and a transactional toggle.

use std::collections::HashSet;

use rusqlite::{params, OptionalExtension};

use crate::db::connection::Database;
use crate::db::properties;
use crate::domain::listing::Listing;
use crate::errors::ServerError;

/// Outcome of a confirmed toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Fetch the set of listing ids the user has favorited.
pub fn ids_for_user(db: &Database, user_id: i64) -> Result<HashSet<String>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare("select property_id from favorites where user_id = ?")
            .map_err(|e| ServerError::DbError(format!("prepare favorites failed: {e}")))?;

        let rows = stmt
            .query_map(params![user_id], |r| r.get::<_, String>(0))
            .map_err(|e| ServerError::DbError(format!("query favorites failed: {e}")))?;

        let mut out = HashSet::new();
        for row in rows {
            out.insert(row.map_err(|e| ServerError::DbError(format!("read favorite failed: {e}")))?);
        }
        Ok(out)
    })
}

/// Fetch the user's favorited listings, most recently saved first.
pub fn listings_for_user(db: &Database, user_id: i64) -> Result<Vec<Listing>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn
            .prepare(
                "select p.id, p.user_id, p.title, p.location, p.price, p.beds, p.baths,
                        p.sqft, p.property_type, p.image_url, p.featured, p.created_at
                 from favorites f
                 join properties p on p.id = f.property_id
                 where f.user_id = ?
                 order by f.created_at desc, f.id desc",
            )
            .map_err(|e| ServerError::DbError(format!("prepare favorite listings failed: {e}")))?;

        let rows = stmt
            .query_map(params![user_id], properties::row_to_listing)
            .map_err(|e| ServerError::DbError(format!("query favorite listings failed: {e}")))?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.map_err(|e| ServerError::DbError(format!("read listing failed: {e}")))?);
        }
        Ok(out)
    })
}

/// Toggle the (user, listing) favorite pair and return the confirmed state.
///
/// The check and the mutation run inside one transaction, so two toggles
/// racing on the same pair serialize: one inserts, the other sees the row
/// and removes it. `insert or ignore` plus the unique index keeps the
/// at-most-one-row invariant even if a duplicate insert slips through.
/// On any error the transaction rolls back and the relation is unchanged.
pub fn toggle(
    db: &Database,
    user_id: i64,
    property_id: &str,
    now: i64,
) -> Result<ToggleOutcome, ServerError> {
    db.with_conn(|conn| {
        let tx = conn
            .transaction()
            .map_err(|e| ServerError::DbError(format!("begin tx failed: {e}")))?;

        // The listing must still exist; favoriting a vanished listing is a
        // not-found, not a silent no-op.
        let listing_exists: Option<i64> = tx
            .query_row(
                "select 1 from properties where id = ?",
                params![property_id],
                |r| r.get(0),
            )
            .optional()
            .map_err(|e| ServerError::DbError(format!("check listing failed: {e}")))?;

        if listing_exists.is_none() {
            tx.rollback().ok();
            return Err(ServerError::NotFound);
        }

        let existing: Option<i64> = tx
            .query_row(
                "select id from favorites where user_id = ? and property_id = ?",
                params![user_id, property_id],
                |r| r.get(0),
            )
            .optional()
            .map_err(|e| ServerError::DbError(format!("select favorite failed: {e}")))?;

        let outcome = match existing {
            Some(favorite_id) => {
                tx.execute("delete from favorites where id = ?", params![favorite_id])
                    .map_err(|e| ServerError::DbError(format!("delete favorite failed: {e}")))?;
                ToggleOutcome::Removed
            }
            None => {
                tx.execute(
                    "insert or ignore into favorites (user_id, property_id, created_at)
                     values (?, ?, ?)",
                    params![user_id, property_id, now],
                )
                .map_err(|e| ServerError::DbError(format!("insert favorite failed: {e}")))?;
                ToggleOutcome::Added
            }
        };

        tx.commit()
            .map_err(|e| ServerError::DbError(format!("commit tx failed: {e}")))?;

        Ok(outcome)
    })
}
