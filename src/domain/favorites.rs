// src/domain/favorites.rs
use std::collections::HashSet;

use crate::db::connection::Database;
use crate::db::favorites as db_favorites;
use crate::errors::ServerError;

/// The signed-in user's favorited listing ids, cached for one request.
///
/// Each view rebuilds its own set from the store rather than assuming any
/// cross-view cache coherence; after a toggle the caller refreshes again so
/// the set always reflects the favorites table as of the last fetch.
#[derive(Debug, Default)]
pub struct FavoriteSet {
    ids: HashSet<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached set with the store's rows for `user_id`.
    /// `None` (no signed-in user) yields the empty set without error; the
    /// routes gate toggle actions on authentication separately.
    ///
    /// On a store error the previous contents are left untouched.
    pub fn refresh(&mut self, db: &Database, user_id: Option<i64>) -> Result<(), ServerError> {
        match user_id {
            None => {
                self.ids.clear();
                Ok(())
            }
            Some(uid) => {
                let fresh = db_favorites::ids_for_user(db, uid)?;
                self.ids = fresh;
                Ok(())
            }
        }
    }

    /// Build a freshly refreshed set in one step.
    pub fn load(db: &Database, user_id: Option<i64>) -> Result<Self, ServerError> {
        let mut set = Self::new();
        set.refresh(db, user_id)?;
        Ok(set)
    }

    pub fn contains(&self, listing_id: &str) -> bool {
        self.ids.contains(listing_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
