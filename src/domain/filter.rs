// src/domain/filter.rs
//
// Pure predicate composition over an in-memory listing set. The browse page
// re-runs this on every request; it never touches the store and never
// mutates its input.

use std::collections::HashMap;
use std::str::FromStr;

use crate::domain::listing::{Listing, PropertyType};
use crate::errors::ServerError;

/// Category criterion: everything, or one exact type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(PropertyType),
}

impl TypeFilter {
    /// Parse the `type` query param. Unknown type names are rejected rather
    /// than silently matching nothing.
    pub fn from_param(raw: &str) -> Result<Self, ServerError> {
        match raw {
            "" | "all" => Ok(TypeFilter::All),
            other => PropertyType::from_str(other)
                .map(TypeFilter::Only)
                .map_err(ServerError::BadRequest),
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Only(t) => t.as_str(),
        }
    }

    fn matches(&self, listing: &Listing) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => listing.property_type == *t,
        }
    }
}

/// Minimum-bedroom criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BedsFilter {
    #[default]
    Any,
    AtLeast(i64),
}

impl BedsFilter {
    /// Parse the `beds` query param. A non-numeric value degrades to `Any`,
    /// matching what the filter dropdown has always done with it.
    pub fn from_param(raw: &str) -> Self {
        match raw {
            "" | "any" => BedsFilter::Any,
            other => other
                .parse::<i64>()
                .map(BedsFilter::AtLeast)
                .unwrap_or(BedsFilter::Any),
        }
    }

    pub fn as_param(&self) -> String {
        match self {
            BedsFilter::Any => "any".to_string(),
            BedsFilter::AtLeast(n) => n.to_string(),
        }
    }

    fn matches(&self, listing: &Listing) -> bool {
        match self {
            BedsFilter::Any => true,
            BedsFilter::AtLeast(n) => listing.beds >= *n,
        }
    }
}

/// Price band criterion. Bounds are inclusive at both ends; a missing or
/// zero upper bound means "at least min".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PriceBand {
    #[default]
    Any,
    Between { min: f64, max: Option<f64> },
}

impl PriceBand {
    /// Parse the `price` query param, encoded as `min-max` ("0-500000",
    /// "5000000-999999999") or the sentinel "any-price".
    pub fn from_param(raw: &str) -> Result<Self, ServerError> {
        match raw {
            "" | "any-price" => Ok(PriceBand::Any),
            other => {
                let (min_raw, max_raw) = match other.split_once('-') {
                    Some((lo, hi)) => (lo, Some(hi)),
                    None => (other, None),
                };

                let min: f64 = min_raw.parse().map_err(|_| {
                    ServerError::BadRequest(format!("invalid price range: {other}"))
                })?;

                let max = match max_raw {
                    None | Some("") => None,
                    Some(hi) => {
                        let hi: f64 = hi.parse().map_err(|_| {
                            ServerError::BadRequest(format!("invalid price range: {other}"))
                        })?;
                        // A zero upper bound means the band is open-ended.
                        if hi == 0.0 {
                            None
                        } else {
                            Some(hi)
                        }
                    }
                };

                Ok(PriceBand::Between { min, max })
            }
        }
    }

    pub fn as_param(&self) -> String {
        match self {
            PriceBand::Any => "any-price".to_string(),
            PriceBand::Between { min, max } => match max {
                Some(max) => format!("{}-{}", *min as i64, *max as i64),
                None => format!("{}-", *min as i64),
            },
        }
    }

    fn matches(&self, listing: &Listing) -> bool {
        match self {
            PriceBand::Any => true,
            PriceBand::Between { min, max } => {
                listing.price >= *min && max.map_or(true, |m| listing.price <= m)
            }
        }
    }
}

/// The user-chosen search criteria for the browse page. Transient: lives in
/// the query string, never persisted. `Default` passes everything through.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub type_filter: TypeFilter,
    pub beds: BedsFilter,
    pub price: PriceBand,
    pub query: String,
}

impl FilterState {
    /// Build filter state from decoded query params. Missing params fall
    /// back to their pass-through defaults.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        let get = |key: &str| params.get(key).map(String::as_str).unwrap_or("");

        Ok(FilterState {
            type_filter: TypeFilter::from_param(get("type"))?,
            beds: BedsFilter::from_param(get("beds")),
            price: PriceBand::from_param(get("price"))?,
            query: get("q").trim().to_string(),
        })
    }

    fn matches(&self, listing: &Listing) -> bool {
        self.type_filter.matches(listing)
            && self.beds.matches(listing)
            && self.price.matches(listing)
            && self.query_matches(listing)
    }

    fn query_matches(&self, listing: &Listing) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        listing.title.to_lowercase().contains(&needle)
            || listing.location.to_lowercase().contains(&needle)
    }
}

/// Apply every active criterion (logical AND) over the fetched listing set,
/// preserving source order. Pure and idempotent; the input is untouched.
pub fn filter_listings(listings: &[Listing], filters: &FilterState) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| filters.matches(l))
        .cloned()
        .collect()
}
