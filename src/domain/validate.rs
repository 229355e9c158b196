// src/domain/validate.rs
//
// Form-level validation for listing submissions. Violations surface as
// BadRequest before anything reaches the store.

use std::collections::HashMap;
use std::str::FromStr;

use url::Url;

use crate::domain::listing::PropertyType;
use crate::errors::ServerError;

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_LOCATION_LEN: usize = 200;
pub const MAX_PRICE: f64 = 999_999_999.99;
pub const MAX_BEDS: i64 = 50;
pub const MAX_BATHS: f64 = 50.0;
pub const MAX_SQFT: i64 = 999_999;
pub const MAX_IMAGE_URL_LEN: usize = 2000;

/// A validated listing submission, ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewListing {
    pub title: String,
    pub location: String,
    pub price: f64,
    pub beds: i64,
    pub baths: f64,
    pub sqft: i64,
    pub property_type: PropertyType,
    pub image_url: Option<String>,
}

fn bad(msg: impl Into<String>) -> ServerError {
    ServerError::BadRequest(msg.into())
}

/// Validate a submitted listing form (decoded key/value pairs).
pub fn parse_new_listing(params: &HashMap<String, String>) -> Result<NewListing, ServerError> {
    let get = |key: &str| params.get(key).map(String::as_str).unwrap_or("");

    let title = get("title").trim().to_string();
    if title.chars().count() < 3 {
        return Err(bad("Title must be at least 3 characters"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(bad("Title is too long"));
    }

    let location = get("location").trim().to_string();
    if location.chars().count() < 3 {
        return Err(bad("Location must be at least 3 characters"));
    }
    if location.chars().count() > MAX_LOCATION_LEN {
        return Err(bad("Location is too long"));
    }

    let price: f64 = get("price")
        .trim()
        .parse()
        .map_err(|_| bad("Price must be a number"))?;
    if !price.is_finite() || price <= 0.0 {
        return Err(bad("Price must be positive"));
    }
    if price > MAX_PRICE {
        return Err(bad("Price is out of range"));
    }

    let beds: i64 = get("beds")
        .trim()
        .parse()
        .map_err(|_| bad("Bedrooms must be a whole number"))?;
    if !(1..=MAX_BEDS).contains(&beds) {
        return Err(bad("Bedrooms must be between 1 and 50"));
    }

    let baths: f64 = get("baths")
        .trim()
        .parse()
        .map_err(|_| bad("Bathrooms must be a number"))?;
    if !baths.is_finite() || baths <= 0.0 || baths > MAX_BATHS {
        return Err(bad("Bathrooms must be between 0.5 and 50"));
    }

    let sqft: i64 = get("sqft")
        .trim()
        .parse()
        .map_err(|_| bad("Square feet must be a whole number"))?;
    if !(1..=MAX_SQFT).contains(&sqft) {
        return Err(bad("Square feet must be between 1 and 999999"));
    }

    let property_type = PropertyType::from_str(get("type").trim())
        .map_err(|_| bad("Please select a property type"))?;

    let image_url = match get("image_url").trim() {
        "" => None,
        raw => {
            if raw.len() > MAX_IMAGE_URL_LEN {
                return Err(bad("Image URL is too long"));
            }
            let parsed = Url::parse(raw).map_err(|_| bad("Invalid image URL"))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(bad("Invalid image URL"));
            }
            Some(raw.to_string())
        }
    };

    Ok(NewListing {
        title,
        location,
        price,
        beds,
        baths,
        sqft,
        property_type,
        image_url,
    })
}
