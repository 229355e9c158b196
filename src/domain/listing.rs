// src/domain/listing.rs
use base64::Engine;
use chrono::NaiveDateTime;
use rand::{rngs::OsRng, RngCore};
use std::fmt;
use std::str::FromStr;

/// The closed set of property categories a listing can carry.
/// Matching against a filter is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    House,
    Apartment,
    Villa,
    Penthouse,
    Townhouse,
    Estate,
}

/// All types, in the order the filter dropdown shows them.
pub const PROPERTY_TYPES: [PropertyType; 6] = [
    PropertyType::House,
    PropertyType::Apartment,
    PropertyType::Villa,
    PropertyType::Penthouse,
    PropertyType::Townhouse,
    PropertyType::Estate,
];

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Villa => "Villa",
            PropertyType::Penthouse => "Penthouse",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Estate => "Estate",
        }
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "House" => Ok(PropertyType::House),
            "Apartment" => Ok(PropertyType::Apartment),
            "Villa" => Ok(PropertyType::Villa),
            "Penthouse" => Ok(PropertyType::Penthouse),
            "Townhouse" => Ok(PropertyType::Townhouse),
            "Estate" => Ok(PropertyType::Estate),
            other => Err(format!("unknown property type: {other}")),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A property-for-sale record as stored in the `properties` table.
/// Owned by the user who created it; mutated and deleted only by that user.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub user_id: i64,
    pub title: String,
    pub location: String,
    pub price: f64,
    pub beds: i64,
    pub baths: f64,
    pub sqft: i64,
    pub property_type: PropertyType,
    pub image_url: Option<String>,
    pub featured: bool,
    pub created_at: NaiveDateTime,
}

/// Generate an opaque listing id.
/// 16 random bytes, URL-safe base64, prefixed so ids are recognizable in logs.
pub fn generate_listing_id() -> String {
    let mut raw = [0u8; 16];
    OsRng.fill_bytes(&mut raw);
    format!(
        "lst_{}",
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw)
    )
}
