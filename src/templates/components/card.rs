use maud::{html, Markup};

use crate::domain::listing::Listing;

const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

/// How the favorite toggle renders. The toggle endpoint swaps the control
/// in place, so the form carries its own style back to the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleStyle {
    /// Compact heart icon on a listing card.
    Heart,
    /// Full-width save button on the detail page.
    Button,
}

impl ToggleStyle {
    pub fn as_param(&self) -> &'static str {
        match self {
            ToggleStyle::Heart => "heart",
            ToggleStyle::Button => "button",
        }
    }

    pub fn from_param(raw: &str) -> Self {
        match raw {
            "button" => ToggleStyle::Button,
            _ => ToggleStyle::Heart,
        }
    }
}

/// Favorite toggle control, swapped wholesale by htmx after each confirmed
/// mutation. The button disables itself while the request is in flight so a
/// double click cannot race two mutations for the same pair.
pub fn favorite_toggle(property_id: &str, is_favorite: bool, style: ToggleStyle) -> Markup {
    html! {
        form
            method="post"
            action="/favorites/toggle"
            hx-post="/favorites/toggle"
            hx-swap="outerHTML"
            hx-disabled-elt="find button"
            class="favorite-toggle"
        {
            input type="hidden" name="property_id" value=(property_id);
            input type="hidden" name="style" value=(style.as_param());

            @match style {
                ToggleStyle::Heart => {
                    @if is_favorite {
                        button type="submit" class="heart saved" aria-label="Remove from favorites" { "♥" }
                    } @else {
                        button type="submit" class="heart" aria-label="Save to favorites" { "♡" }
                    }
                }
                ToggleStyle::Button => {
                    @if is_favorite {
                        button type="submit" class="save-button saved" { "♥ Saved to Favorites" }
                    } @else {
                        button type="submit" class="save-button" { "♡ Save to Favorites" }
                    }
                }
            }
        }
    }
}

/// One listing in the browse/favorites grid.
pub fn listing_card(listing: &Listing, is_favorite: bool) -> Markup {
    let image = listing.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE);

    html! {
        div class="card listing-card" {
            div class="card-media" {
                a href=(format!("/properties/{}", listing.id)) {
                    img src=(image) alt=(listing.title);
                }
                @if listing.featured {
                    span class="badge featured" { "Featured" }
                }
                span class="badge type" { (listing.property_type.as_str()) }
                (favorite_toggle(&listing.id, is_favorite, ToggleStyle::Heart))
            }

            div class="card-body" {
                p class="price" { (format_price(listing.price)) }
                h3 {
                    a href=(format!("/properties/{}", listing.id)) { (listing.title) }
                }
                p class="location" { (listing.location) }

                div class="facts" {
                    span { (listing.beds) " Beds" }
                    span { (listing.baths) " Baths" }
                    span { (listing.sqft) " sqft" }
                }
            }
        }
    }
}

/// "$2,850,000" style formatting; cents only when they exist.
pub fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() as i64;
    let dollars = cents / 100;
    let rem = cents % 100;

    let raw = dollars.to_string();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rem != 0 {
        format!("${grouped}.{rem:02}")
    } else {
        format!("${grouped}")
    }
}
