use maud::{html, Markup};

use crate::auth::sessions::CurrentUser;
use crate::domain::listing::Listing;
use crate::templates::components::card::{favorite_toggle, format_price, ToggleStyle};
use crate::templates::desktop_layout;

pub fn property_details_page(
    user: Option<&CurrentUser>,
    listing: &Listing,
    is_favorite: bool,
) -> Markup {
    let image = listing
        .image_url
        .as_deref()
        .unwrap_or("/static/placeholder.svg");

    desktop_layout(
        &listing.title,
        user,
        html! {
            main class="container" {
                a href="/" class="back-link" { "← Back" }

                div class="detail-grid" {
                    div class="detail-media" {
                        img src=(image) alt=(listing.title);
                        div class="badges" {
                            @if listing.featured {
                                span class="badge featured" { "Featured" }
                            }
                            span class="badge type" { (listing.property_type.as_str()) }
                        }
                    }

                    div class="detail-body" {
                        h1 { (listing.title) }
                        p class="location" { (listing.location) }
                        p class="price" { (format_price(listing.price)) }

                        div class="stats card" {
                            div class="stat" {
                                p class="stat-value" { (listing.beds) }
                                p class="stat-label" { "Bedrooms" }
                            }
                            div class="stat" {
                                p class="stat-value" { (listing.baths) }
                                p class="stat-label" { "Bathrooms" }
                            }
                            div class="stat" {
                                p class="stat-value" { (listing.sqft) }
                                p class="stat-label" { "Square Feet" }
                            }
                        }

                        (favorite_toggle(&listing.id, is_favorite, ToggleStyle::Button))

                        section class="card description" {
                            h3 { "Property Description" }
                            p {
                                "This stunning "
                                (listing.property_type.as_str().to_lowercase())
                                " offers " (listing.beds) " spacious bedrooms and "
                                (listing.baths) " modern bathrooms across "
                                (listing.sqft) " square feet of living space. Located in "
                                (listing.location)
                                ", this property combines elegance with functionality."
                            }
                            div class="description-facts" {
                                div {
                                    p class="stat-label" { "Property Type" }
                                    p { (listing.property_type.as_str()) }
                                }
                                div {
                                    p class="stat-label" { "Status" }
                                    p { "For Sale" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
