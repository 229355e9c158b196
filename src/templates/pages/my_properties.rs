use maud::{html, Markup};

use crate::auth::sessions::CurrentUser;
use crate::domain::listing::{Listing, PROPERTY_TYPES};
use crate::templates::{components::listing_card, desktop_layout};

pub fn my_properties_page(user: &CurrentUser, listings: &[Listing]) -> Markup {
    desktop_layout(
        "My Properties",
        Some(user),
        html! {
            main class="container" {
                section class="intro" {
                    h1 { "My Properties" }
                    p { "Manage your property listings" }
                }

                (add_listing_form())

                @if listings.is_empty() {
                    div class="empty-state" {
                        p { "You haven't added any properties yet" }
                    }
                } @else {
                    div class="grid" {
                        @for listing in listings {
                            div class="owned-listing" {
                                (listing_card(listing, false))
                                form method="post" action="/properties/delete" class="delete-form" {
                                    input type="hidden" name="id" value=(listing.id);
                                    button type="submit" class="danger" { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn add_listing_form() -> Markup {
    html! {
        section class="card add-listing" {
            h3 { "Add New Property" }
            form method="post" action="/properties" class="listing-form" {
                div class="form-grid" {
                    label {
                        "Property Title *"
                        input type="text" name="title" placeholder="Modern Luxury Villa"
                            required maxlength="200";
                    }
                    label {
                        "Location *"
                        input type="text" name="location" placeholder="Beverly Hills, CA"
                            required maxlength="200";
                    }
                    label {
                        "Price ($) *"
                        input type="number" name="price" placeholder="2850000"
                            required min="0" step="0.01";
                    }
                    label {
                        "Property Type *"
                        select name="type" required {
                            option value="" disabled selected { "Select type" }
                            @for t in PROPERTY_TYPES {
                                option value=(t.as_str()) { (t.as_str()) }
                            }
                        }
                    }
                    label {
                        "Bedrooms *"
                        input type="number" name="beds" placeholder="4"
                            required min="1" max="50";
                    }
                    label {
                        "Bathrooms *"
                        input type="number" name="baths" placeholder="3"
                            required min="1" max="50" step="0.5";
                    }
                    label {
                        "Square Feet *"
                        input type="number" name="sqft" placeholder="4500"
                            required min="1" max="999999";
                    }
                    label {
                        "Image URL (optional)"
                        input type="url" name="image_url" placeholder="https://example.com/image.jpg"
                            maxlength="2000";
                    }
                }

                button type="submit" class="primary" { "Add Property" }
            }
        }
    }
}
