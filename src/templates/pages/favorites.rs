use maud::{html, Markup};

use crate::auth::sessions::CurrentUser;
use crate::domain::listing::Listing;
use crate::templates::{components::listing_card, desktop_layout};

pub fn favorites_page(user: &CurrentUser, listings: &[Listing]) -> Markup {
    desktop_layout(
        "My Favorites",
        Some(user),
        html! {
            main class="container" {
                section class="intro" {
                    h1 { "My Favorite Properties" }
                    p { "Properties you've saved for later" }
                }

                @if listings.is_empty() {
                    div class="empty-state" {
                        p { "No favorite properties yet" }
                        p { "Start exploring and save properties you love!" }
                        a href="/" { "Browse listings" }
                    }
                } @else {
                    div class="grid" {
                        @for listing in listings {
                            // Everything on this page is favorited by definition.
                            (listing_card(listing, true))
                        }
                    }
                }
            }
        },
    )
}
