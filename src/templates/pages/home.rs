// templates/pages/home.rs
use maud::{html, Markup};

use crate::auth::sessions::CurrentUser;
use crate::domain::favorites::FavoriteSet;
use crate::domain::filter::FilterState;
use crate::domain::listing::Listing;
use crate::templates::{components::listing_card, desktop_layout, filter_bar};

pub fn home_page(
    user: Option<&CurrentUser>,
    listings: &[Listing],
    filters: &FilterState,
    favorites: &FavoriteSet,
) -> Markup {
    desktop_layout(
        "Browse",
        user,
        html! {
            main class="container" {
                section class="intro" {
                    h2 { "Featured Properties" }
                    p {
                        "Explore our handpicked selection of premium properties available for sale"
                    }
                }

                (filter_bar(filters))

                @if listings.is_empty() {
                    div class="empty-state" {
                        p { "No properties match your filters" }
                        a href="/" { "Reset filters" }
                    }
                } @else {
                    div class="grid" {
                        @for listing in listings {
                            (listing_card(listing, favorites.contains(&listing.id)))
                        }
                    }
                }
            }
        },
    )
}
