use maud::{html, Markup};

use crate::domain::filter::FilterState;
use crate::domain::listing::PROPERTY_TYPES;

/// Price bands the dropdown offers, as (param value, label).
pub const PRICE_BANDS: [(&str, &str); 6] = [
    ("any-price", "Any Price"),
    ("0-500000", "Under $500k"),
    ("500000-1000000", "$500k - $1M"),
    ("1000000-2000000", "$1M - $2M"),
    ("2000000-5000000", "$2M - $5M"),
    ("5000000-999999999", "$5M+"),
];

/// The browse page filter bar. Plain GET form: the chosen criteria live in
/// the query string and are parsed back into a `FilterState` on every
/// request.
pub fn filter_bar(filters: &FilterState) -> Markup {
    let type_param = filters.type_filter.as_param();
    let beds_param = filters.beds.as_param();
    let price_param = filters.price.as_param();

    html! {
        form method="get" action="/" class="filters card" {
            div class="filter-search" {
                input
                    type="search"
                    name="q"
                    value=(filters.query)
                    placeholder="Search by title or location...";
            }

            div class="filter-row" {
                select name="type" {
                    option value="all" selected[type_param == "all"] { "All Types" }
                    @for t in PROPERTY_TYPES {
                        option value=(t.as_str()) selected[type_param == t.as_str()] {
                            (t.as_str())
                        }
                    }
                }

                select name="beds" {
                    option value="any" selected[beds_param == "any"] { "Any Bedrooms" }
                    @for n in 1..=5 {
                        option value=(n) selected[beds_param == n.to_string()] {
                            @if n == 1 { "1+ Bedroom" } @else { (n) "+ Bedrooms" }
                        }
                    }
                }

                select name="price" {
                    @for (value, label) in PRICE_BANDS {
                        option value=(value) selected[price_param == value] { (label) }
                    }
                }

                button type="submit" class="primary" { "Apply Filters" }
                a href="/" class="reset" { "Reset Filters" }
            }
        }
    }
}
