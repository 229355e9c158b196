pub mod card;
pub mod filters;

pub use card::{favorite_toggle, listing_card, ToggleStyle};
pub use filters::filter_bar;
