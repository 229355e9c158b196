pub mod favorites;
pub mod filter;
pub mod listing;
pub mod validate;
