pub(crate) mod enroll_button;
pub(crate) mod form_field;
pub(crate) mod header_nav_item;
pub(crate) mod listing;
pub(crate) mod loading;
pub(crate) mod pagination;
pub(crate) mod price;
pub(crate) mod resource_card;
pub(crate) mod search_bar;
pub(crate) mod user_dropdown;

// Re-export components for convenience
pub use form_field::FormField;
pub use listing::Listing;
pub use loading::Loading;
pub use pagination::Pagination;
pub use price::{Price, format_price};
pub use resource_card::ResourceCard;
pub use search_bar::SearchBar;
