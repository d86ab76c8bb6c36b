pub(crate) mod error_page;
pub(crate) mod filter_page;
pub(crate) mod home_page;
pub(crate) mod not_found;
pub(crate) mod profile;
pub(crate) mod search_page;
