pub(crate) mod artist_card;
pub(crate) mod footer;
pub(crate) mod header;
pub(crate) mod search;
