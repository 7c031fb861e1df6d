pub mod filter_tag;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
pub mod ui;
