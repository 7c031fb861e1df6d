pub mod add_asset;
pub mod list;
pub mod stats;
