pub mod a001_asset;
