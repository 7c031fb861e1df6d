pub mod badge;

pub use badge::{AssetStatusBadge, Badge};
