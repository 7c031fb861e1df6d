pub mod components;
pub mod excel_importer;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod storage;
