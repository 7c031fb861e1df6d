//! Import and export of asset records (CSV, Excel, JSON, printable report).
//!
//! Only data shaping lives here; reading files and triggering downloads is
//! up to the caller.

pub mod export;
pub mod import;

pub use export::{render_export, ExportDocument, ExportError, ExportSink};
pub use import::{parse_import, validate_asset_data, AssetDto, ImportError, ImportReport};

use serde::{Deserialize, Serialize};

/// File format offered in the import/export menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeFormat {
    Csv,
    Json,
    Excel,
    Pdf,
}

impl ExchangeFormat {
    pub const ALL: [ExchangeFormat; 4] = [
        ExchangeFormat::Csv,
        ExchangeFormat::Json,
        ExchangeFormat::Excel,
        ExchangeFormat::Pdf,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExchangeFormat::Csv => "CSV",
            ExchangeFormat::Json => "JSON",
            ExchangeFormat::Excel => "Excel",
            ExchangeFormat::Pdf => "PDF",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExchangeFormat::Csv => "csv",
            ExchangeFormat::Json => "json",
            ExchangeFormat::Excel => "xlsx",
            ExchangeFormat::Pdf => "pdf",
        }
    }

    /// `accept` attribute of the file picker
    pub fn accept(&self) -> &'static str {
        match self {
            ExchangeFormat::Csv => ".csv",
            ExchangeFormat::Json => ".json",
            ExchangeFormat::Excel => ".xlsx,.xls",
            ExchangeFormat::Pdf => ".pdf",
        }
    }

    pub fn can_import(&self) -> bool {
        !matches!(self, ExchangeFormat::Pdf)
    }
}

/// Column titles shared by CSV and Excel files
pub const CSV_HEADERS: [&str; 9] = [
    "Asset ID",
    "Name",
    "Type",
    "Status",
    "Assigned User",
    "Location",
    "Last Verified",
    "Category",
    "Audit Status",
];
