use super::{ExchangeFormat, CSV_HEADERS};
use crate::domain::a001_asset::aggregate::Asset;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No assets to export")]
    NothingToExport,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write export: {0}")]
    Write(String),

    #[error("Download failed: {0}")]
    Delivery(String),
}

/// Receives the records chosen for export (browser download, tests)
pub trait ExportSink {
    fn deliver(
        &mut self,
        format: ExchangeFormat,
        assets: &[Asset],
        today: NaiveDate,
    ) -> Result<(), ExportError>;
}

/// Rendered file ready for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

/// "assets-2024-01-15.csv"
pub fn export_file_name(format: ExchangeFormat, today: NaiveDate) -> String {
    format!("assets-{}.{}", today.format("%Y-%m-%d"), format.extension())
}

pub fn render_export(
    format: ExchangeFormat,
    assets: &[Asset],
    today: NaiveDate,
) -> Result<ExportDocument, ExportError> {
    if assets.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    let (mime_type, content) = match format {
        ExchangeFormat::Csv => ("text/csv;charset=utf-8;", to_delimited(assets, b',')?),
        ExchangeFormat::Excel => {
            // UTF-8 BOM so spreadsheet apps detect the encoding
            let mut content = String::from('\u{FEFF}');
            content.push_str(&to_delimited(assets, b';')?);
            ("text/csv;charset=utf-8;", content)
        }
        ExchangeFormat::Json => ("application/json", serde_json::to_string_pretty(assets)?),
        ExchangeFormat::Pdf => ("text/html;charset=utf-8", to_html_report(assets, today)),
    };
    Ok(ExportDocument {
        file_name: export_file_name(format, today),
        mime_type,
        content,
    })
}

fn to_delimited(assets: &[Asset], delimiter: u8) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;
    for asset in assets {
        let last_verified = asset.last_verified.format("%Y-%m-%d").to_string();
        writer.write_record([
            asset.id.as_str(),
            asset.name.as_str(),
            asset.asset_type.label(),
            asset.status.label(),
            asset.assigned_user.name.as_str(),
            asset.location.as_str(),
            last_verified.as_str(),
            asset.category.as_str(),
            asset.audit_status.label(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Write(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Write(e.to_string()))
}

/// Printable "Asset Registry Report" table
pub fn to_html_report(assets: &[Asset], today: NaiveDate) -> String {
    let rows: String = assets
        .iter()
        .map(|a| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(a.id.as_str()),
                escape_html(&a.name),
                a.asset_type.label(),
                a.status.label(),
                escape_html(&a.assigned_user.name),
                escape_html(&a.location),
                a.last_verified.format("%Y-%m-%d"),
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>Asset Registry Report</title>
<style>
body {{ font-family: Arial, sans-serif; margin: 20px; }}
table {{ width: 100%; border-collapse: collapse; margin-top: 20px; }}
th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}
th {{ background-color: #f2f2f2; font-weight: bold; }}
.header {{ text-align: center; margin-bottom: 20px; }}
</style>
</head>
<body onload="window.print()">
<div class="header">
<h1>Asset Registry Report</h1>
<p>Generated on {generated}</p>
</div>
<table>
<thead>
<tr><th>Asset ID</th><th>Name</th><th>Type</th><th>Status</th><th>Assigned User</th><th>Location</th><th>Last Verified</th></tr>
</thead>
<tbody>
{rows}</tbody>
</table>
</body>
</html>
"#,
        generated = today.format("%Y-%m-%d"),
        rows = rows,
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_asset::exchange::import::{parse_import, validate_asset_data};
    use crate::domain::a001_asset::test_support::asset;
    use chrono::Utc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    fn assets() -> Vec<Asset> {
        vec![
            asset("AST-001", "Dell Monitor 27\"", "Hardware", "Active", "Emma Wilson", "New York Office", "2024-01-12"),
            asset("AST-002", "Fleet, Van", "Vehicle", "Needs Audit", "Alex Rodriguez", "San Francisco", "2023-11-20"),
        ]
    }

    #[test]
    fn test_csv_export() {
        let doc = render_export(ExchangeFormat::Csv, &assets(), today()).unwrap();
        assert_eq!(doc.file_name, "assets-2024-02-01.csv");
        let mut lines = doc.content.lines();
        assert_eq!(
            lines.next(),
            Some("Asset ID,Name,Type,Status,Assigned User,Location,Last Verified,Category,Audit Status")
        );
        assert_eq!(
            lines.next(),
            Some("AST-001,\"Dell Monitor 27\"\"\",Hardware,Active,Emma Wilson,New York Office,2024-01-12,Hardware,Up to Date")
        );
        assert_eq!(
            lines.next(),
            Some("AST-002,\"Fleet, Van\",Vehicle,Needs Audit,Alex Rodriguez,San Francisco,2023-11-20,Vehicle,Up to Date")
        );
    }

    #[test]
    fn test_excel_export_has_bom_and_semicolons() {
        let doc = render_export(ExchangeFormat::Excel, &assets(), today()).unwrap();
        assert_eq!(doc.file_name, "assets-2024-02-01.xlsx");
        assert!(doc.content.starts_with("\u{FEFF}Asset ID;Name;Type"));
    }

    #[test]
    fn test_empty_export_is_error() {
        assert!(matches!(
            render_export(ExchangeFormat::Json, &[], today()),
            Err(ExportError::NothingToExport)
        ));
    }

    #[test]
    fn test_html_report_escapes() {
        let html = to_html_report(&assets(), today());
        assert!(html.contains("Generated on 2024-02-01"));
        assert!(html.contains("<td>Dell Monitor 27&quot;</td>"));
    }

    #[test]
    fn test_json_round_trip() {
        let doc = render_export(ExchangeFormat::Json, &assets(), today()).unwrap();
        let dtos = parse_import(ExchangeFormat::Json, &doc.content).unwrap();
        let report = validate_asset_data(dtos, Utc::now());
        assert!(report.is_clean());
        assert_eq!(report.valid, assets());
    }

    #[test]
    fn test_csv_round_trip() {
        for format in [ExchangeFormat::Csv, ExchangeFormat::Excel] {
            let doc = render_export(format, &assets(), today()).unwrap();
            let dtos = parse_import(format, &doc.content).unwrap();
            let report = validate_asset_data(dtos, Utc::now());
            assert_eq!(report.valid.len(), 2, "{:?}", format);
            assert_eq!(report.valid[1].name, "Fleet, Van");
        }
    }
}
