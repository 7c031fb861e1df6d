use super::ExchangeFormat;
use crate::domain::a001_asset::aggregate::{
    initials_of, Asset, AssetId, AssetStatus, AssetType, AssignedUser, AuditStatus,
};
use crate::shared::date_utils::parse_flexible_date;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Fatal import failure: nothing from the file is accepted
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid JSON format: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid CSV: {0}")]
    InvalidCsv(#[from] csv::Error),

    #[error("File is empty")]
    EmptyFile,

    #[error("{0} files cannot be imported")]
    UnsupportedFormat(&'static str),
}

/// Asset-shaped record read from a file, every field optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDto {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub status: Option<String>,
    pub assigned_user_name: Option<String>,
    pub assigned_user_initials: Option<String>,
    pub location: Option<String>,
    pub last_verified: Option<String>,
    pub category: Option<String>,
    pub audit_status: Option<String>,
}

/// Accepted records plus one message per rejected record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub valid: Vec<Asset>,
    pub errors: Vec<String>,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

}

/// Parse file content into asset-shaped records
pub fn parse_import(format: ExchangeFormat, content: &str) -> Result<Vec<AssetDto>, ImportError> {
    match format {
        ExchangeFormat::Json => parse_json(content),
        // Excel files arriving as text are delimited exports
        ExchangeFormat::Csv | ExchangeFormat::Excel => parse_csv(content),
        ExchangeFormat::Pdf => Err(ImportError::UnsupportedFormat(format.label())),
    }
}

/// Delimited text with a header row; `;` or `,` separated, BOM tolerated
pub fn parse_csv(content: &str) -> Result<Vec<AssetDto>, ImportError> {
    let content = content.trim_start_matches('\u{FEFF}');
    let first_line = content.lines().next().unwrap_or_default();
    let delimiter = if first_line.matches(';').count() > first_line.matches(',').count() {
        b';'
    } else {
        b','
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(delimiter)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    dtos_from_rows(rows)
}

/// An array of records or a single record
pub fn parse_json(content: &str) -> Result<Vec<AssetDto>, ImportError> {
    if content.trim().is_empty() {
        return Err(ImportError::EmptyFile);
    }
    let data: Value = serde_json::from_str(content)?;
    let items = match data {
        Value::Array(items) => items,
        other => vec![other],
    };
    Ok(items.iter().map(dto_from_json).collect())
}

fn dto_from_json(value: &Value) -> AssetDto {
    let field = |key: &str| json_text(value.get(key));
    let user = value.get("assignedUser");
    AssetDto {
        id: field("id"),
        name: field("name"),
        asset_type: field("type"),
        status: field("status"),
        assigned_user_name: json_text(user.and_then(|u| u.get("name"))),
        assigned_user_initials: json_text(user.and_then(|u| u.get("initials"))),
        location: field("location"),
        last_verified: field("lastVerified"),
        category: field("category"),
        audit_status: field("auditStatus"),
    }
}

fn json_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => non_blank(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Map raw rows (first row = titles) to records by case-insensitive column title.
///
/// Used for delimited text and for spreadsheets read in the browser. Rows
/// with every cell blank are skipped.
pub fn dtos_from_rows(rows: Vec<Vec<String>>) -> Result<Vec<AssetDto>, ImportError> {
    let mut rows = rows.into_iter();
    let headers = rows.next().ok_or(ImportError::EmptyFile)?;

    let mut columns: HashMap<usize, &'static str> = HashMap::new();
    for (idx, header) in headers.iter().enumerate() {
        let normalized: String = header
            .trim()
            .trim_matches('"')
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        let field = match normalized.as_str() {
            "asset id" | "id" => "id",
            "name" | "asset name" => "name",
            "type" => "type",
            "status" => "status",
            "assigned user" | "assigneduser" | "owner" => "assignedUser",
            "location" => "location",
            "last verified" | "lastverified" => "lastVerified",
            "category" => "category",
            "audit status" | "auditstatus" => "auditStatus",
            _ => continue,
        };
        columns.insert(idx, field);
    }

    let mut dtos = Vec::new();
    for row in rows {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut dto = AssetDto::default();
        for (idx, cell) in row.iter().enumerate() {
            let Some(field) = columns.get(&idx) else {
                continue;
            };
            let value = non_blank(cell);
            match *field {
                "id" => dto.id = value,
                "name" => dto.name = value,
                "type" => dto.asset_type = value,
                "status" => dto.status = value,
                "assignedUser" => dto.assigned_user_name = value,
                "location" => dto.location = value,
                "lastVerified" => dto.last_verified = value,
                "category" => dto.category = value,
                "auditStatus" => dto.audit_status = value,
                _ => {}
            }
        }
        dtos.push(dto);
    }
    Ok(dtos)
}

/// Check required fields and fill defaults.
///
/// Rejected records get one message each ("Row N: ..."; N counts the header
/// row, so the first record is row 2). Rejections never abort the batch.
pub fn validate_asset_data(dtos: Vec<AssetDto>, now: DateTime<Utc>) -> ImportReport {
    let mut report = ImportReport::default();
    for (index, dto) in dtos.into_iter().enumerate() {
        match validate_one(dto, now) {
            Ok(asset) => report.valid.push(asset),
            Err(row_errors) => report
                .errors
                .push(format!("Row {}: {}", index + 2, row_errors.join(", "))),
        }
    }
    if !report.errors.is_empty() {
        log::warn!("Import rejected {} records", report.errors.len());
    }
    report
}

fn validate_one(dto: AssetDto, now: DateTime<Utc>) -> Result<Asset, Vec<String>> {
    let mut errors = Vec::new();

    if dto.id.is_none() {
        errors.push("Asset ID is required".to_string());
    }
    if dto.name.is_none() {
        errors.push("Name is required".to_string());
    }
    let asset_type = match dto.asset_type.as_deref() {
        None => {
            errors.push("Type is required".to_string());
            None
        }
        Some(raw) => {
            let parsed = AssetType::from_label(raw);
            if parsed.is_none() {
                errors.push(format!("Type '{}' is not recognized", raw));
            }
            parsed
        }
    };
    let status = match dto.status.as_deref() {
        None => {
            errors.push("Status is required".to_string());
            None
        }
        Some(raw) => {
            let parsed = AssetStatus::from_label(raw);
            if parsed.is_none() {
                errors.push(format!("Status '{}' is not recognized", raw));
            }
            parsed
        }
    };
    if dto.assigned_user_name.is_none() {
        errors.push("Assigned User is required".to_string());
    }
    if dto.location.is_none() {
        errors.push("Location is required".to_string());
    }
    let last_verified = match dto.last_verified.as_deref() {
        None => Some(now),
        Some(raw) => {
            let parsed = parse_flexible_date(raw);
            if parsed.is_none() {
                errors.push(format!("Last Verified '{}' is not a valid date", raw));
            }
            parsed
        }
    };
    let audit_status = match dto.audit_status.as_deref() {
        None => Some(AuditStatus::Pending),
        Some(raw) => {
            let parsed = AuditStatus::from_label(raw);
            if parsed.is_none() {
                errors.push(format!("Audit Status '{}' is not recognized", raw));
            }
            parsed
        }
    };

    match (
        dto.id,
        dto.name,
        asset_type,
        status,
        dto.assigned_user_name,
        dto.location,
        last_verified,
        audit_status,
    ) {
        (
            Some(id),
            Some(name),
            Some(asset_type),
            Some(status),
            Some(user_name),
            Some(location),
            Some(last_verified),
            Some(audit_status),
        ) if errors.is_empty() => {
            let initials = dto
                .assigned_user_initials
                .unwrap_or_else(|| initials_of(&user_name));
            Ok(Asset {
                id: AssetId::new(id),
                name,
                asset_type,
                status,
                assigned_user: AssignedUser {
                    name: user_name,
                    initials,
                },
                location,
                last_verified,
                category: dto
                    .category
                    .unwrap_or_else(|| asset_type.label().to_string()),
                audit_status,
            })
        }
        _ => Err(errors),
    }
}
