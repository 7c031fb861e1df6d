use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Unique asset identifier, e.g. "AST-001" or "AST-2024-0042"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(pub String);

impl AssetId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// ============================================================================
// Enumerations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssetType {
    Hardware,
    Software,
    Vehicle,
    Equipment,
}

impl AssetType {
    pub const ALL: [AssetType; 4] = [
        AssetType::Hardware,
        AssetType::Software,
        AssetType::Vehicle,
        AssetType::Equipment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AssetType::Hardware => "Hardware",
            AssetType::Software => "Software",
            AssetType::Vehicle => "Vehicle",
            AssetType::Equipment => "Equipment",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(label.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssetStatus {
    Active,
    #[serde(rename = "Needs Audit")]
    NeedsAudit,
    Inactive,
    Maintenance,
}

impl AssetStatus {
    pub const ALL: [AssetStatus; 4] = [
        AssetStatus::Active,
        AssetStatus::NeedsAudit,
        AssetStatus::Inactive,
        AssetStatus::Maintenance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AssetStatus::Active => "Active",
            AssetStatus::NeedsAudit => "Needs Audit",
            AssetStatus::Inactive => "Inactive",
            AssetStatus::Maintenance => "Maintenance",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AuditStatus {
    #[serde(rename = "Up to Date")]
    UpToDate,
    Overdue,
    Pending,
}

impl AuditStatus {
    pub const ALL: [AuditStatus; 3] = [
        AuditStatus::UpToDate,
        AuditStatus::Overdue,
        AuditStatus::Pending,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AuditStatus::UpToDate => "Up to Date",
            AuditStatus::Overdue => "Overdue",
            AuditStatus::Pending => "Pending",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(label.trim()))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Denormalized owner reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedUser {
    pub name: String,
    pub initials: String,
}

impl AssignedUser {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let initials = initials_of(&name);
        Self { name, initials }
    }
}

/// Uppercased first letters of each word: "Sarah Johnson" -> "SJ"
pub fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Asset registry record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub status: AssetStatus,
    pub assigned_user: AssignedUser,
    pub location: String,
    pub last_verified: DateTime<Utc>,
    pub category: String,
    pub audit_status: AuditStatus,
}

impl Asset {
    pub fn last_verified_millis(&self) -> i64 {
        self.last_verified.timestamp_millis()
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Manual "Add asset" form
#[derive(Debug, Clone, PartialEq)]
pub struct NewAssetForm {
    pub name: String,
    pub asset_type: AssetType,
    pub status: AssetStatus,
    pub owner: String,
    pub location: String,
    pub last_verified: NaiveDate,
}

impl NewAssetForm {
    /// Data validation
    pub fn validate(&self) -> Result<(), String> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("Name is required");
        }
        if self.owner.trim().is_empty() {
            missing.push("Owner is required");
        }
        if self.location.trim().is_empty() {
            missing.push("Location is required");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing.join(", "))
        }
    }

    /// Build the record; category mirrors the type and the audit starts as pending
    pub fn into_asset(self, id: AssetId) -> Asset {
        let last_verified = self
            .last_verified
            .and_hms_opt(0, 0, 0)
            .map(|dt| Utc.from_utc_datetime(&dt))
            .unwrap_or_else(Utc::now);
        Asset {
            id,
            name: self.name.trim().to_string(),
            asset_type: self.asset_type,
            status: self.status,
            assigned_user: AssignedUser::new(self.owner.trim()),
            location: self.location.trim().to_string(),
            last_verified,
            category: self.asset_type.label().to_string(),
            audit_status: AuditStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials_of("Sarah Johnson"), "SJ");
        assert_eq!(initials_of("  alex  de rodriguez "), "ADR");
        assert_eq!(initials_of(""), "");
    }

    #[test]
    fn test_labels_round_trip() {
        for t in AssetType::ALL {
            assert_eq!(AssetType::from_label(t.label()), Some(t));
        }
        assert_eq!(AssetStatus::from_label("needs audit"), Some(AssetStatus::NeedsAudit));
        assert_eq!(AuditStatus::from_label("Up to Date"), Some(AuditStatus::UpToDate));
        assert_eq!(AssetType::from_label("Furniture"), None);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_value(AssetStatus::NeedsAudit).unwrap();
        assert_eq!(json, "Needs Audit");
        let json = serde_json::to_value(AuditStatus::UpToDate).unwrap();
        assert_eq!(json, "Up to Date");
    }

    #[test]
    fn test_form_validation() {
        let form = NewAssetForm {
            name: " ".to_string(),
            asset_type: AssetType::Hardware,
            status: AssetStatus::Active,
            owner: "Emma Wilson".to_string(),
            location: String::new(),
            last_verified: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };
        assert_eq!(
            form.validate().unwrap_err(),
            "Name is required, Location is required"
        );
    }

    #[test]
    fn test_form_into_asset() {
        let form = NewAssetForm {
            name: "Forklift".to_string(),
            asset_type: AssetType::Equipment,
            status: AssetStatus::Active,
            owner: "James Taylor".to_string(),
            location: "Austin Office".to_string(),
            last_verified: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        let asset = form.into_asset(AssetId::from("AST-2024-0001"));
        assert_eq!(asset.assigned_user.initials, "JT");
        assert_eq!(asset.category, "Equipment");
        assert_eq!(asset.audit_status, AuditStatus::Pending);
        assert_eq!(asset.last_verified.to_rfc3339(), "2024-03-01T00:00:00+00:00");
    }
}
