use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One item line inside a shipment.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct ShipmentLine {
    #[serde(alias = "itemId")]
    pub item_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub quantity: u32,
}

/// A shipment as the remote system returns it.
///
/// Deployments disagree on field names and on how the status signal is
/// expressed, so every signal is optional and read under both spellings.
/// The client never invents a status; it only classifies what it got.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Shipment {
    pub id: String,
    #[serde(default, alias = "branchId")]
    pub branch_id: Option<String>,
    #[serde(default, alias = "medicineLines")]
    pub medicine_lines: Vec<ShipmentLine>,
    #[serde(default, alias = "deviceLines")]
    pub device_lines: Vec<ShipmentLine>,

    /// Enumerated status, when the remote sends one
    #[serde(default)]
    pub status: Option<String>,
    /// Boolean acceptance flag, either spelling
    #[serde(default, alias = "isAccepted")]
    pub accepted: Option<bool>,
    /// Boolean decline flag, either spelling
    #[serde(default, alias = "isRejected")]
    pub rejected: Option<bool>,
    /// Free-text reason, present only on declined shipments
    #[serde(default, alias = "rejectionReason", alias = "rejectReason")]
    pub rejection_reason: Option<String>,

    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        alias = "createdAt"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        alias = "sentAt"
    )]
    pub sent_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        alias = "updatedAt"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_camel_case_and_snake_case_records() {
        let camel: Shipment = serde_json::from_str(
            r#"{"id":"s1","branchId":"b1","isAccepted":true,"createdAt":1700000000000}"#,
        )
        .unwrap();
        assert_eq!(camel.branch_id.as_deref(), Some("b1"));
        assert_eq!(camel.accepted, Some(true));
        assert!(camel.created_at.is_some());

        let snake: Shipment = serde_json::from_str(
            r#"{"id":"s2","branch_id":"b2","rejection_reason":"damaged box"}"#,
        )
        .unwrap();
        assert_eq!(snake.branch_id.as_deref(), Some("b2"));
        assert_eq!(snake.rejection_reason.as_deref(), Some("damaged box"));
    }

    #[test]
    fn missing_signals_deserialize_as_absent() {
        let bare: Shipment = serde_json::from_str(r#"{"id":"s3"}"#).unwrap();
        assert_eq!(bare.status, None);
        assert_eq!(bare.accepted, None);
        assert_eq!(bare.rejected, None);
        assert_eq!(bare.rejection_reason, None);
        assert_eq!(bare.created_at, None);
        assert!(bare.medicine_lines.is_empty());
    }
}
