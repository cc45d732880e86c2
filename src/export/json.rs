//! JSON export
//!
//! Exports the complete ledger with schema versioning and a few counts for
//! reference.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{MoneyCountError, MoneyCountResult};
use crate::models::{Ledger, Month};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize)]
pub struct FullExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    pub metadata: ExportMetadata,

    pub ledger: &'a Ledger,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    pub month_count: usize,
    pub expense_count: usize,
    pub first_month: Option<Month>,
    pub last_month: Option<Month>,
}

impl<'a> FullExport<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        let metadata = ExportMetadata {
            month_count: ledger.len(),
            expense_count: ledger.records().map(|r| r.expense_count()).sum(),
            first_month: ledger.first_month(),
            last_month: ledger.last_month(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            metadata,
            ledger,
        }
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(ledger: &Ledger, writer: W, pretty: bool) -> MoneyCountResult<()> {
    let export = FullExport::new(ledger);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| MoneyCountError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::BudgetService;

    #[test]
    fn test_full_export() {
        let mut ledger = Ledger::new();
        let mut service = BudgetService::open(&mut ledger, Month::new(2025, 3).unwrap());
        service.set_income(Money::from_units(1800)).unwrap();
        service
            .add_expense("Gym", Money::from_units(30), true)
            .unwrap();
        service.advance_month();

        let mut output = Vec::new();
        export_full_json(&ledger, &mut output, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["metadata"]["month_count"], 2);
        assert_eq!(value["metadata"]["expense_count"], 2);
        assert_eq!(value["metadata"]["first_month"], "2025-03");
        assert_eq!(value["metadata"]["last_month"], "2025-04");
        assert_eq!(value["ledger"]["records"]["2025-03"]["income"], 180000);
    }

    #[test]
    fn test_empty_ledger_export() {
        let ledger = Ledger::new();
        let mut output = Vec::new();
        export_full_json(&ledger, &mut output, false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(value["metadata"]["month_count"], 0);
        assert!(value["metadata"]["first_month"].is_null());
    }
}
