//! YAML export
//!
//! Same content as the JSON export, for people who prefer to read it.

use std::io::Write;

use crate::error::{MoneyCountError, MoneyCountResult};
use crate::export::json::FullExport;
use crate::models::Ledger;

/// Export the full ledger to YAML format
pub fn export_full_yaml<W: Write>(ledger: &Ledger, mut writer: W) -> MoneyCountResult<()> {
    let export = FullExport::new(ledger);

    let header = format!(
        "# MoneyCount ledger export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| MoneyCountError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| MoneyCountError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Month};
    use crate::services::BudgetService;

    #[test]
    fn test_yaml_export() {
        let mut ledger = Ledger::new();
        let mut service = BudgetService::open(&mut ledger, Month::new(2025, 1).unwrap());
        service
            .add_expense("Groceries", Money::from_units(85), false)
            .unwrap();

        let mut output = Vec::new();
        export_full_yaml(&ledger, &mut output).unwrap();
        let yaml_string = String::from_utf8(output).unwrap();

        assert!(yaml_string.starts_with("# MoneyCount ledger export"));
        assert!(yaml_string.contains("schema_version: 1.0.0"));
        assert!(yaml_string.contains("2025-01"));
        assert!(yaml_string.contains("name: Groceries"));
    }
}
