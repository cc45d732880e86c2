//! Ledger model
//!
//! The ledger is the top-level aggregate: every monthly record, keyed by
//! month, plus the counter expense ids are drawn from.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ids::{ExpenseId, IdCounter};
use super::month::Month;
use super::record::MonthlyRecord;

/// All monthly records of one household
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    records: BTreeMap<Month, MonthlyRecord>,
    #[serde(default)]
    id_counter: IdCounter,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from existing records
    ///
    /// Later records for an already-seen month are ignored, and the id
    /// counter is raised past every id present.
    pub fn from_records(records: impl IntoIterator<Item = MonthlyRecord>) -> Self {
        let mut ledger = Self::new();
        for record in records {
            ledger.add_record(record);
        }
        ledger
    }

    /// Get the record for a month; never creates one
    pub fn get_record(&self, month: Month) -> Option<&MonthlyRecord> {
        self.records.get(&month)
    }

    pub fn get_record_mut(&mut self, month: Month) -> Option<&mut MonthlyRecord> {
        self.records.get_mut(&month)
    }

    pub fn contains(&self, month: Month) -> bool {
        self.records.contains_key(&month)
    }

    /// Insert a record unless its month already has one
    ///
    /// Returns `true` if the record was inserted. An existing record keeps
    /// its identity and contents.
    pub fn add_record(&mut self, record: MonthlyRecord) -> bool {
        if self.records.contains_key(&record.month()) {
            return false;
        }
        if let Some(max_id) = record.expenses().map(|e| e.id).max() {
            self.id_counter.bump_past(max_id);
        }
        self.records.insert(record.month(), record);
        true
    }

    /// All `(month, record)` pairs in chronological order
    pub fn iter(&self) -> impl Iterator<Item = (&Month, &MonthlyRecord)> {
        self.records.iter()
    }

    /// Records in chronological order
    pub fn records(&self) -> impl Iterator<Item = &MonthlyRecord> {
        self.records.values()
    }

    /// Mutable access to every record from `month` onward
    pub fn records_from_mut(
        &mut self,
        month: Month,
    ) -> impl Iterator<Item = &mut MonthlyRecord> {
        self.records.range_mut(month..).map(|(_, record)| record)
    }

    pub fn months(&self) -> impl Iterator<Item = Month> + '_ {
        self.records.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first_month(&self) -> Option<Month> {
        self.records.keys().next().copied()
    }

    pub fn last_month(&self) -> Option<Month> {
        self.records.keys().next_back().copied()
    }

    /// Allocate a fresh expense id
    pub fn next_expense_id(&mut self) -> ExpenseId {
        self.id_counter.next_id()
    }

    /// Raise the id counter past every stored id
    ///
    /// Run after deserialising, since a hand-edited or older file may carry
    /// a counter lower than the ids it contains.
    pub fn reconcile_ids(&mut self) {
        let max_id = self
            .records
            .values()
            .flat_map(|r| r.expenses().map(|e| e.id))
            .max();
        if let Some(max_id) = max_id {
            self.id_counter.bump_past(max_id);
        }
    }
}
