//! Ledger repository
//!
//! Persists the whole ledger as one JSON document. A missing or unreadable
//! file loads as "no ledger" so the caller can start fresh; an unreadable
//! file is moved aside first so the next save cannot clobber it.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{MoneyCountError, MoneyCountResult};
use crate::models::Ledger;

use super::file_io::{read_json_required, write_json_atomic};

/// Current on-disk schema version of the ledger document
pub const LEDGER_SCHEMA_VERSION: u32 = 1;

/// On-disk wrapper around the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerDocument {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    pub ledger: Ledger,
}

#[derive(Serialize)]
struct LedgerDocumentRef<'a> {
    schema_version: u32,
    saved_at: DateTime<Utc>,
    ledger: &'a Ledger,
}

impl LedgerDocument {
    /// Parse and check a ledger document from a file
    pub fn read(path: &Path) -> MoneyCountResult<Self> {
        let document: LedgerDocument = read_json_required(path)?;
        document.check_version(path)?;
        Ok(document)
    }

    /// Reject documents written by a newer schema
    pub fn check_version(&self, path: &Path) -> MoneyCountResult<()> {
        if self.schema_version > LEDGER_SCHEMA_VERSION {
            return Err(MoneyCountError::Storage(format!(
                "{} uses schema version {}, newer than supported version {}",
                path.display(),
                self.schema_version,
                LEDGER_SCHEMA_VERSION
            )));
        }
        Ok(())
    }
}

/// Repository for the ledger file
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    path: PathBuf,
}

impl LedgerRepository {
    /// Create a new repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the ledger from disk
    ///
    /// Returns `Ok(None)` if there is no file, or if the file cannot be
    /// parsed (after moving it aside). A file written by a newer schema is
    /// an error, since treating it as absent would overwrite it.
    pub fn load(&self) -> MoneyCountResult<Option<Ledger>> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "no ledger file, starting empty");
            return Ok(None);
        }

        let document: LedgerDocument = match read_json_required(&self.path) {
            Ok(document) => document,
            Err(err) => {
                let quarantined = self.quarantine()?;
                warn!(
                    path = %self.path.display(),
                    moved_to = %quarantined.display(),
                    error = %err,
                    "ledger file unreadable, starting empty"
                );
                return Ok(None);
            }
        };
        document.check_version(&self.path)?;

        let mut ledger = document.ledger;
        ledger.reconcile_ids();
        debug!(
            path = %self.path.display(),
            months = ledger.len(),
            saved_at = %document.saved_at,
            "loaded ledger"
        );
        Ok(Some(ledger))
    }

    /// Save the whole ledger, replacing the previous file
    pub fn save(&self, ledger: &Ledger) -> MoneyCountResult<()> {
        let document = LedgerDocumentRef {
            schema_version: LEDGER_SCHEMA_VERSION,
            saved_at: Utc::now(),
            ledger,
        };
        write_json_atomic(&self.path, &document)?;
        debug!(path = %self.path.display(), months = ledger.len(), "saved ledger");
        Ok(())
    }

    /// Move an unreadable ledger file out of the way
    fn quarantine(&self) -> MoneyCountResult<PathBuf> {
        let stamp = Utc::now().format("%Y%m%d-%H%M%S");
        let target = self
            .path
            .with_file_name(format!("ledger.corrupt-{}.json", stamp));
        fs::rename(&self.path, &target).map_err(|e| {
            MoneyCountError::Storage(format!(
                "Failed to move unreadable ledger {} aside: {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(target)
    }
}
