//! Storage layer for MoneyCount
//!
//! Provides JSON file storage with atomic writes and a session guard that
//! saves the ledger once per command.

pub mod file_io;
pub mod ledger;
pub mod session;

pub use file_io::{read_json_required, write_json_atomic};
pub use ledger::{LedgerDocument, LedgerRepository, LEDGER_SCHEMA_VERSION};
pub use session::LedgerSession;
