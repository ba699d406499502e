//! Personal finance ledger: validated income/expense records backed by a
//! relational store, plus aggregate statistics over them.
//!
//! [`Ledger`] is the only entry point. It owns a database connection passed
//! in at construction and exposes the handful of operations a transport
//! layer needs: list, add, remove, remove all, statistics.

use chrono::{Days, Utc};
use sea_orm::DatabaseConnection;

pub use draft::{AmountInput, DEFAULT_CATEGORY, RecordDraft, RecordPayload};
pub use error::LedgerError;
pub use money::MoneyCents;
pub use records::{Record, RecordKind};
pub use statistics::{CategoryTotal, Statistics};

mod draft;
mod error;
mod money;
mod records;
mod statistics;

type ResultLedger<T> = Result<T, LedgerError>;

/// Service facade over the record store.
///
/// Holds no state beyond the connection; every operation is a short,
/// self-contained unit of work that reflects the latest committed rows.
#[derive(Clone, Debug)]
pub struct Ledger {
    database: DatabaseConnection,
}

impl Ledger {
    /// Creates a ledger on top of an already connected (and migrated)
    /// database.
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }

    /// Returns all records, ascending by date with id as tie-break.
    pub async fn transactions(&self) -> ResultLedger<Vec<Record>> {
        records::all(&self.database).await
    }

    /// Validates a payload and persists it as a new record.
    ///
    /// Validation failures surface as [`LedgerError::Validation`] before
    /// anything is written; a create either fully succeeds or leaves the
    /// store untouched.
    pub async fn add(&self, payload: &RecordPayload) -> ResultLedger<Record> {
        let draft = RecordDraft::from_payload(payload)?;
        records::insert(&self.database, &draft).await
    }

    /// Removes one record by id.
    ///
    /// Returns [`LedgerError::NotFound`] when no record has that id, so
    /// callers can tell a real deletion from a no-op.
    pub async fn remove(&self, id: i64) -> ResultLedger<()> {
        if records::delete(&self.database, id).await? {
            Ok(())
        } else {
            Err(LedgerError::NotFound("record not exists".to_string()))
        }
    }

    /// Removes every record and returns how many there were.
    pub async fn remove_all(&self) -> ResultLedger<u64> {
        records::delete_all(&self.database).await
    }

    /// Recomputes aggregate statistics from the current record set.
    pub async fn statistics(&self) -> ResultLedger<Statistics> {
        let records = records::all(&self.database).await?;
        Ok(Statistics::compute(&records))
    }

    /// Seeds a handful of sample records into an **empty** store.
    ///
    /// Returns `false` without writing anything when records already exist,
    /// so repeated startups never duplicate the samples. Dates are relative
    /// to today to keep a demo instance looking current.
    pub async fn seed_sample_data(&self) -> ResultLedger<bool> {
        if !records::all(&self.database).await?.is_empty() {
            return Ok(false);
        }

        let today = Utc::now().date_naive();
        let samples: [(&str, i64, &str, u64, RecordKind); 5] = [
            ("Salary", 120_000, "Income", 40, RecordKind::Income),
            ("Groceries", 4_550, "Food", 10, RecordKind::Expense),
            ("Bus pass", 2_000, "Transport", 9, RecordKind::Expense),
            ("Movie night", 1_225, "Entertainment", 7, RecordKind::Expense),
            ("Freelance", 20_000, "Income", 5, RecordKind::Income),
        ];

        for (description, cents, category, days_ago, kind) in samples {
            let draft = RecordDraft {
                description: description.to_string(),
                amount: MoneyCents::new(cents),
                category: category.to_string(),
                date: today
                    .checked_sub_days(Days::new(days_ago))
                    .unwrap_or(today),
                kind,
            };
            records::insert(&self.database, &draft).await?;
        }

        Ok(true)
    }
}
