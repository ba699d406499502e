//! Wire types shared between the HTTP server and its clients.
//!
//! Amounts cross the wire as decimal units (`45.5`); dates as canonical ISO
//! `YYYY-MM-DD` strings. Everything internal to the ledger (integer cents,
//! typed kinds) stays out of this crate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionKind {
        Income,
        Expense,
    }

    /// Amount as clients may send it: a JSON number or a decimal string.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum Amount {
        Number(f64),
        Text(String),
    }

    /// Request body for creating a transaction.
    ///
    /// Everything is optional at this layer; the ledger's validator is the
    /// single place that decides what is missing or malformed.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub description: Option<String>,
        pub amount: Option<Amount>,
        pub category: Option<String>,
        pub date: Option<String>,
        #[serde(rename = "type")]
        pub kind: Option<String>,
    }

    /// A stored transaction as returned to clients.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: i64,
        pub description: String,
        pub amount: f64,
        pub category: String,
        pub date: NaiveDate,
        #[serde(rename = "type")]
        pub kind: TransactionKind,
    }

    /// Response body for deleting one transaction.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct TransactionDeleted {
        pub deleted: i64,
    }

    /// Response body for deleting every transaction.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct TransactionsCleared {
        pub deleted_all: bool,
        pub count: u64,
    }
}

pub mod stats {
    use super::*;

    /// Expense total for a single category.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct CategoryTotal {
        pub category: String,
        pub total: f64,
    }

    /// Aggregate view over the whole record set.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Statistic {
        pub income: f64,
        pub expenses: f64,
        pub balance: f64,
        pub by_category: Vec<CategoryTotal>,
    }
}

pub mod health {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Health {
        pub status: String,
    }
}

#[cfg(test)]
mod tests {
    use super::transaction::{Amount, TransactionNew};

    #[test]
    fn amount_deserializes_from_number_or_string() {
        let body = r#"{"description":"x","amount":45.5,"date":"2024-01-05","type":"expense"}"#;
        let new: TransactionNew = serde_json::from_str(body).unwrap();
        assert_eq!(new.amount, Some(Amount::Number(45.5)));

        let body = r#"{"description":"x","amount":"45.50","date":"2024-01-05","type":"expense"}"#;
        let new: TransactionNew = serde_json::from_str(body).unwrap();
        assert_eq!(new.amount, Some(Amount::Text("45.50".to_string())));
    }

    #[test]
    fn kind_uses_the_type_key() {
        let body = r#"{"type":"income"}"#;
        let new: TransactionNew = serde_json::from_str(body).unwrap();
        assert_eq!(new.kind.as_deref(), Some("income"));
    }
}
