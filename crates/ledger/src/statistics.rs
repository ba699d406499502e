//! Aggregate views over the record set.
//!
//! Totals are recomputed from scratch on every call. The record set of a
//! single household stays small, so a full pass is the simplest design that
//! can never serve stale numbers.

use std::collections::BTreeMap;

use crate::{MoneyCents, records::{Record, RecordKind}};

/// Expense total for one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: MoneyCents,
}

/// Income/expense totals, their signed difference, and the per-category
/// expense breakdown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    pub income: MoneyCents,
    pub expenses: MoneyCents,
    pub balance: MoneyCents,
    pub by_category: Vec<CategoryTotal>,
}

impl Statistics {
    /// Computes all aggregates in one pass over the records.
    ///
    /// Income records never contribute to the category breakdown, and
    /// categories without expenses are omitted rather than listed at zero.
    /// Breakdown entries come out sorted by category label, so equal inputs
    /// always produce equal output.
    pub fn compute(records: &[Record]) -> Self {
        let mut income = MoneyCents::ZERO;
        let mut expenses = MoneyCents::ZERO;
        let mut categories: BTreeMap<&str, MoneyCents> = BTreeMap::new();

        for record in records {
            match record.kind {
                RecordKind::Income => income += record.amount,
                RecordKind::Expense => {
                    expenses += record.amount;
                    *categories
                        .entry(record.category.as_str())
                        .or_insert(MoneyCents::ZERO) += record.amount;
                }
            }
        }

        let by_category = categories
            .into_iter()
            .map(|(category, total)| CategoryTotal {
                category: category.to_string(),
                total,
            })
            .collect();

        Self {
            income,
            expenses,
            balance: income - expenses,
            by_category,
        }
    }
}
