//! Record store: the `records` table and its CRUD primitives.
//!
//! A [`Record`] is a single income or expense transaction. The store assigns
//! ids (monotonically increasing, never reused) and guarantees a
//! deterministic listing order of ascending `(date, id)`.

use chrono::NaiveDate;
use sea_orm::{
    ActiveValue, DatabaseConnection, QueryOrder,
    entity::prelude::*,
};

use crate::{LedgerError, MoneyCents, draft::RecordDraft};

/// Whether a record represents money coming in or going out.
///
/// The stored amount is always positive; the kind carries the sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl TryFrom<&str> for RecordKind {
    type Error = LedgerError;

    /// Case-sensitive: only the exact strings `"income"` and `"expense"`
    /// are accepted.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(LedgerError::Validation("invalid type".to_string())),
        }
    }
}

/// A stored transaction record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub description: String,
    pub amount: MoneyCents,
    pub category: String,
    pub date: NaiveDate,
    pub kind: RecordKind,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub description: String,
    pub amount_minor: i64,
    pub category: String,
    pub date: Date,
    pub kind: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&RecordDraft> for ActiveModel {
    fn from(draft: &RecordDraft) -> Self {
        Self {
            // Left unset so the store assigns the next id.
            id: ActiveValue::NotSet,
            description: ActiveValue::Set(draft.description.clone()),
            amount_minor: ActiveValue::Set(draft.amount.cents()),
            category: ActiveValue::Set(draft.category.clone()),
            date: ActiveValue::Set(draft.date),
            kind: ActiveValue::Set(draft.kind.as_str().to_string()),
        }
    }
}

impl TryFrom<Model> for Record {
    type Error = LedgerError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            description: model.description,
            amount: MoneyCents::new(model.amount_minor),
            category: model.category,
            date: model.date,
            kind: RecordKind::try_from(model.kind.as_str())?,
        })
    }
}

/// Returns every record, ascending by `(date, id)`.
///
/// The id tie-break keeps the order deterministic when several records share
/// a date, regardless of insertion order.
pub(crate) async fn all(db: &DatabaseConnection) -> Result<Vec<Record>, LedgerError> {
    let models = Entity::find()
        .order_by_asc(Column::Date)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;

    models.into_iter().map(Record::try_from).collect()
}

/// Persists a validated draft and returns the stored record with its
/// assigned id.
pub(crate) async fn insert(
    db: &DatabaseConnection,
    draft: &RecordDraft,
) -> Result<Record, LedgerError> {
    let model = ActiveModel::from(draft).insert(db).await?;
    Record::try_from(model)
}

/// Deletes one record by id. Returns whether a row was removed.
pub(crate) async fn delete(db: &DatabaseConnection, id: i64) -> Result<bool, LedgerError> {
    let result = Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}

/// Deletes every record. Returns the number of rows removed.
pub(crate) async fn delete_all(db: &DatabaseConnection) -> Result<u64, LedgerError> {
    let result = Entity::delete_many().exec(db).await?;
    Ok(result.rows_affected)
}
