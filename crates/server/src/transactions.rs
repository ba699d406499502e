//! Transactions API endpoints

use api_types::transaction::{
    Amount, TransactionDeleted, TransactionKind as ApiKind, TransactionNew, TransactionView,
    TransactionsCleared,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use ledger::{AmountInput, Record, RecordKind, RecordPayload};

use crate::{ServerError, server::ServerState};

fn map_kind(kind: RecordKind) -> ApiKind {
    match kind {
        RecordKind::Income => ApiKind::Income,
        RecordKind::Expense => ApiKind::Expense,
    }
}

pub(crate) fn view(record: Record) -> TransactionView {
    TransactionView {
        id: record.id,
        description: record.description,
        amount: record.amount.to_units(),
        category: record.category,
        date: record.date,
        kind: map_kind(record.kind),
    }
}

fn payload(new: TransactionNew) -> RecordPayload {
    RecordPayload {
        description: new.description,
        amount: new.amount.map(|amount| match amount {
            Amount::Number(n) => AmountInput::Number(n),
            Amount::Text(s) => AmountInput::Text(s),
        }),
        category: new.category,
        date: new.date,
        kind: new.kind,
    }
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<TransactionView>>, ServerError> {
    let records = state.ledger.transactions().await?;
    Ok(Json(records.into_iter().map(view).collect()))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(new): Json<TransactionNew>,
) -> Result<(StatusCode, Json<TransactionView>), ServerError> {
    let record = state.ledger.add(&payload(new)).await?;
    Ok((StatusCode::CREATED, Json(view(record))))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<TransactionDeleted>, ServerError> {
    state.ledger.remove(id).await?;
    Ok(Json(TransactionDeleted { deleted: id }))
}

pub async fn clear(
    State(state): State<ServerState>,
) -> Result<Json<TransactionsCleared>, ServerError> {
    let count = state.ledger.remove_all().await?;
    Ok(Json(TransactionsCleared {
        deleted_all: true,
        count,
    }))
}
