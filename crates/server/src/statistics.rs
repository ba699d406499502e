//! Statistics API endpoint

use api_types::stats::{CategoryTotal, Statistic};
use axum::{Json, extract::State};

use crate::{ServerError, server::ServerState};

/// Handle requests for aggregate statistics.
pub async fn get_stats(State(state): State<ServerState>) -> Result<Json<Statistic>, ServerError> {
    let stats = state.ledger.statistics().await?;

    let by_category = stats
        .by_category
        .into_iter()
        .map(|entry| CategoryTotal {
            category: entry.category,
            total: entry.total.to_units(),
        })
        .collect();

    Ok(Json(Statistic {
        income: stats.income.to_units(),
        expenses: stats.expenses.to_units(),
        balance: stats.balance.to_units(),
        by_category,
    }))
}
