use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{delete, get},
};
use ledger::Ledger;

use crate::{statistics, transactions};
use api_types::health::Health;

#[derive(Clone)]
pub struct ServerState {
    pub ledger: Arc<Ledger>,
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

pub fn router(ledger: Ledger) -> Router {
    let state = ServerState {
        ledger: Arc::new(ledger),
    };

    Router::new()
        .route("/api/health", get(health))
        .route(
            "/api/transactions",
            get(transactions::list)
                .post(transactions::create)
                .delete(transactions::clear),
        )
        .route("/api/transactions/{id}", delete(transactions::remove))
        .route("/api/statistics", get(statistics::get_stats))
        .with_state(state)
}

pub async fn run_with_listener(
    ledger: Ledger,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(ledger)).await
}

pub fn spawn_with_listener(
    ledger: Ledger,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(ledger, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
