use axum::{extract::State, routing::get, Json, Router};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use log::info;
use serde::Serialize;
use serde_json::{json, Value};
use std::io;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::Listing;
use crate::schema::listings;

/// Read access to listings for the HTTP layer.
pub trait ListingStore: Send + Sync {
    fn all_listings(&self) -> ApiResult<Vec<Listing>>;
}

/// Store backed by the process's one database connection.
///
/// There is no pool: concurrent requests queue on the mutex, so throughput
/// is bounded by a single connection.
pub struct PgListingStore {
    conn: Mutex<PgConnection>,
}

impl PgListingStore {
    pub fn new(conn: PgConnection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

impl ListingStore for PgListingStore {
    fn all_listings(&self) -> ApiResult<Vec<Listing>> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|_| ApiError::Internal("database connection lock poisoned".to_string()))?;
        let rows = listings::table
            .select(Listing::as_select())
            .load(&mut *conn)?;
        Ok(rows)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ListingStore>,
}

#[derive(Serialize)]
struct Payload<T> {
    payload: T,
}

async fn root() -> Json<Value> {
    Json(json!({"message": "Hello World"}))
}

async fn all_listings(State(state): State<AppState>) -> ApiResult<Json<Payload<Vec<Listing>>>> {
    let store = state.store.clone();
    let rows = tokio::task::spawn_blocking(move || store.all_listings())
        .await
        .map_err(|e| ApiError::Internal(format!("listing query task failed: {}", e)))??;
    info!("Fetched {} listings", rows.len());
    Ok(Json(Payload { payload: rows }))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/test", get(all_listings))
        .with_state(state)
}

/// Binds the API listener. Host names such as `localhost` are resolved.
pub async fn bind_listener(server: &ServerConfig) -> io::Result<TcpListener> {
    TcpListener::bind((server.host.as_str(), server.port)).await
}
