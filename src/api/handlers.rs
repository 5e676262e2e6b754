//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{FromRequest, Path, State},
    http::{header, Method, StatusCode, Uri},
    Json,
};
use tracing::{error, info};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{Card, CreateCardRequest, List};
use crate::store::ResourceStore;

/// Application state shared across all handlers and middleware.
///
/// Contains the resource store wrapped in Arc<RwLock<>> for shared access.
#[derive(Clone)]
pub struct AppState {
    /// Cards and lists
    pub store: Arc<RwLock<ResourceStore>>,
    /// Server configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState with the given store and configuration.
    pub fn new(store: ResourceStore, config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }

    /// Creates a new AppState holding the startup seed records.
    pub fn from_config(config: Config) -> Self {
        Self::new(ResourceStore::seeded(), config)
    }
}

/// JSON body extractor whose rejections are reported as [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Parses a path id. Ids that are not integers match no record.
fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// Handler for GET /
pub async fn greeting_handler() -> &'static str {
    "Hello, world!"
}

/// Handler for GET /card
///
/// Returns every card in insertion order.
pub async fn list_cards_handler(State(state): State<AppState>) -> Json<Vec<Card>> {
    let store = state.store.read().await;
    Json(store.cards().to_vec())
}

/// Handler for GET /card/:id
pub async fn get_card_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Card>> {
    let store = state.store.read().await;

    match parse_id(&id).and_then(|id| store.card(id)) {
        Some(card) => Ok(Json(card.clone())),
        None => {
            error!("Card with id {} not found.", id);
            Err(ApiError::CardNotFound)
        }
    }
}

/// Handler for POST /card
///
/// Validates the body, appends a new card, and answers 201 with a
/// `Location` header pointing at it.
pub async fn create_card_handler(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateCardRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Card>)> {
    if let Some(field) = req.validate() {
        error!("{} is required", field);
        return Err(ApiError::InvalidData);
    }

    let card = {
        let mut store = state.store.write().await;
        store.insert_card(
            req.title.unwrap_or_default(),
            req.content.unwrap_or_default(),
        )
    };
    info!("Card with id {} created", card.id);

    let location = format!("/card/{}", card.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(card)))
}

/// Handler for GET /list
///
/// Returns every list in insertion order.
pub async fn list_lists_handler(State(state): State<AppState>) -> Json<Vec<List>> {
    let store = state.store.read().await;
    Json(store.lists().to_vec())
}

/// Handler for GET /list/:id
pub async fn get_list_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<List>> {
    let store = state.store.read().await;

    match parse_id(&id).and_then(|id| store.list(id)) {
        Some(list) => Ok(Json(list.clone())),
        None => {
            error!("List with id {} not found.", id);
            Err(ApiError::ListNotFound)
        }
    }
}

/// Fallback for requests no route matched.
pub async fn unmatched_route_handler(method: Method, uri: Uri) -> (StatusCode, String) {
    (
        StatusCode::NOT_FOUND,
        format!("Cannot {} {}", method, uri.path()),
    )
}
