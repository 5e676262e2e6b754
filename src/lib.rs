//! Cards API - A small REST service over in-memory cards and lists
//!
//! Serves cards and lists behind bearer-token authentication, an origin
//! allow-list, security headers, and access logging.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use store::ResourceStore;
