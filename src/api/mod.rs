//! API Module
//!
//! HTTP handlers, middleware, and routing for the cards REST API.
//!
//! # Endpoints
//! - `GET /` - Greeting
//! - `GET /card` - List all cards
//! - `POST /card` - Create a card
//! - `GET /card/:id` - Get a card by id
//! - `GET /list` - List all lists
//! - `GET /list/:id` - Get a list by id

pub mod handlers;
pub mod middleware;
pub mod routes;

#[cfg(test)]
mod log_capture;

pub use handlers::*;
pub use routes::create_router;
