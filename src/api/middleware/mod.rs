//! Request pipeline stages
//!
//! Applied by [`create_router`](super::create_router) in this order, outermost
//! first: error handler, panic catcher, origin check, CORS headers, security
//! headers, access log, bearer-token authentication.

pub mod access_log;
pub mod auth;
pub mod cors;
pub mod errors;
pub mod security;

pub use access_log::access_log;
pub use auth::{bearer_token_matches, require_bearer_token};
pub use cors::{cors_layer, is_allowed_origin, reject_disallowed_origin};
pub use errors::{handle_panic, handle_server_error};
pub use security::security_headers;
