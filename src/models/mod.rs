//! Resource records and request/response models for the API
//!
//! Resources are what the store holds; requests and responses are the DTOs
//! serialized over HTTP.

pub mod requests;
pub mod resources;
pub mod responses;

// Re-export commonly used types
pub use requests::CreateCardRequest;
pub use resources::{Card, List};
pub use responses::{ErrorResponse, ServerErrorResponse};
