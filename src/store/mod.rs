//! Store Module
//!
//! In-memory ordered collections of cards and lists.

mod memory;


// Re-export public types
pub use memory::ResourceStore;
