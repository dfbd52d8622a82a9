//! Common types shared by all aggregates

pub mod entity_id;
pub mod lenient;

// Re-exports
pub use entity_id::EntityId;
