//! Traversal core for OpenAPI v3.1.x schema graphs.
//!
//! [`spec`] holds the in-memory document model (already deserialized by the
//! caller); [`walk`] visits every primitive leaf schema exactly once in a
//! deterministic order, routing recoverable structural defects to a
//! caller-supplied repair hook.

pub mod spec;
pub mod walk;

pub use walk::{ProcessSchema, RepairSchema, SchemaDefect, walk_all_schemas};
