//! Domain layer - pure business logic with no external dependencies.
//!
//! This layer contains the core concepts of warning deduplication:
//! - Log source keys
//! - Per-source sets of already emitted messages
//! - Fixed warning texts
//!
//! All types in this layer are pure and easily testable.

pub mod message;
pub mod seen;
pub mod source;
