//! Application layer - orchestration of domain logic.
//!
//! This layer coordinates the domain logic:
//! - Dedup registry (which pairs have been emitted)
//! - Once logger (enablement check, claim, emission)
//! - Metrics
//!
//! ## Ports
//!
//! The application layer defines ports (traits) that infrastructure
//! adapters must implement. This keeps the application layer independent
//! from infrastructure details.

pub mod logger;
pub mod metrics;
pub mod ports;
pub mod registry;
