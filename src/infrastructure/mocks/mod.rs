//! Mock implementations for testing.
//!
//! This module provides test doubles for infrastructure adapters,
//! enabling controlled testing of application logic.

pub mod layer;
pub mod sink;

pub use layer::{CapturedEvent, MockCaptureLayer};
pub use sink::{EmittedMessage, MockSink};
