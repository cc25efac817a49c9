//! Internal utilities for the messaging model.
//!
//! Validation of field constraints, rendering of shapes and the timestamp
//! wire format.

pub mod display;
pub mod idempotency;
pub mod timestamp;
pub mod validation;

pub use validation::{Validate, Validator};
