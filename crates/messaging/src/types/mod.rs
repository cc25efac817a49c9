//! Shared types for the messaging model.
//!
//! This module contains the error definitions and the closed enumerations
//! used across entities and operations.

pub mod enums;
pub mod errors;

pub use enums::*;
pub use errors::{MessagingError, MessagingResult};

