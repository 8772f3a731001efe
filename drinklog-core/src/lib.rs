//! Core types for the drinklog load-test scenario.
//!
//! This crate provides the identity allocation, record-date arithmetic,
//! session state, and wire payloads the scenario binary drives against the
//! drinklog API. It knows nothing about the load-generation engine.

pub mod api;
pub mod error;
pub mod identity;
pub mod records;
pub mod session;

pub use error::*;
pub use identity::*;
pub use records::*;
pub use session::*;
