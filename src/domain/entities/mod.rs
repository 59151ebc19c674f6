//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without transport concerns; the API
//! layer maps them into DTOs.

pub mod forecast;

pub use forecast::{Forecast, SUMMARIES};
