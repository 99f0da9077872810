//! Catalog use-case services.
//!
//! # Responsibility
//! - Hold view state between UI events and apply fetched pages.
//! - Keep the presentation layer free of ordering and clamping rules.

pub mod catalog_service;
pub mod request_gate;
