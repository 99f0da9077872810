//! Catalog query engine.
//!
//! # Responsibility
//! - Filter normalized records against an explicit `FilterState` snapshot.
//! - Derive slider bounds from the unfiltered dataset.
//! - Compute pagination windows and page transitions.
//!
//! # Invariants
//! - Every function here is pure: state in, state out, no I/O.

pub mod bounds;
pub mod filter;
pub mod pager;
