//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical record consumed by the query engine.
//! - Define the mutation draft submitted by the create/update form.
//!
//! # Invariants
//! - Records are identified by a positive `RecordId`.
//! - Query code only ever sees normalized `CanonicalRecord` values.

pub mod draft;
pub mod record;
