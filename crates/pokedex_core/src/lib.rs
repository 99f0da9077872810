//! Core catalog logic for the Pokédex UI.
//! This crate owns normalization, filtering, bounds and pagination rules;
//! the presentation layer only renders what it returns.

pub mod api;
pub mod config;
pub mod detail;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod query;
pub mod service;

pub use api::routes::{MutationKind, RecordsRequest};
pub use api::{load_page_file, ApiError, ApiResult, CategoriesEnvelope, PageEnvelope};
pub use config::{CatalogConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::draft::{DraftValidationError, RecordDraft};
pub use model::record::{CanonicalRecord, RecordId, StatEntry};
pub use normalize::{normalize, normalize_all};
pub use query::bounds::{compute_bounds, Bounds};
pub use query::filter::{apply_filter, matches, FilterState, ValueRange};
pub use query::pager::{
    advance, compute_page_window, Direction, PageItem, PageState, DEFAULT_WINDOW_RADIUS,
};
pub use service::catalog_service::{ApplyOutcome, CatalogService, CatalogSnapshot};
pub use service::request_gate::{RequestGate, RequestTicket};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
