//! Backend contract consumed by the catalog.
//!
//! # Responsibility
//! - Decode list and category envelopes returned by the REST backend.
//! - Build request paths/queries and asset URLs; the core never sends them.
//!
//! # Invariants
//! - Envelope decoding fails only on envelope shape, never on one bad item.
//! - Decoded items are normalized one by one, in payload order.
//!
//! # See also
//! - `service::catalog_service` for how decoded pages are applied.

pub mod assets;
pub mod routes;

use crate::model::record::CanonicalRecord;
use crate::normalize::normalize_all;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const ITEM_KEYS: [&str; 2] = ["pokemons", "items"];

pub type ApiResult<T> = Result<T, ApiError>;

/// Decoding and loading errors for backend payloads.
#[derive(Debug)]
pub enum ApiError {
    /// Payload is valid JSON but not a recognized envelope.
    MalformedEnvelope(String),
    Json(serde_json::Error),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedEnvelope(message) => write!(f, "malformed server payload: {message}"),
            Self::Json(err) => write!(f, "invalid JSON payload: {err}"),
            Self::Io { path, source } => {
                write!(f, "failed to read payload `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MalformedEnvelope(_) => None,
            Self::Json(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// One decoded page of the record listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEnvelope {
    pub records: Vec<CanonicalRecord>,
    /// Backend-reported page count, `1` when absent.
    pub total_pages: u32,
    /// Backend-reported match count, item count when absent.
    pub total_count: u64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaginationWire {
    total_pages: Option<u32>,
    total_count: Option<u64>,
}

impl PageEnvelope {
    /// Decodes `{ pokemons | items: [...], pagination: {..} }` or a bare
    /// array of records.
    pub fn from_json(payload: &str) -> ApiResult<Self> {
        let value: Value = serde_json::from_str(payload)?;
        Self::from_value(&value)
    }

    pub fn from_value(payload: &Value) -> ApiResult<Self> {
        let (items, pagination) = match payload {
            Value::Array(items) => (items, None),
            Value::Object(fields) => {
                let items = ITEM_KEYS
                    .iter()
                    .find_map(|key| fields.get(*key).and_then(Value::as_array))
                    .ok_or_else(|| {
                        ApiError::MalformedEnvelope(
                            "expected a `pokemons` or `items` array".to_string(),
                        )
                    })?;
                (items, fields.get("pagination"))
            }
            _ => {
                return Err(ApiError::MalformedEnvelope(
                    "expected an object or array at top level".to_string(),
                ))
            }
        };

        let pagination = pagination.map(read_pagination).unwrap_or_default();
        let records = normalize_all(items);
        let envelope = Self {
            total_pages: pagination.total_pages.unwrap_or(1).max(1),
            total_count: pagination.total_count.unwrap_or(records.len() as u64),
            records,
        };

        debug!(
            "event=page_decoded module=api status=ok items={} total_count={} total_pages={}",
            envelope.records.len(),
            envelope.total_count,
            envelope.total_pages
        );
        Ok(envelope)
    }

    /// Match count to page by at `page_size`.
    ///
    /// A pagination block carrying only `totalPages` still yields that many
    /// pages: the count is raised to the smallest value spanning them.
    pub fn total_count_for(&self, page_size: u32) -> u64 {
        if self.total_pages <= 1 {
            return self.total_count;
        }
        let spanned = u64::from(self.total_pages - 1) * u64::from(page_size.max(1)) + 1;
        self.total_count.max(spanned)
    }
}

fn read_pagination(value: &Value) -> PaginationWire {
    PaginationWire::deserialize(value).unwrap_or_else(|err| {
        warn!("event=page_decoded module=api status=degraded reason=bad_pagination error={err}");
        PaginationWire::default()
    })
}

/// Category list returned by the categories endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoriesEnvelope {
    #[serde(alias = "types")]
    pub categories: Vec<String>,
}

impl CategoriesEnvelope {
    pub fn from_json(payload: &str) -> ApiResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Reads and decodes a saved listing payload from disk.
pub fn load_page_file(path: impl AsRef<Path>) -> ApiResult<PageEnvelope> {
    let path = path.as_ref();
    let payload = std::fs::read_to_string(path).map_err(|source| ApiError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    PageEnvelope::from_json(&payload)
}
