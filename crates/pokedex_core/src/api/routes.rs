//! Request paths for the record endpoints.

use crate::model::record::RecordId;

pub const COLLECTION_PATH: &str = "/pokemons";
pub const CATEGORIES_PATH: &str = "/pokemons/types";

/// Listing request key: one in-flight fetch per distinct value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordsRequest {
    pub page: u32,
    pub limit: u32,
    /// Name search; omitted from the query when blank.
    pub search: String,
    /// Single type filter; omitted when `None` or blank.
    pub category: Option<String>,
}

impl RecordsRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            search: String::new(),
            category: None,
        }
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    pub fn with_category(self, category: Option<String>) -> Self {
        Self { category, ..self }
    }

    /// Ordered query pairs as sent to the backend.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_string()));
        }
        if let Some(category) = self.category.as_deref().map(str::trim) {
            if !category.is_empty() {
                pairs.push(("type", category.to_string()));
            }
        }
        pairs
    }

    /// `/pokemons?page=..&limit=..[&search=..][&type=..]`, form-urlencoded.
    pub fn path_and_query(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_query_pairs())
            .finish();
        format!("{COLLECTION_PATH}?{query}")
    }
}

/// Path of one record, for `PUT` and `DELETE`.
pub fn record_path(id: RecordId) -> String {
    format!("{COLLECTION_PATH}/{id}")
}

/// Mutation issued by the create/update/delete form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update(RecordId),
    Delete(RecordId),
}

impl MutationKind {
    pub fn method(&self) -> &'static str {
        match self {
            Self::Create => "POST",
            Self::Update(_) => "PUT",
            Self::Delete(_) => "DELETE",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Create => COLLECTION_PATH.to_string(),
            Self::Update(id) | Self::Delete(id) => record_path(*id),
        }
    }

    /// Whether the request carries a draft body.
    pub fn has_body(&self) -> bool {
        !matches!(self, Self::Delete(_))
    }
}
