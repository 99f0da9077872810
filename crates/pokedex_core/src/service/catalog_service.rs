//! Catalog view service.
//!
//! # Responsibility
//! - Own the dataset, filter and page snapshots behind one catalog view.
//! - Turn UI intents into listing requests and apply their responses.
//! - Discard responses superseded by a newer request.
//!
//! # Invariants
//! - Bounds are recomputed only when a page is applied, from the unfiltered
//!   dataset, and reseed the filter ranges.
//! - A failed or stale response never replaces the displayed dataset.
//! - `page.current_page` is re-clamped on every applied page.

use crate::api::routes::RecordsRequest;
use crate::api::{CategoriesEnvelope, PageEnvelope};
use crate::config::CatalogConfig;
use crate::detail::distinct_categories;
use crate::model::record::CanonicalRecord;
use crate::query::bounds::{compute_bounds, Bounds};
use crate::query::filter::{apply_filter, FilterState};
use crate::query::pager::{PageItem, PageState};
use crate::service::request_gate::{RequestGate, RequestTicket};
use log::{debug, error, info};
use serde::Serialize;
use std::fmt::Display;

/// What happened to a response handed to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// A newer request was issued; the response was dropped.
    Stale,
}

/// Render-ready projection of the current view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSnapshot {
    pub visible: Vec<CanonicalRecord>,
    pub bounds: Option<Bounds>,
    pub filter: FilterState,
    pub page: PageState,
    pub total_pages: u32,
    pub page_window: Vec<PageItem>,
    pub categories: Vec<String>,
    /// Non-fatal message from the last failed fetch.
    pub error: Option<String>,
}

/// State holder re-invoked by the presentation layer on every input event.
#[derive(Debug)]
pub struct CatalogService {
    config: CatalogConfig,
    gate: RequestGate,
    records: Vec<CanonicalRecord>,
    bounds: Option<Bounds>,
    filter: FilterState,
    page: PageState,
    categories: Vec<String>,
    last_error: Option<String>,
}

impl CatalogService {
    pub fn new(config: CatalogConfig) -> Self {
        let page = PageState::new(config.page_size, 0);
        Self {
            config,
            gate: RequestGate::new(),
            records: Vec::new(),
            bounds: None,
            filter: FilterState::new(),
            page,
            categories: Vec::new(),
            last_error: None,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn records(&self) -> &[CanonicalRecord] {
        &self.records
    }

    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Issues the listing request for the current page and server-side
    /// filters. Any earlier in-flight request becomes stale.
    ///
    /// The backend accepts one type, so it is sent only when exactly one
    /// category is selected; the client-side predicate covers the rest.
    pub fn begin_fetch(&self) -> (RequestTicket, RecordsRequest) {
        let category = match self.filter.selected_categories.len() {
            1 => self.filter.selected_categories.iter().next().cloned(),
            _ => None,
        };
        let request = RecordsRequest::new(self.page.current_page(), self.page.page_size())
            .with_search(self.filter.query.clone())
            .with_category(category);
        let ticket = self.gate.issue();
        debug!(
            "event=fetch_issued module=service ticket={} page={} limit={}",
            ticket.sequence(),
            request.page,
            request.limit
        );
        (ticket, request)
    }

    /// Applies a decoded page if `ticket` is still current.
    pub fn apply_page(&mut self, ticket: RequestTicket, envelope: PageEnvelope) -> ApplyOutcome {
        if !self.gate.is_current(ticket) {
            debug!(
                "event=fetch_discarded module=service status=stale ticket={}",
                ticket.sequence()
            );
            return ApplyOutcome::Stale;
        }

        self.bounds = compute_bounds(&envelope.records);
        if let Some(bounds) = &self.bounds {
            self.filter = std::mem::take(&mut self.filter).seeded_from(bounds);
        }
        let total_count = envelope.total_count_for(self.page.page_size());
        self.page = self.page.refresh(total_count);
        self.records = envelope.records;
        self.last_error = None;

        info!(
            "event=page_applied module=service status=ok ticket={} records={} total_count={} page={}",
            ticket.sequence(),
            self.records.len(),
            self.page.total_count(),
            self.page.current_page()
        );
        ApplyOutcome::Applied
    }

    /// Records a failed fetch, keeping the previous dataset on screen.
    pub fn apply_failure(&mut self, ticket: RequestTicket, err: &dyn Display) -> ApplyOutcome {
        if !self.gate.is_current(ticket) {
            debug!(
                "event=fetch_discarded module=service status=stale_error ticket={}",
                ticket.sequence()
            );
            return ApplyOutcome::Stale;
        }

        error!(
            "event=fetch_failed module=service status=error ticket={} error={}",
            ticket.sequence(),
            err
        );
        self.last_error = Some(format!("failed to load records: {err}"));
        ApplyOutcome::Applied
    }

    /// Replaces the category list offered by the type checkboxes.
    pub fn set_categories(&mut self, envelope: CategoriesEnvelope) {
        self.categories = envelope.categories;
    }

    /// Backend categories when loaded, else those present in the dataset.
    pub fn categories(&self) -> Vec<String> {
        if self.categories.is_empty() {
            distinct_categories(&self.records)
        } else {
            self.categories.clone()
        }
    }

    /// Changes the name query and returns to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter = std::mem::take(&mut self.filter).with_query(query);
        self.page = self.page.go_to(1);
    }

    /// Checks or unchecks one category and returns to page 1.
    pub fn toggle_category(&mut self, category: &str) {
        self.filter = std::mem::take(&mut self.filter).toggle_category(category);
        self.page = self.page.go_to(1);
    }

    /// Applies a client-side filter edit (range sliders). Stays on the
    /// current page because ranges never reach the backend.
    pub fn update_filter(&mut self, edit: impl FnOnce(FilterState) -> FilterState) {
        self.filter = edit(std::mem::take(&mut self.filter));
    }

    pub fn go_to(&mut self, n: u32) {
        self.page = self.page.go_to(n);
    }

    pub fn next_page(&mut self) {
        self.page = self.page.next();
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.prev();
    }

    /// Records of the current dataset passing the filter, in order.
    pub fn visible(&self) -> Vec<&CanonicalRecord> {
        apply_filter(&self.records, &self.filter)
    }

    pub fn page_window(&self) -> Vec<PageItem> {
        self.page.window(self.config.window_radius)
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            visible: self.visible().into_iter().cloned().collect(),
            bounds: self.bounds,
            filter: self.filter.clone(),
            page: self.page,
            total_pages: self.page.total_pages(),
            page_window: self.page_window(),
            categories: self.categories(),
            error: self.last_error.clone(),
        }
    }
}
