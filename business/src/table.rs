//! Table controller: query state, fetch orchestration and result/error state.
//!
//! UI code feeds it events (`set_options`, `set_sort`, `set_search`) and calls
//! [`TableController::poll`] once per frame. Network IO runs on background
//! tasks which only send a [`FetchCompletion`] back; all state changes happen
//! on the caller's thread.
//!
//! Every fetch is tagged with a generation number. A completion older than the
//! latest issued fetch is dropped, so a slow response can never overwrite the
//! result of a newer query.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use flume::{Receiver, Sender};
use ustr::Ustr;

use crate::debounce::Debouncer;
use crate::format::{DateFormatter, SharedFormatter, default_formatter};
use crate::query::{QueryParams, QueryState, SortOrder};
use crate::row::{ResultSet, Row};
use crate::table_api::{FetchError, HttpTableApi, TableApi};
use crate::task;

/// Shown in place of an absent creation date.
pub const MISSING_DATE: &str = "-";

/// A row with its creation date already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub id: Option<u64>,
    pub created: String,
    pub row: Row,
}

impl DisplayRow {
    fn new(row: Row, formatter: &dyn DateFormatter) -> Self {
        Self {
            id: row.display_id(),
            created: row
                .created
                .as_ref()
                .map_or_else(|| MISSING_DATE.to_string(), |created| formatter.format(created)),
            row,
        }
    }

    pub fn name(&self) -> &str {
        &self.row.name
    }
}

/// Outcome of one fetch, tagged with the generation it was issued under.
#[derive(Debug)]
pub struct FetchCompletion {
    generation: u64,
    outcome: Result<ResultSet, FetchError>,
}

pub struct TableController {
    url: String,
    api: Arc<dyn TableApi>,
    formatter: SharedFormatter,

    query: QueryState,
    rows: Vec<DisplayRow>,
    total_count: u64,
    error: Option<String>,

    debounce: Debouncer,
    mounted: bool,
    // Latest generation handed out; completions below it are stale.
    issued: u64,
    in_flight: usize,

    send: Sender<FetchCompletion>,
    recv: Receiver<FetchCompletion>,
}

impl std::fmt::Debug for TableController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableController")
            .field("url", &self.url)
            .field("query", &self.query)
            .field("rows", &self.rows.len())
            .field("total_count", &self.total_count)
            .field("error", &self.error)
            .field("issued", &self.issued)
            .field("in_flight", &self.in_flight)
            .finish_non_exhaustive()
    }
}

impl TableController {
    pub fn new(url: impl Into<String>, api: Arc<dyn TableApi>, formatter: SharedFormatter) -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            url: url.into(),
            api,
            formatter,
            query: QueryState::default(),
            rows: Vec::new(),
            total_count: 0,
            error: None,
            debounce: Debouncer::default(),
            mounted: false,
            issued: 0,
            in_flight: 0,
            send,
            recv,
        }
    }

    /// Controller over HTTP with the default date format.
    pub fn http(url: impl Into<String>) -> Self {
        Self::new(url, Arc::new(HttpTableApi), default_formatter())
    }

    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.debounce = Debouncer::new(window);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Number of pages at the current page size, never less than 1.
    pub fn page_count(&self) -> u32 {
        let per_page = u64::from(self.query.items_per_page());
        let pages = self.total_count.div_ceil(per_page).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn debounce_pending(&self) -> bool {
        self.debounce.is_armed()
    }

    pub fn debounce_remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.debounce.remaining(now)
    }

    /// Initial fetch with the default query. Only the first call fetches.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        log::info!("Mounting table for {}", self.url);
        self.request_fetch();
    }

    /// Page-change event from the grid: applied synchronously, fetched immediately.
    pub fn set_options(&mut self, page: u32, items_per_page: u32) {
        self.query.set_page(page);
        self.query.set_items_per_page(items_per_page);
        self.request_fetch();
    }

    /// Sort-change event from the grid: applied synchronously, fetched immediately.
    pub fn set_sort(&mut self, sort_by: &str, order: SortOrder) {
        self.query.sort_by = Ustr::from(sort_by);
        self.query.order = order;
        self.request_fetch();
    }

    /// Header click: flips the order on the active column, otherwise sorts
    /// the new column ascending.
    pub fn toggle_sort(&mut self, column: &str) {
        let order = if self.query.sort_by.as_str() == column {
            self.query.order.flipped()
        } else {
            SortOrder::Asc
        };
        self.set_sort(column, order);
    }

    /// Search input: the text is stored now, the fetch waits for the
    /// debounce window to pass without further input.
    pub fn set_search(&mut self, text: impl Into<String>, now: DateTime<Utc>) {
        self.query.search = text.into();
        self.debounce.arm(now);
    }

    /// Per-frame driver: applies finished fetches and fires a due debounce.
    pub fn poll(&mut self, now: DateTime<Utc>) {
        while let Ok(completion) = self.recv.try_recv() {
            self.apply(completion);
        }

        if self.debounce.fire_if_due(now) {
            log::debug!("Search settled on {:?}", self.query.search);
            self.request_fetch();
        }
    }

    /// Fetch with the current query on a background task. The result is
    /// applied by a later [`poll`](Self::poll).
    pub fn request_fetch(&mut self) {
        let (generation, params) = self.begin_fetch();
        let api = Arc::clone(&self.api);
        let url = self.url.clone();
        let send = self.send.clone();

        let spawned = task::spawn(async move {
            let outcome = api.fetch(&url, &params).await;
            if send.send(FetchCompletion { generation, outcome }).is_err() {
                log::debug!("Table for {url} dropped before fetch #{generation} completed");
            }
        });
        if !spawned {
            self.apply(FetchCompletion {
                generation,
                outcome: Err(FetchError::Transport("Background fetch could not start".into())),
            });
        }
    }

    /// Fetch with the current query and apply the outcome before returning.
    pub async fn fetch_data(&mut self) {
        let (generation, params) = self.begin_fetch();
        let outcome = self.api.fetch(&self.url, &params).await;
        self.apply(FetchCompletion { generation, outcome });
    }

    fn begin_fetch(&mut self) -> (u64, QueryParams) {
        // The query already carries the latest search text.
        self.debounce.cancel();
        self.issued += 1;
        self.in_flight += 1;
        let params = self.query.params();
        log::debug!("Fetch #{} for {}: {params:?}", self.issued, self.url);
        (self.issued, params)
    }

    fn apply(&mut self, completion: FetchCompletion) {
        let FetchCompletion {
            generation,
            outcome,
        } = completion;
        self.in_flight = self.in_flight.saturating_sub(1);

        if generation < self.issued {
            log::debug!(
                "Dropping stale fetch #{generation} for {} (latest #{})",
                self.url,
                self.issued
            );
            return;
        }

        match outcome {
            Ok(set) => {
                let formatter = Arc::clone(&self.formatter);
                self.rows = set
                    .results
                    .into_iter()
                    .map(|row| DisplayRow::new(row, formatter.as_ref()))
                    .collect();
                self.total_count = set.count;
                self.error = None;
            }
            Err(err) => {
                log::warn!("Fetch #{generation} for {} failed: {err}", self.url);
                // Rows from the previous success stay visible under the banner.
                self.error = Some(err.message());
            }
        }
    }
}
