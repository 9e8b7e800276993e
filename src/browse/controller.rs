use crate::error::{BrowseError, Result};
use crate::remote::ItemsApi;
use crate::types::{CategoryId, CategoryMap, Item, ItemId, ItemPage};

use super::dialogs::Dialogs;
use super::mode::Mode;
use super::pager::{PageLabel, page_labels};
use super::snapshot::{PageState, ResultSnapshot};

/// Which endpoint to hit and with what page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub mode: Mode,
    pub page: u32,
}

/// A fetch that has been issued but whose response has not been applied.
///
/// Obtained from [`BrowseController::begin_fetch`] and handed back to
/// [`BrowseController::complete`] together with the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFetch {
    seq: u64,
    request: FetchRequest,
}

impl PendingFetch {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn request(&self) -> &FetchRequest {
        &self.request
    }
}

/// What an operation did to the controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A response was applied and the snapshot replaced
    Applied,
    /// The response arrived after a newer fetch was issued and was dropped
    Superseded,
    /// The user declined the confirmation; nothing was sent
    Declined,
    /// The requested page is outside `1..=page_count`; nothing was sent
    OutOfRange,
}

/// Run `request` against the endpoint its mode selects.
pub async fn execute<A: ItemsApi>(api: &A, request: &FetchRequest) -> Result<ItemPage> {
    match &request.mode {
        Mode::All => api.list_all(request.page).await,
        Mode::ByCategory(id) => api.list_by_category(id, request.page).await,
        Mode::Search(term) => api.search(term, request.page).await,
    }
}

/// Browsing session over the remote collection.
///
/// Mode and page only change when a response is applied, so a failed
/// operation leaves the controller exactly as it was. Responses to fetches
/// that have since been superseded by a newer one are discarded.
pub struct BrowseController<A, D> {
    api: A,
    dialogs: D,
    mode: Mode,
    page: u32,
    snapshot: Option<ResultSnapshot>,
    last_issued: u64,
    /// Request of the latest fetch, until its response is completed
    in_flight: Option<FetchRequest>,
}

impl<A: ItemsApi, D: Dialogs> BrowseController<A, D> {
    pub fn new(api: A, dialogs: D) -> Self {
        Self {
            api,
            dialogs,
            mode: Mode::All,
            page: 1,
            snapshot: None,
            last_issued: 0,
            in_flight: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn snapshot(&self) -> Option<&ResultSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn items(&self) -> &[Item] {
        self.snapshot
            .as_ref()
            .map(|s| s.items.as_slice())
            .unwrap_or_default()
    }

    pub fn categories(&self) -> Option<&CategoryMap> {
        self.snapshot.as_ref().map(|s| &s.categories)
    }

    pub fn page_state(&self) -> Option<PageState> {
        self.snapshot.as_ref().map(|s| s.page_state)
    }

    /// Zero until the first fetch succeeds.
    pub fn page_count(&self) -> u32 {
        self.page_state().map_or(0, |s| s.page_count())
    }

    pub fn page_labels(&self) -> Vec<PageLabel> {
        self.page_state()
            .map(|s| page_labels(&s))
            .unwrap_or_default()
    }

    /// Record a new fetch as the most recent one. Any fetch issued before it
    /// becomes stale.
    pub fn begin_fetch(&mut self, request: FetchRequest) -> PendingFetch {
        self.last_issued += 1;
        tracing::debug!(
            "issuing fetch #{} for {} page {}",
            self.last_issued,
            request.mode,
            request.page
        );
        self.in_flight = Some(request.clone());
        PendingFetch {
            seq: self.last_issued,
            request,
        }
    }

    /// Apply the response to `pending`, unless a newer fetch was issued in
    /// the meantime.
    ///
    /// Errors are reported through [`Dialogs::notify_error`] and returned.
    /// Stale responses are dropped silently, failures included.
    pub fn complete(&mut self, pending: PendingFetch, result: Result<ItemPage>) -> Result<Outcome> {
        if pending.seq != self.last_issued {
            tracing::debug!(
                "dropping response to fetch #{} (latest is #{})",
                pending.seq,
                self.last_issued
            );
            return Ok(Outcome::Superseded);
        }
        self.in_flight = None;

        let response = result.map_err(|e| self.report(e))?;
        let FetchRequest { mode, page } = pending.request;
        let snapshot = ResultSnapshot::from_page(&mode, page, response, self.categories());

        tracing::debug!(
            "applied fetch #{}: {} items of {} for {mode} page {page}",
            pending.seq,
            snapshot.items.len(),
            snapshot.page_state.total_items
        );
        self.snapshot = Some(snapshot);
        self.mode = mode;
        self.page = page;
        Ok(Outcome::Applied)
    }

    async fn fetch(&mut self, request: FetchRequest) -> Result<Outcome> {
        let pending = self.begin_fetch(request);
        let result = execute(&self.api, pending.request()).await;
        self.complete(pending, result)
    }

    fn report(&self, error: BrowseError) -> BrowseError {
        tracing::warn!("browse operation failed: {error}");
        self.dialogs.notify_error(&error.to_string());
        error
    }

    /// Start the session: mode `All`, page 1.
    pub async fn initialize(&mut self) -> Result<Outcome> {
        self.mode = Mode::All;
        self.page = 1;
        self.fetch(FetchRequest {
            mode: Mode::All,
            page: 1,
        })
        .await
    }

    /// Switch to all items, keeping the current page.
    pub async fn select_all(&mut self) -> Result<Outcome> {
        self.fetch(FetchRequest {
            mode: Mode::All,
            page: self.page,
        })
        .await
    }

    /// Switch to the items of one category, keeping the current page.
    ///
    /// Ids missing from the known category map are still sent; the server
    /// decides whether they exist.
    pub async fn select_category(&mut self, id: CategoryId) -> Result<Outcome> {
        if let Some(categories) = self.categories()
            && !categories.contains_key(&id)
        {
            tracing::warn!("category {id} is not in the last known category map");
        }

        self.fetch(FetchRequest {
            mode: Mode::ByCategory(id),
            page: self.page,
        })
        .await
    }

    /// Switch to free-text search, keeping the current page.
    ///
    /// The term is trimmed; an empty term is rejected without contacting the
    /// server.
    pub async fn search(&mut self, term: &str) -> Result<Outcome> {
        let term = term.trim();
        if term.is_empty() {
            return Err(self.report(BrowseError::InvalidSearchTerm));
        }

        self.fetch(FetchRequest {
            mode: Mode::Search(term.to_string()),
            page: self.page,
        })
        .await
    }

    /// Re-fetch the active mode at page `n`.
    pub async fn go_to_page(&mut self, n: u32) -> Result<Outcome> {
        let count = self.page_count();
        if n == 0 || n > count {
            tracing::debug!("ignoring page {n}, valid pages are 1..={count}");
            return Ok(Outcome::OutOfRange);
        }

        self.fetch(FetchRequest {
            mode: self.mode.clone(),
            page: n,
        })
        .await
    }

    pub async fn activate(&mut self, label: PageLabel) -> Result<Outcome> {
        self.go_to_page(label.number).await
    }

    /// Mode and page the next refresh should use: the latest fetch if its
    /// response is still outstanding, otherwise the committed state.
    fn refresh_request(&self) -> FetchRequest {
        self.in_flight.clone().unwrap_or_else(|| FetchRequest {
            mode: self.mode.clone(),
            page: self.page,
        })
    }

    /// Delete an item after explicit confirmation, then refresh the mode and
    /// page active when the delete was requested.
    ///
    /// Deletes run inline only; there is no split counterpart. If a fetch
    /// started through [`begin_fetch`](Self::begin_fetch) is still
    /// outstanding, its mode and page are the ones refreshed, and the refresh
    /// supersedes it. The page is not adjusted if the refresh comes back
    /// empty.
    pub async fn delete_item(&mut self, id: ItemId) -> Result<Outcome> {
        if !self
            .dialogs
            .confirm(&format!("Are you sure you want to delete item {id}?"))
        {
            return Ok(Outcome::Declined);
        }

        let refresh = self.refresh_request();

        if let Err(e) = self.api.delete_item(id).await {
            return Err(self.report(e));
        }
        tracing::debug!("deleted item {id}");

        self.fetch(refresh).await
    }
}
