use crate::view_model::{AppViewModel, Pagination, Screen};
use crate::{DisplayArticle, PageSize, SearchError, SearchQuery};

/// Identifies one issued request so late answers can be recognised.
pub type RequestId = u64;

/// The user action a pending request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Search,
    Next,
    Prev { target: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing requested since start-up or the last clear.
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
        action: PageAction,
    },
    Loaded {
        articles: Vec<DisplayArticle>,
    },
    Failed {
        error: SearchError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    query: SearchQuery,
    phase: Phase,
    submitted: bool,
    last_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Results of the last successful load; empty while loading or failed.
    pub fn articles(&self) -> &[DisplayArticle] {
        match &self.phase {
            Phase::Loaded { articles } => articles,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// False only before the first successful load or after a clear.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn error(&self) -> Option<&SearchError> {
        match &self.phase {
            Phase::Failed { error } => Some(error),
            _ => None,
        }
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        match self.phase {
            Phase::Loading { request_id, .. } => Some(request_id),
            _ => None,
        }
    }

    /// Returns whether the state changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Pagination controls for the current screen, if it shows any.
    pub fn pagination(&self) -> Option<Pagination> {
        let page = self.query.page;
        match &self.phase {
            Phase::Failed { .. } => Some(Pagination {
                page,
                prev_enabled: true,
                next_enabled: false,
            }),
            Phase::Loaded { articles } if self.submitted && !articles.is_empty() => {
                Some(Pagination {
                    page,
                    prev_enabled: page > 1,
                    next_enabled: true,
                })
            }
            _ => None,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            query_text: self.query.text.clone(),
            page_size: self.query.page_size,
            per_page: self.query.per_page(),
            page: self.query.page,
            screen: self.screen(),
            dirty: self.dirty,
        }
    }

    fn screen(&self) -> Screen {
        let pagination = self.pagination();
        match (&self.phase, pagination) {
            (Phase::Loading { .. }, _) => Screen::Loading,
            (Phase::Failed { error }, Some(controls)) => Screen::Error {
                message: error.to_string(),
                controls,
            },
            _ if !self.submitted => Screen::Blank,
            (Phase::Loaded { articles }, Some(controls)) => Screen::Results {
                articles: articles.clone(),
                controls,
            },
            _ => Screen::Empty,
        }
    }

    pub(crate) fn set_query_text(&mut self, text: String) {
        if self.query.text != text {
            self.query.text = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn select_page_size(&mut self, size: PageSize) {
        if self.query.page_size != Some(size) {
            self.query.page_size = Some(size);
            self.mark_dirty();
        }
    }

    pub(crate) fn set_page(&mut self, page: u32) {
        self.query.page = page.max(1);
    }

    /// Moves to `Loading` under a fresh request id. Any earlier pending
    /// request becomes stale and any error is dropped.
    pub(crate) fn begin_request(&mut self, action: PageAction) -> RequestId {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.phase = Phase::Loading { request_id, action };
        self.mark_dirty();
        request_id
    }

    /// Returns the action of the pending request if `request_id` is the one
    /// being waited for.
    pub(crate) fn pending_action(&self, request_id: RequestId) -> Option<PageAction> {
        match self.phase {
            Phase::Loading {
                request_id: pending,
                action,
            } if pending == request_id => Some(action),
            _ => None,
        }
    }

    pub(crate) fn finish_loaded(&mut self, articles: Vec<DisplayArticle>) {
        self.submitted = true;
        self.phase = Phase::Loaded { articles };
        self.mark_dirty();
    }

    pub(crate) fn fail(&mut self, error: SearchError) {
        self.phase = Phase::Failed { error };
        self.mark_dirty();
    }

    /// Back to start-up defaults. The request counter keeps counting so no
    /// answer to an earlier request can match a later one.
    pub(crate) fn reset(&mut self) {
        self.query = SearchQuery::default();
        self.phase = Phase::Idle;
        self.submitted = false;
        self.mark_dirty();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
