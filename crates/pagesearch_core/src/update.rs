use search_logging::search_debug;

use crate::format::format_articles;
use crate::state::PageAction;
use crate::{
    ApiReply, AppState, Effect, Msg, PageRequest, ReplyBody, RequestId, SearchError,
    PAGE_OUT_OF_RANGE_MESSAGE,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(text) => {
            state.set_query_text(text);
            Vec::new()
        }
        Msg::PageSizeSelected(size) => {
            state.select_page_size(size);
            Vec::new()
        }
        Msg::SearchSubmitted => {
            let request_id = state.begin_request(PageAction::Search);
            vec![fetch_page(&state, request_id, None)]
        }
        Msg::NextClicked => {
            if !state.pagination().is_some_and(|p| p.next_enabled) {
                return (state, Vec::new());
            }
            let page = state.query().page + 1;
            let request_id = state.begin_request(PageAction::Next);
            vec![fetch_page(&state, request_id, Some(page))]
        }
        Msg::PrevClicked => {
            if !state.pagination().is_some_and(|p| p.prev_enabled) {
                return (state, Vec::new());
            }
            let target = state.query().page.saturating_sub(1).max(1);
            let request_id = state.begin_request(PageAction::Prev { target });
            vec![fetch_page(&state, request_id, Some(target))]
        }
        Msg::ClearClicked => {
            state.reset();
            Vec::new()
        }
        Msg::PageLoaded { request_id, reply } => {
            match state.pending_action(request_id) {
                Some(action) => apply_reply(&mut state, action, reply),
                None => search_debug!("Dropping stale reply for request {}", request_id),
            }
            Vec::new()
        }
        Msg::PageFailed {
            request_id,
            message,
        } => {
            if state.pending_action(request_id).is_some() {
                state.fail(SearchError::Upstream(message));
            } else {
                search_debug!("Dropping stale failure for request {}", request_id);
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn fetch_page(state: &AppState, request_id: RequestId, page: Option<u32>) -> Effect {
    let query = state.query();
    let request = PageRequest {
        search: query.text.clone(),
        per_page: query.per_page(),
        page,
    };
    search_debug!(
        "FetchPage request_id={} search={:?} per_page={} page={:?}",
        request_id,
        request.search,
        request.per_page,
        request.page
    );
    Effect::FetchPage {
        request_id,
        request,
    }
}

fn apply_reply(state: &mut AppState, action: PageAction, reply: ApiReply) {
    match action {
        PageAction::Search => match reply.body {
            ReplyBody::Articles(raw) => {
                state.set_page(1);
                state.finish_loaded(format_articles(&raw));
            }
            _ => state.fail(SearchError::ShapeMismatch),
        },
        PageAction::Next => {
            let next_page = state.query().page + 1;
            if reply.status == 200 {
                match reply.body {
                    ReplyBody::Articles(raw) => {
                        state.set_page(next_page);
                        state.finish_loaded(format_articles(&raw));
                    }
                    _ => state.fail(SearchError::ShapeMismatch),
                }
            } else {
                let error = match reply.body {
                    ReplyBody::Message { message, .. } if message == PAGE_OUT_OF_RANGE_MESSAGE => {
                        SearchError::NoMorePages
                    }
                    ReplyBody::Message { message, .. } => SearchError::Upstream(message),
                    _ => SearchError::Upstream(format!("HTTP {}", reply.status)),
                };
                // The counter advances even though the page could not be shown.
                state.set_page(next_page);
                state.fail(error);
            }
        }
        PageAction::Prev { target } => match reply.body {
            ReplyBody::Articles(raw) => {
                state.set_page(target);
                state.finish_loaded(format_articles(&raw));
            }
            _ => state.fail(SearchError::ShapeMismatch),
        },
    }
}
