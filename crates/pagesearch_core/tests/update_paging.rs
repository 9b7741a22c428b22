use pagesearch_core::{
    update, ApiReply, AppState, Effect, Msg, PageRequest, RawArticle, ReplyBody, RequestId,
    Screen, SearchError, PAGE_OUT_OF_RANGE_MESSAGE,
};

fn raw(id: u64) -> RawArticle {
    RawArticle {
        id,
        title_html: format!("Article {id}"),
        content_html: "<p><em>by Jane Doe</em></p>".to_string(),
        link: format!("https://example.org/?page_id={id}"),
        date: "2023-03-01T12:00:00".to_string(),
    }
}

fn articles_reply(ids: &[u64]) -> ApiReply {
    ApiReply {
        status: 200,
        body: ReplyBody::Articles(ids.iter().copied().map(raw).collect()),
    }
}

fn message_reply(status: u16, message: &str) -> ApiReply {
    ApiReply {
        status,
        body: ReplyBody::Message {
            code: Some("rest_post_invalid_page_number".to_string()),
            message: message.to_string(),
        },
    }
}

fn only_request(effects: &[Effect]) -> (RequestId, PageRequest) {
    match effects {
        [Effect::FetchPage {
            request_id,
            request,
        }] => (*request_id, request.clone()),
        other => panic!("expected one FetchPage effect, got {other:?}"),
    }
}

fn respond(state: AppState, effects: &[Effect], reply: ApiReply) -> AppState {
    let (request_id, _) = only_request(effects);
    update(state, Msg::PageLoaded { request_id, reply }).0
}

/// Runs a search and loads its first page.
fn searched(ids: &[u64]) -> AppState {
    let (state, _) = update(AppState::new(), Msg::QueryChanged("news".to_string()));
    let (state, effects) = update(state, Msg::SearchSubmitted);
    respond(state, &effects, articles_reply(ids))
}

/// Runs a search and pages forward until `page` is shown.
fn on_page(page: u32) -> AppState {
    let mut state = searched(&[1, 2]);
    while state.query().page < page {
        let (next, effects) = update(state, Msg::NextClicked);
        state = respond(next, &effects, articles_reply(&[10, 11]));
    }
    state
}

#[test]
fn next_requests_following_page_with_same_query() {
    let state = searched(&[1, 2]);
    let (state, effects) = update(state, Msg::NextClicked);

    let (_, request) = only_request(&effects);
    assert_eq!(
        request,
        PageRequest {
            search: "news".to_string(),
            per_page: 20,
            page: Some(2),
        }
    );
    assert_eq!(state.query().page, 1, "page advances only on reply");

    let state = respond(state, &effects, articles_reply(&[3, 4]));
    assert_eq!(state.query().page, 2);
    let ids: Vec<_> = state.articles().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![3, 4]);
    assert_eq!(state.articles()[0].author, "by Jane Doe");
    match state.view().screen {
        Screen::Results { controls, .. } => assert!(controls.prev_enabled),
        other => panic!("expected results, got {other:?}"),
    }
}

#[test]
fn next_past_last_page_reports_no_more_results_and_still_advances() {
    let state = searched(&[1]);
    let (state, effects) = update(state, Msg::NextClicked);
    let state = respond(
        state,
        &effects,
        message_reply(400, PAGE_OUT_OF_RANGE_MESSAGE),
    );

    assert_eq!(state.error(), Some(&SearchError::NoMorePages));
    assert!(state.articles().is_empty());
    assert_eq!(state.query().page, 2);
    match state.view().screen {
        Screen::Error { message, controls } => {
            assert_eq!(message, "No more results available.");
            assert_eq!(controls.page, 2);
            assert!(controls.prev_enabled);
            assert!(!controls.next_enabled);
        }
        other => panic!("expected error, got {other:?}"),
    }
}

#[test]
fn next_with_other_upstream_error_keeps_message() {
    let state = searched(&[1]);
    let (state, effects) = update(state, Msg::NextClicked);
    let state = respond(state, &effects, message_reply(500, "Database offline"));

    assert_eq!(
        state.error(),
        Some(&SearchError::Upstream("Database offline".to_string()))
    );
    assert_eq!(state.query().page, 2);
}

#[test]
fn next_error_without_message_reports_status() {
    let state = searched(&[1]);
    let (state, effects) = update(state, Msg::NextClicked);
    let state = respond(
        state,
        &effects,
        ApiReply {
            status: 502,
            body: ReplyBody::Unexpected,
        },
    );

    assert_eq!(
        state.error(),
        Some(&SearchError::Upstream("HTTP 502".to_string()))
    );
}

#[test]
fn next_ok_status_with_non_array_is_shape_mismatch() {
    let state = searched(&[1]);
    let (state, effects) = update(state, Msg::NextClicked);
    let state = respond(
        state,
        &effects,
        ApiReply {
            status: 200,
            body: ReplyBody::Unexpected,
        },
    );

    assert_eq!(state.error(), Some(&SearchError::ShapeMismatch));
    assert_eq!(state.query().page, 1);
}

#[test]
fn next_is_ignored_without_results() {
    // Before any search.
    let (state, effects) = update(AppState::new(), Msg::NextClicked);
    assert!(effects.is_empty());
    assert!(!state.is_loading());

    // On an empty result set.
    let state = searched(&[]);
    let (state, effects) = update(state, Msg::NextClicked);
    assert!(effects.is_empty());
    assert_eq!(state.view().screen, Screen::Empty);

    // While a request is in flight.
    let state = searched(&[1]);
    let (state, _) = update(state, Msg::NextClicked);
    let (_, effects) = update(state, Msg::NextClicked);
    assert!(effects.is_empty());
}

#[test]
fn prev_is_disabled_on_first_results_page() {
    let state = searched(&[1, 2]);
    let (state, effects) = update(state, Msg::PrevClicked);
    assert!(effects.is_empty());
    assert!(!state.is_loading());
}

#[test]
fn prev_from_error_on_first_page_requests_page_one() {
    let (state, _) = update(AppState::new(), Msg::QueryChanged("news".to_string()));
    let (state, effects) = update(state, Msg::SearchSubmitted);
    let state = respond(
        state,
        &effects,
        ApiReply {
            status: 200,
            body: ReplyBody::Unexpected,
        },
    );
    assert_eq!(state.query().page, 1);
    assert!(state.error().is_some());

    let (state, effects) = update(state, Msg::PrevClicked);
    let (_, request) = only_request(&effects);
    assert_eq!(request.page, Some(1));
    assert_eq!(state.error(), None, "prev clears the error before loading");
    assert!(state.is_loading());

    let state = respond(state, &effects, articles_reply(&[5]));
    assert_eq!(state.query().page, 1);
    assert!(state.is_submitted());
    assert_eq!(state.articles().len(), 1);
}

#[test]
fn prev_steps_back_one_page() {
    let state = on_page(3);
    let (state, effects) = update(state, Msg::PrevClicked);
    let (_, request) = only_request(&effects);
    assert_eq!(request.page, Some(2));

    let state = respond(state, &effects, articles_reply(&[7, 8]));
    assert_eq!(state.query().page, 2);
    let ids: Vec<_> = state.articles().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![7, 8]);
}

#[test]
fn prev_after_no_more_results_returns_to_last_page() {
    let state = searched(&[1]);
    let (state, effects) = update(state, Msg::NextClicked);
    let state = respond(
        state,
        &effects,
        message_reply(400, PAGE_OUT_OF_RANGE_MESSAGE),
    );
    assert_eq!(state.query().page, 2);

    let (state, effects) = update(state, Msg::PrevClicked);
    let (_, request) = only_request(&effects);
    assert_eq!(request.page, Some(1));
    let state = respond(state, &effects, articles_reply(&[1]));
    assert_eq!(state.query().page, 1);
    assert_eq!(state.error(), None);
}

#[test]
fn prev_with_non_array_body_is_shape_mismatch() {
    let state = on_page(2);
    let (state, effects) = update(state, Msg::PrevClicked);
    let state = respond(state, &effects, message_reply(400, "anything"));

    assert_eq!(state.error(), Some(&SearchError::ShapeMismatch));
    assert_eq!(state.query().page, 2);
}

#[test]
fn paging_uses_current_query_text() {
    let state = searched(&[1]);
    let (state, _) = update(state, Msg::QueryChanged("edited".to_string()));
    let (_, effects) = update(state, Msg::NextClicked);
    let (_, request) = only_request(&effects);
    assert_eq!(request.search, "edited");
}
