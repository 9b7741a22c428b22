use crate::{ApiReply, PageSize, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search text.
    QueryChanged(String),
    /// User picked a results-per-page option.
    PageSizeSelected(PageSize),
    /// User submitted the current search text.
    SearchSubmitted,
    /// User clicked Next.
    NextClicked,
    /// User clicked Prev.
    PrevClicked,
    /// User clicked Clear.
    ClearClicked,
    /// The API answered a request.
    PageLoaded { request_id: RequestId, reply: ApiReply },
    /// A request failed before a usable answer arrived.
    PageFailed { request_id: RequestId, message: String },
    /// Leaves state untouched; for input that maps to no action.
    NoOp,
}
