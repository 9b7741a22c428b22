//! Page search engine: REST requests and effect execution.
mod engine;
mod fetch;
mod types;
mod wire;

pub use engine::{EngineConfig, EngineError, EngineHandle};
pub use fetch::{
    pages_url, EventSink, FetchSettings, PageFetcher, ReqwestPageFetcher,
    PAGE_FIELDS,
};
pub use types::{EngineEvent, FailureKind, FetchError, PageQuery, PageReply, ReplyBody, RequestId};
pub use wire::{classify_body, Rendered, WireArticle};
