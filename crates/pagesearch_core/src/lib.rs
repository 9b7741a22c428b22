//! Page search core: pure state machine, formatters and view-model helpers.
mod article;
mod effect;
mod error;
pub mod format;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use article::{ApiReply, DisplayArticle, RawArticle, ReplyBody};
pub use effect::{Effect, PageRequest};
pub use error::{SearchError, PAGE_OUT_OF_RANGE_MESSAGE};
pub use format::{format_article, format_articles, format_author, format_date, format_title};
pub use msg::Msg;
pub use query::{InvalidPageSize, PageSize, SearchQuery, DEFAULT_PER_PAGE};
pub use state::{AppState, PageAction, Phase, RequestId};
pub use update::update;
pub use view_model::{AppViewModel, Pagination, Screen};
