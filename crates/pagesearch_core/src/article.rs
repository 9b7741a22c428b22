/// One WordPress page as returned by the REST API, with the rendered HTML
/// fields flattened out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArticle {
    pub id: u64,
    pub title_html: String,
    pub content_html: String,
    pub link: String,
    /// ISO-8601 timestamp, e.g. `2022-07-20T08:32:39`.
    pub date: String,
}

/// A search result ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayArticle {
    pub id: u64,
    pub title: String,
    pub author: String,
    /// `"Mon Year"`.
    pub date: String,
    pub link: String,
}

/// What the API sent back for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: ReplyBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyBody {
    /// A JSON array of pages.
    Articles(Vec<RawArticle>),
    /// A JSON error object such as `{"code": "...", "message": "..."}`.
    Message { code: Option<String>, message: String },
    /// Any other JSON value.
    Unexpected,
}
