use crate::{DisplayArticle, PageSize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub query_text: String,
    pub page_size: Option<PageSize>,
    pub per_page: u32,
    pub page: u32,
    pub screen: Screen,
    pub dirty: bool,
}

/// Which renderer the front end should show, in precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Nothing searched yet.
    Blank,
    Loading,
    Error {
        message: String,
        controls: Pagination,
    },
    /// A search completed without matches.
    Empty,
    Results {
        articles: Vec<DisplayArticle>,
        controls: Pagination,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}
