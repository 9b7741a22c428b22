use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPage {
        request_id: RequestId,
        request: PageRequest,
    },
}

/// Parameters of one page search against the content API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub search: String,
    pub per_page: u32,
    /// Omitted for a fresh search; the API then returns the first page.
    pub page: Option<u32>,
}
