/// Upstream message WordPress sends when `page` is past the last page.
pub const PAGE_OUT_OF_RANGE_MESSAGE: &str =
    "The page number requested is larger than the number of pages available.";

/// Why the last search or paging action failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The API answered with something other than a list of pages. WordPress
    /// does this when `page` and `per_page` no longer agree.
    #[error(
        "Current page and results per page mismatch. \
         Do not change results per page when not on the first page."
    )]
    ShapeMismatch,
    /// Asked for a page past the end of the result set.
    #[error("No more results available.")]
    NoMorePages,
    /// Any other failure, reported as received.
    #[error("{0}")]
    Upstream(String),
}
