use std::time::Duration;

use futures_util::StreamExt;
use search_logging::{search_debug, search_trace};
use url::Url;

use crate::wire::classify_body;
use crate::{EngineEvent, FailureKind, FetchError, PageQuery, PageReply};

/// Fields requested for every page; everything the display needs and no more.
pub const PAGE_FIELDS: &str = "id,title,link,date,content";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// `None` leaves the HTTP client's default in place.
    pub connect_timeout: Option<Duration>,
    /// `None` leaves the HTTP client's default in place.
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            request_timeout: None,
            max_bytes: 8 * 1024 * 1024,
        }
    }
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_pages(&self, query: &PageQuery) -> Result<PageReply, FetchError>;
}

/// Builds `{api_base}/pages?_fields=...&search=...&per_page=...[&page=...]`.
pub fn pages_url(api_base: &str, query: &PageQuery) -> Result<Url, FetchError> {
    let base = api_base.trim_end_matches('/');
    let mut url = Url::parse(&format!("{base}/pages"))
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("_fields", PAGE_FIELDS);
        pairs.append_pair("search", &query.search);
        pairs.append_pair("per_page", &query.per_page.to_string());
        if let Some(page) = query.page {
            pairs.append_pair("page", &page.to_string());
        }
    }
    Ok(url)
}

#[derive(Debug, Clone)]
pub struct ReqwestPageFetcher {
    api_base: String,
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestPageFetcher {
    pub fn new(api_base: impl Into<String>, settings: FetchSettings) -> Result<Self, FetchError> {
        let api_base = api_base.into();
        Url::parse(&api_base)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            api_base,
            settings,
            client,
        })
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl PageFetcher for ReqwestPageFetcher {
    async fn fetch_pages(&self, query: &PageQuery) -> Result<PageReply, FetchError> {
        let url = pages_url(&self.api_base, query)?;
        search_debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
            search_trace!("read {} bytes, {} total", chunk.len(), bytes.len());
        }

        search_debug!("status={} bytes={}", status, bytes.len());
        let body = classify_body(&bytes)?;
        Ok(PageReply { status, body })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<u32>) -> PageQuery {
        PageQuery {
            search: "fish & chips".to_string(),
            per_page: 40,
            page,
        }
    }

    #[test]
    fn url_without_page_omits_page_param() {
        let url = pages_url("https://example.org/wp-json/wp/v2", &query(None)).unwrap();
        assert_eq!(url.path(), "/wp-json/wp/v2/pages");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("_fields".to_string(), PAGE_FIELDS.to_string()),
                ("search".to_string(), "fish & chips".to_string()),
                ("per_page".to_string(), "40".to_string()),
            ]
        );
    }

    #[test]
    fn url_with_page_and_trailing_slash_base() {
        let url = pages_url("https://example.org/wp-json/wp/v2/", &query(Some(3))).unwrap();
        assert_eq!(url.path(), "/wp-json/wp/v2/pages");
        assert!(url.query_pairs().any(|(k, v)| k == "page" && v == "3"));
    }

    #[test]
    fn search_text_is_encoded() {
        let url = pages_url("https://example.org/wp-json/wp/v2", &query(None)).unwrap();
        let raw_query = url.query().unwrap();
        assert!(raw_query.contains("search=fish+%26+chips"), "{raw_query}");
    }

    #[test]
    fn relative_base_is_rejected() {
        let err = pages_url("wp-json/wp/v2", &query(None)).unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
        let err = ReqwestPageFetcher::new("not a url", FetchSettings::default()).unwrap_err();
        assert_eq!(err.kind, FailureKind::InvalidUrl);
    }
}
