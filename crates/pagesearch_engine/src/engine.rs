use std::sync::{mpsc, Arc};
use std::thread;

use search_logging::{search_error, search_warn};

use crate::fetch::{EventSink, FetchSettings, PageFetcher, ReqwestPageFetcher};
use crate::{EngineEvent, FetchError, PageQuery, RequestId};

/// Where to reach the API and how to talk to it.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base of the WordPress REST API, e.g. `https://example.org/wp-json/wp/v2`.
    pub api_base: String,
    pub settings: FetchSettings,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine: {0}")]
    Startup(#[from] std::io::Error),
    #[error("failed to create http client: {0}")]
    Client(#[from] FetchError),
}

enum EngineCommand {
    Fetch {
        request_id: RequestId,
        query: PageQuery,
    },
}

/// Runs page fetches on a background tokio runtime and reports each result
/// to an [`EventSink`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let fetcher = ReqwestPageFetcher::new(config.api_base, config.settings)?;
        Self::with_fetcher(Arc::new(fetcher), sink)
    }

    pub fn with_fetcher(
        fetcher: Arc<dyn PageFetcher>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("pagesearch-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, sink.as_ref()).await;
                    });
                }
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn enqueue(&self, request_id: RequestId, query: PageQuery) {
        if self
            .cmd_tx
            .send(EngineCommand::Fetch { request_id, query })
            .is_err()
        {
            search_error!("Engine thread is gone; request {} dropped", request_id);
        }
    }
}

async fn handle_command(fetcher: &dyn PageFetcher, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::Fetch { request_id, query } => {
            let result = fetcher.fetch_pages(&query).await;
            if let Err(err) = &result {
                search_warn!("Request {} failed: {}", request_id, err);
            }
            sink.emit(EngineEvent::PageFetched { request_id, result });
        }
    }
}
