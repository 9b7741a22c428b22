use std::sync::{mpsc, Arc};

use pagesearch_core::{ApiReply, Effect, Msg, RawArticle, ReplyBody};
use pagesearch_engine::{
    EngineError, EngineEvent, EngineHandle, EventSink, PageQuery, PageReply, WireArticle,
};
use search_logging::search_info;

use super::app::AppEvent;
use super::config::AppConfig;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: &AppConfig, events: mpsc::Sender<AppEvent>) -> Result<Self, EngineError> {
        let sink = Arc::new(MsgSink { events });
        let engine = EngineHandle::new(config.engine_config(), sink)?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage {
                    request_id,
                    request,
                } => {
                    search_info!(
                        "FetchPage request_id={} page={:?} per_page={}",
                        request_id,
                        request.page,
                        request.per_page
                    );
                    self.engine.enqueue(
                        request_id,
                        PageQuery {
                            search: request.search,
                            per_page: request.per_page,
                            page: request.page,
                        },
                    );
                }
            }
        }
    }
}

/// Forwards engine results into the app's event loop as core messages.
struct MsgSink {
    events: mpsc::Sender<AppEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.events.send(AppEvent::Msgs(vec![map_event(event)]));
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageFetched { request_id, result } => match result {
            Ok(reply) => Msg::PageLoaded {
                request_id,
                reply: map_reply(reply),
            },
            Err(err) => Msg::PageFailed {
                request_id,
                message: err.message,
            },
        },
    }
}

fn map_reply(reply: PageReply) -> ApiReply {
    let body = match reply.body {
        pagesearch_engine::ReplyBody::Articles(articles) => {
            ReplyBody::Articles(articles.into_iter().map(map_article).collect())
        }
        pagesearch_engine::ReplyBody::Message { code, message } => {
            ReplyBody::Message { code, message }
        }
        pagesearch_engine::ReplyBody::Unexpected => ReplyBody::Unexpected,
    };
    ApiReply {
        status: reply.status,
        body,
    }
}

fn map_article(article: WireArticle) -> RawArticle {
    RawArticle {
        id: article.id,
        title_html: article.title.rendered,
        content_html: article.content.rendered,
        link: article.link,
        date: article.date,
    }
}
