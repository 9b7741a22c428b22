use serde::Deserialize;
use serde_json::Value;

use crate::{FailureKind, FetchError, ReplyBody};

/// A page object as serialized by the WordPress REST API when requested
/// with `_fields=id,title,link,date,content`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WireArticle {
    pub id: u64,
    pub title: Rendered,
    pub content: Rendered,
    pub link: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rendered {
    pub rendered: String,
}

/// Sorts a JSON body into the shapes the API is known to send.
pub fn classify_body(bytes: &[u8]) -> Result<ReplyBody, FetchError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;

    match value {
        Value::Array(_) => {
            let articles: Vec<WireArticle> = serde_json::from_value(value)
                .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
            Ok(ReplyBody::Articles(articles))
        }
        Value::Object(map) => match map.get("message").and_then(Value::as_str) {
            Some(message) => Ok(ReplyBody::Message {
                code: map.get("code").and_then(Value::as_str).map(str::to_string),
                message: message.to_string(),
            }),
            None => Ok(ReplyBody::Unexpected),
        },
        _ => Ok(ReplyBody::Unexpected),
    }
}
