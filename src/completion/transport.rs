use reqwest::header::CONTENT_TYPE;

use crate::config::ApiKey;

use super::error::{CompletionError, CompletionErrorKind, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub reason: String,
    pub body: Option<String>,
}
impl HttpReply {
    pub fn new(status: u16, reason: impl Into<String>, body: Option<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
            body,
        }
    }
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Transport {
    fn post_json(&self, url: &str, body: String, api_key: Option<&ApiKey>) -> Result<HttpReply>;
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}
impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(Self::build_error)?;
        Ok(Self::from_client(client))
    }
    fn build_error(e: impl std::fmt::Display) -> CompletionError {
        CompletionError::new(
            "Cause Error at HttpTransport::new",
            CompletionErrorKind::RequestError(e.to_string()),
        )
    }
    pub fn from_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}
impl Transport for HttpTransport {
    fn post_json(&self, url: &str, body: String, api_key: Option<&ApiKey>) -> Result<HttpReply> {
        let mut request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(key) = api_key {
            request = request.bearer_auth(key.key());
        }
        let response = request.send()?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "received completion response");
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let text = response.text()?;
        let body = if text.is_empty() { None } else { Some(text) };
        Ok(HttpReply::new(status.as_u16(), reason, body))
    }
}

#[cfg(test)]
pub mod fakes {
    use std::{cell::RefCell, collections::VecDeque};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SentRequest {
        pub url: String,
        pub body: String,
        pub api_key: Option<String>,
    }

    pub struct FakeTransport {
        replies: RefCell<VecDeque<Result<HttpReply>>>,
        sent: RefCell<Vec<SentRequest>>,
    }
    impl FakeTransport {
        pub fn new() -> Self {
            Self {
                replies: RefCell::new(VecDeque::new()),
                sent: RefCell::new(Vec::new()),
            }
        }
        pub fn reply(self, reply: HttpReply) -> Self {
            self.replies.borrow_mut().push_back(Ok(reply));
            self
        }
        pub fn reply_ok(self, body: impl Into<String>) -> Self {
            self.reply(HttpReply::new(200, "OK", Some(body.into())))
        }
        pub fn fail(self, message: &str) -> Self {
            self.replies
                .borrow_mut()
                .push_back(Err(CompletionError::new(
                    "Cause Error at FakeTransport::post_json",
                    CompletionErrorKind::RequestError(message.to_string()),
                )));
            self
        }
        pub fn sent(&self) -> Vec<SentRequest> {
            self.sent.borrow().clone()
        }
        pub fn called_time(&self) -> usize {
            self.sent.borrow().len()
        }
    }
    impl Transport for FakeTransport {
        fn post_json(
            &self,
            url: &str,
            body: String,
            api_key: Option<&ApiKey>,
        ) -> Result<HttpReply> {
            self.sent.borrow_mut().push(SentRequest {
                url: url.to_string(),
                body,
                api_key: api_key.map(|k| k.key().to_string()),
            });
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(HttpReply::new(200, "OK", None)))
        }
    }
    pub fn make_completion_json(content: &str) -> String {
        serde_json::json!({
            "id": "chatcmpl-xxxxxxxxxxxxxxxxxxxxxxxxxxxxx",
            "object": "chat.completion",
            "created": 1694832938,
            "model": "pai-001",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }
            ]
        })
        .to_string()
    }
}
