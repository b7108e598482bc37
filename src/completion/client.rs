use crate::config::{ClientConfig, MAX_TOKENS, TEMPERATURE};

use super::{
    error::{CompletionError, CompletionErrorKind, Result},
    transport::{HttpReply, HttpTransport, Transport},
};

pub struct CompletionClient<T: Transport = HttpTransport> {
    config: ClientConfig,
    transport: T,
}
impl CompletionClient<HttpTransport> {
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(config, HttpTransport::new()?))
    }
}
impl<T: Transport> CompletionClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
    /// Sends `user_text` as the only message of a fresh request and returns
    /// the first choice's content. Nothing from earlier turns is sent.
    pub fn complete(&self, user_text: &str) -> Result<String> {
        let body = Self::make_chat_body(&self.config.model, user_text)?;
        tracing::debug!(endpoint = %self.config.endpoint, %body, "sending completion request");
        let reply =
            self.transport
                .post_json(&self.config.endpoint, body, self.config.api_key.as_ref())?;
        ChatCompletion::from_reply(reply)?.into_content()
    }
    fn make_chat_body(model: &str, user_text: &str) -> Result<String> {
        serde_json::to_string(&ChatRequest::new(
            model,
            vec![Message::new(Role::User, user_text)],
        ))
        .map_err(|e| {
            CompletionError::new(
                "Cause generate api json body",
                CompletionErrorKind::NotMakeChatBody(e.to_string()),
            )
        })
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f64,
}
impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
}
impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    System,
    Assistant,
}
impl Role {
    fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::System => "system",
            Self::Assistant => "assistant",
        }
    }
}
impl serde::Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, serde::Deserialize, PartialEq, Eq)]
pub struct ChatCompletion {
    choices: Vec<ChatChoice>,
}
#[derive(Debug, Clone, serde::Deserialize, PartialEq, Eq)]
struct ChatChoice {
    message: ChatChoiceMessage,
}
#[derive(Debug, Clone, serde::Deserialize, PartialEq, Eq)]
struct ChatChoiceMessage {
    content: Option<String>,
}
impl ChatCompletion {
    fn from_reply(reply: HttpReply) -> Result<Self> {
        if !reply.is_success() {
            return Err(CompletionError::new(
                format!("Unexpected code {} {}", reply.status, reply.reason),
                CompletionErrorKind::ResponseError {
                    status: reply.status,
                    reason: reply.reason,
                },
            ));
        }
        let body = match reply.body {
            Some(body) if !body.trim().is_empty() => body,
            _ => {
                return Err(CompletionError::new(
                    "No response from the model.",
                    CompletionErrorKind::NoResponse,
                ))
            }
        };
        match serde_json::from_str::<Self>(&body) {
            Ok(completion) => Ok(completion),
            Err(e) => Err(CompletionError::new(
                format!("Failed to parse chat response: {}", e),
                CompletionErrorKind::ParseError(body),
            )),
        }
    }
    fn into_content(mut self) -> Result<String> {
        if self.choices.is_empty() {
            return Err(CompletionError::new(
                "choices is empty",
                CompletionErrorKind::MissingContent,
            ));
        }
        self.choices.swap_remove(0).message.content.ok_or_else(|| {
            CompletionError::new(
                "choices[0].message.content is not found",
                CompletionErrorKind::MissingContent,
            )
        })
    }
}
