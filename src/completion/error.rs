#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
#[error("kind : {kind}\n message : {message}")]
pub struct CompletionError {
    message: String,
    pub kind: CompletionErrorKind,
}
impl CompletionError {
    pub fn new(message: impl Into<String>, kind: CompletionErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}
impl From<reqwest::Error> for CompletionError {
    fn from(e: reqwest::Error) -> Self {
        Self::new(
            "Cause Error at HttpTransport::post_json",
            CompletionErrorKind::RequestError(e.to_string()),
        )
    }
}

#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum CompletionErrorKind {
    #[error("Request Error. Error is : {0}")]
    RequestError(String),
    #[error("Response Error. Status is : {status} {reason}")]
    ResponseError { status: u16, reason: String },
    #[error("No response from the model")]
    NoResponse,
    #[error("Parse Error. Error is : {0}")]
    ParseError(String),
    #[error("Response has no message content")]
    MissingContent,
    #[error("Not make chat body from {0}")]
    NotMakeChatBody(String),
}

pub type Result<T> = std::result::Result<T, CompletionError>;
