use std::{
    convert::Infallible,
    fmt::{Debug, Display},
    str::FromStr,
};

pub const DEFAULT_ENDPOINT: &str = "https://api.pawan.krd/cosmosrp/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "pai-001";
pub const MAX_TOKENS: u32 = 240;
pub const TEMPERATURE: f64 = 1.0;

pub const DEFAULT_USER_LABEL: &str = "You";
pub const DEFAULT_BOT_LABEL: &str = "Bot";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<ApiKey>,
}
impl ClientConfig {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: None,
        }
    }
    pub fn with_api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }
}
impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_MODEL)
    }
}

/// Bearer token sent only when explicitly configured. Never printed in clear.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
    pub(crate) fn key(&self) -> &str {
        self.0.as_str()
    }
}
impl FromStr for ApiKey {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
impl Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", "x".repeat(self.0.len()))
    }
}
impl Display for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", "x".repeat(self.0.len()))
    }
}
