use clap::Parser;

use crate::{
    completion::CompletionClient,
    config::{
        ApiKey, ClientConfig, DEFAULT_BOT_LABEL, DEFAULT_ENDPOINT, DEFAULT_MODEL,
        DEFAULT_USER_LABEL,
    },
    repl::ChatRepl,
};

/// Console chat client for the CosmosRP completion endpoint.
#[derive(Parser, Debug)]
#[command(name = "cosmosrp-chat", version)]
pub struct Cosmos {
    #[arg(long, env = "COSMOSRP_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
    #[arg(long, env = "COSMOSRP_MODEL", default_value = DEFAULT_MODEL)]
    model: String,
    /// Sent as a bearer token. Nothing is sent when unset.
    #[arg(long, env = "COSMOSRP_API_KEY", hide_env_values = true)]
    api_key: Option<ApiKey>,
    #[arg(long, default_value = DEFAULT_USER_LABEL)]
    user_label: String,
    #[arg(long, default_value = DEFAULT_BOT_LABEL)]
    bot_label: String,
}

impl Cosmos {
    pub fn new() -> Self {
        Self::parse()
    }
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.endpoint.as_str(), self.model.as_str());
        match self.api_key.clone().filter(|key| !key.key().is_empty()) {
            Some(key) => config.with_api_key(key),
            None => config,
        }
    }
    pub fn run(&self) -> anyhow::Result<()> {
        let config = self.client_config();
        tracing::info!(endpoint = %config.endpoint, model = %config.model, "starting chat session");
        let client = CompletionClient::from_config(config)?;
        let mut repl = ChatRepl::new(client);
        repl.set_user_name(&self.user_label);
        repl.set_bot_display(&self.bot_label);
        repl.repl()?;
        Ok(())
    }
}
