use std::time::Duration;

use anyhow::Context;
use axum_client_ip::ClientIpSource;
use clap::Parser;
use mindmap_core::{ConnectionPolicy, OpenAiClient, OpenAiConfig};

#[derive(Debug, Clone, Parser)]
pub struct HttpOpts {
    /// Address/port for the HTTP listener
    #[arg(long, env = "MINDMAP_HOST", default_value = "0.0.0.0:5001")]
    pub host: String,

    /// Allowed CORS origins, `*` allows any origin
    #[arg(
        long,
        value_delimiter = ';',
        default_value = "*",
        env = "MINDMAP_CORS_ORIGINS"
    )]
    pub origins: Vec<String>,

    // Client IP extraction source (default: raw socket via ConnectInfo).
    #[arg(long, default_value = "ConnectInfo", env = "MINDMAP_CLIENT_IP_SOURCE")]
    pub client_ip_source: ClientIpSource,

    /// Only accept suggested connections whose ids are among the submitted nodes
    #[arg(long, default_value = "false", env = "MINDMAP_CONNECTIONS_KNOWN_NODES_ONLY")]
    pub connections_known_nodes_only: bool,
}

impl HttpOpts {
    pub fn connection_policy(&self) -> ConnectionPolicy {
        if self.connections_known_nodes_only {
            ConnectionPolicy::KnownNodesOnly
        } else {
            ConnectionPolicy::Unchecked
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.origins.is_empty() || self.origins.iter().any(|origin| origin.trim() == "*")
    }
}

#[derive(Clone, Debug, Parser)]
pub struct LlmOpts {
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    /// Base URL of an OpenAI-compatible chat completions API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = mindmap_core::llm::client::DEFAULT_OPENAI_BASE_URL)]
    pub openai_base_url: String,

    /// Chat model used for every completion
    #[arg(long, env = "MINDMAP_MODEL", default_value = mindmap_core::llm::client::DEFAULT_MODEL)]
    pub model: String,

    /// Timeout for a single completion request, in seconds
    #[arg(long, env = "MINDMAP_REQUEST_TIMEOUT_SECS", default_value = "30")]
    pub request_timeout_secs: u64,
}

impl LlmOpts {
    pub fn client(&self) -> anyhow::Result<OpenAiClient> {
        let config = OpenAiConfig::new(&self.openai_api_key)
            .with_base_url(&self.openai_base_url)
            .with_model(&self.model)
            .with_timeout(Duration::from_secs(self.request_timeout_secs));
        tracing::info!(?config, "creating completion client");
        OpenAiClient::new(config).context("failed to build completion http client")
    }
}
