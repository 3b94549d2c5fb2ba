pub mod error;
pub mod helper_utils;
pub mod llm;
pub mod model;

pub use error::{CompletionError, Error, Result};
pub use llm::{
    CompletionClient, CompletionRequest, OpenAiClient, OpenAiConfig, generate_ideas,
    suggest_connections,
};
pub use model::{Connection, ConnectionCandidate, ConnectionPolicy, IdeaRequest, Node, NodeId};
