use mindmap_core::{Connection, Node};
use serde::{Deserialize, Serialize};

pub use mindmap_core::IdeaRequest;

#[derive(Debug, Serialize, Deserialize)]
pub struct IdeasResponse {
    pub ideas: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RestructureRequest {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RestructureResponse {
    pub connections: Vec<Connection>,
}
