use serde::{Deserialize, Serialize};

pub type NodeId = i64;

pub const DEFAULT_IDEA_LIMIT: usize = 3;

fn default_idea_limit() -> usize {
    DEFAULT_IDEA_LIMIT
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdeaRequest {
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub expand: bool,
    #[serde(default = "default_idea_limit")]
    pub limit: usize,
}

impl IdeaRequest {
    pub fn new(input: impl Into<String>, expand: bool, limit: usize) -> Self {
        Self {
            input: input.into(),
            expand,
            limit,
        }
    }
}

/// A caller-owned mind-map node. Only read, never modified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
}

/// One pair as proposed by the model, before validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionCandidate {
    pub from: Option<NodeId>,
    pub to: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Connection {
    pub id: u32,
    pub from: NodeId,
    pub to: NodeId,
}

/// Whether suggested connections must reference ids of the supplied nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionPolicy {
    /// Accept any pair that carries both ids.
    #[default]
    Unchecked,
    KnownNodesOnly,
}
