use crate::error::{Error, Result};
use crate::llm::client::{CompletionClient, CompletionRequest};
use crate::model::{Connection, ConnectionCandidate, ConnectionPolicy, Node, NodeId};
use rand::{Rng, rngs::ThreadRng};
use serde_json::Value;
use std::collections::HashSet;

const SYSTEM_CONTENT: &str = "You help identify relationships between ideas.";

const MAX_TOKENS: u32 = 200;
const TEMPERATURE: f64 = 0.5;

/// Hands out random connection ids, never repeating one within its lifetime.
///
/// Create one per response. Ids from different allocators may collide.
pub struct IdAllocator<R = ThreadRng> {
    rng: R,
    issued: HashSet<u32>,
}

impl IdAllocator<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for IdAllocator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> IdAllocator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            issued: HashSet::new(),
        }
    }

    pub fn next_id(&mut self) -> u32 {
        loop {
            let id = self.rng.random::<u32>();
            if self.issued.insert(id) {
                return id;
            }
        }
    }
}

pub fn build_prompt(nodes: &[Node]) -> String {
    let node_list = nodes
        .iter()
        .map(|node| format!("{}: {}", node.id, node.label))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are an expert in understanding relationships between concepts. Given the following list of ideas with their IDs, suggest pairs of IDs that should be connected due to related content.

Ideas:
{node_list}

Provide a list of pairs of IDs that should be connected. Only provide the list of pairs in JSON format as follows:
[
    {{"from": ID1, "to": ID2}},
    {{"from": ID3, "to": ID4}},
    ...
]
Do not include any explanation."#
    )
}

pub fn completion_request(nodes: &[Node]) -> CompletionRequest {
    CompletionRequest {
        system: SYSTEM_CONTENT.to_string(),
        user: build_prompt(nodes),
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    }
}

fn node_id(value: &Value) -> Option<NodeId> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Reads the reply as a bare JSON array of `{from, to}` objects.
///
/// Any text around the array is a format error. Array elements that are not
/// objects are skipped; missing, null or non-integer ids come back as `None`.
pub fn parse_candidates(reply: &str) -> Result<Vec<ConnectionCandidate>> {
    let value: Value = serde_json::from_str(reply.trim())
        .map_err(|e| Error::ResponseFormat(format!("reply is not valid JSON: {e}")))?;

    let Value::Array(items) = value else {
        return Err(Error::ResponseFormat(
            "expected a JSON array of connection pairs".to_string(),
        ));
    };

    Ok(items
        .iter()
        .filter_map(|item| match item {
            Value::Object(pair) => Some(ConnectionCandidate {
                from: pair.get("from").and_then(node_id),
                to: pair.get("to").and_then(node_id),
            }),
            other => {
                tracing::warn!(element = %other, "skipping non-object connection candidate");
                None
            }
        })
        .collect())
}

/// Keeps the candidates that carry both ids (and, under
/// [`ConnectionPolicy::KnownNodesOnly`], reference supplied nodes), giving each
/// a fresh id.
pub fn accept_candidates<R: Rng>(
    candidates: Vec<ConnectionCandidate>,
    nodes: &[Node],
    policy: ConnectionPolicy,
    ids: &mut IdAllocator<R>,
) -> Vec<Connection> {
    let known: HashSet<NodeId> = nodes.iter().map(|node| node.id).collect();

    candidates
        .into_iter()
        .filter_map(|candidate| {
            let (Some(from), Some(to)) = (candidate.from, candidate.to) else {
                tracing::warn!(?candidate, "dropping connection candidate with missing id");
                return None;
            };
            if policy == ConnectionPolicy::KnownNodesOnly
                && !(known.contains(&from) && known.contains(&to))
            {
                tracing::warn!(from, to, "dropping connection to unknown node");
                return None;
            }
            Some(Connection {
                id: ids.next_id(),
                from,
                to,
            })
        })
        .collect()
}

/// Asks the model which of `nodes` belong together.
///
/// Fewer than two nodes returns an empty list without calling the model.
pub async fn suggest_connections(
    client: &dyn CompletionClient,
    nodes: &[Node],
    policy: ConnectionPolicy,
) -> Result<Vec<Connection>> {
    if nodes.len() < 2 {
        return Ok(Vec::new());
    }

    let reply = client.complete(completion_request(nodes)).await?;
    tracing::debug!(reply = %reply, "raw connection completion");

    let candidates = parse_candidates(&reply)?;
    let proposed = candidates.len();
    let connections = accept_candidates(candidates, nodes, policy, &mut IdAllocator::new());
    tracing::info!(
        nodes = nodes.len(),
        proposed,
        accepted = connections.len(),
        "connections suggested"
    );
    Ok(connections)
}
