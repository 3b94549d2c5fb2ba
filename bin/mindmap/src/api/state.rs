use std::sync::Arc;

use axum::extract::FromRef;
use mindmap_core::{CompletionClient, ConnectionPolicy};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub completion: Arc<dyn CompletionClient>,
    pub connection_policy: ConnectionPolicy,
}

impl AppState {
    pub fn new(completion: Arc<dyn CompletionClient>, connection_policy: ConnectionPolicy) -> Self {
        Self {
            completion,
            connection_policy,
        }
    }
}
