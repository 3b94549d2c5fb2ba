use crate::api::state::AppState;
use crate::model::{IdeaRequest, IdeasResponse, RestructureRequest, RestructureResponse};
use axum::{
    Router,
    extract::{Json, State, rejection::JsonRejection},
    routing::post,
};
use mindmap_core::{generate_ideas, suggest_connections};
use tracing::instrument;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/generate_ideas", post(generate_ideas_handler))
        .route("/auto_restructure", post(auto_restructure_handler))
}

/// Suggest labels for new nodes. Failures, including unreadable bodies, degrade
/// to an empty list.
#[instrument(skip(state, req))]
pub async fn generate_ideas_handler(
    State(state): State<AppState>,
    req: Result<Json<IdeaRequest>, JsonRejection>,
) -> Json<IdeasResponse> {
    let req = match req {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::error!(kind = "request_body", "Idea request rejected: {}", rejection);
            return Json(IdeasResponse { ideas: Vec::new() });
        }
    };

    tracing::debug!(expand = req.expand, limit = req.limit, "idea request");
    let ideas = generate_ideas(state.completion.as_ref(), &req)
        .await
        .unwrap_or_else(|e| {
            tracing::error!(kind = e.kind(), "Idea generation failed: {}", e);
            Vec::new()
        });

    Json(IdeasResponse { ideas })
}

/// Suggest connections between existing nodes. Failures degrade to an empty list.
#[instrument(skip(state, req))]
pub async fn auto_restructure_handler(
    State(state): State<AppState>,
    req: Result<Json<RestructureRequest>, JsonRejection>,
) -> Json<RestructureResponse> {
    let req = match req {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::error!(kind = "request_body", "Restructure request rejected: {}", rejection);
            return Json(RestructureResponse {
                connections: Vec::new(),
            });
        }
    };
    tracing::debug!(nodes = req.nodes.len(), "restructure request");

    let connections =
        suggest_connections(state.completion.as_ref(), &req.nodes, state.connection_policy)
            .await
            .unwrap_or_else(|e| {
                tracing::error!(kind = e.kind(), "Connection suggestion failed: {}", e);
                Vec::new()
            });

    Json(RestructureResponse { connections })
}
