use crate::{api, opts::*};

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

pub async fn run(http_opts: HttpOpts, llm_opts: LlmOpts) -> anyhow::Result<()> {
    let client = llm_opts.client()?;
    let model = client.model().to_string();
    let app_state = api::state::AppState::new(Arc::new(client), http_opts.connection_policy());

    tracing::info!(
        model = %model,
        policy = ?app_state.connection_policy,
        "http listening on {}",
        http_opts.host
    );
    let app = api::build_app(&http_opts, app_state)?;
    let listener = TcpListener::bind(&http_opts.host)
        .await
        .with_context(|| format!("failed to bind {}", http_opts.host))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("http server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM. Same contract as `atb_tokio_ext::shutdown_signal`,
/// which is not pulled in here.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {:?}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {:?}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl-c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
