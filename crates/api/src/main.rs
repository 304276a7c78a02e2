use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use brandkit_gemini::{GeminiClient, GeminiConfig};
use brandkit_media::{CloudinaryClient, MediaConfig};
use brandkit_pipeline::{HttpImageFetcher, LayoutPipeline, PipelineConfig};
use tokio::sync::Notify;

use brandkit_api::config::ServerConfig;
use brandkit_api::router::build_app_router;
use brandkit_api::state::AppState;
use brandkit_api::telemetry;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ServerConfig::from_env();

    // --- Tracing ---
    telemetry::init_tracing(config.log_format);
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = brandkit_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    brandkit_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    brandkit_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Media service ---
    let media = CloudinaryClient::new(MediaConfig::from_env())
        .expect("Failed to build media service client");
    tracing::info!("Media service client created");

    // --- Layout pipeline ---
    let gemini_config = GeminiConfig::from_env();
    tracing::info!(model = %gemini_config.model, "Generative model configured");
    let gemini = GeminiClient::new(gemini_config).expect("Failed to build Gemini client");

    let pipeline_config = PipelineConfig::from_env();
    let fetcher = HttpImageFetcher::new(pipeline_config.image_fetch_timeout())
        .expect("Failed to build image fetcher");
    let pipeline = LayoutPipeline::new(Arc::new(gemini), Arc::new(fetcher), pipeline_config.retry);

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        media: Arc::new(media),
        pipeline: Arc::new(pipeline),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    let shutdown = Arc::new(Notify::new());
    let server = axum::serve(listener, app).with_graceful_shutdown({
        let shutdown = Arc::clone(&shutdown);
        async move {
            shutdown_signal().await;
            shutdown.notify_one();
        }
    });

    let drain_timeout = Duration::from_secs(config.shutdown_timeout_secs);
    tokio::select! {
        result = server.into_future() => {
            result.expect("Server error");
            tracing::info!("Graceful shutdown complete");
        }
        () = async {
            shutdown.notified().await;
            tokio::time::sleep(drain_timeout).await;
        } => {
            tracing::warn!(
                timeout_secs = config.shutdown_timeout_secs,
                "Shutdown timeout elapsed, dropping in-flight requests",
            );
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
