use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stockagent_core::backend::HttpBackend;
use stockagent_core::config::Settings;
use stockagent_web::AppState;

#[derive(Parser, Debug)]
#[command(name = "stockagent-web", about = "Stock analysis dashboard server")]
struct Args {
    /// Listen port; falls back to $PORT, then 3000.
    #[arg(long)]
    port: Option<u16>,

    /// Overrides BACKEND_BASE_URL.
    #[arg(long)]
    backend_base_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut settings = Settings::from_env()?;
    if let Some(url) = args.backend_base_url {
        settings.backend_base_url = url;
    }
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let backend = match HttpBackend::from_settings(&settings) {
        Ok(backend) => backend,
        Err(e) => {
            sentry_anyhow::capture_anyhow(&e);
            tracing::error!(error = %e, "backend client setup failed");
            return Err(e);
        }
    };
    tracing::info!(
        backend = %settings.backend_base_url,
        interactive = settings.interactive,
        "backend client ready"
    );

    let state = AppState::new(Arc::new(backend), settings);
    let app = stockagent_web::app(state);

    let port: u16 = args
        .port
        .or_else(|| std::env::var("PORT").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "dashboard listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}

fn init_sentry(settings: &Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
