use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zenith_api::bulk::Notifier;
use zenith_api::config::ServerConfig;
use zenith_api::router::build_app_router;
use zenith_api::state::AppState;
use zenith_db::PgApplicationStore;
use zenith_mail::MailConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "zenith_api=debug,zenith_mail=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration (fatal when incomplete) ---
    let config = ServerConfig::from_env().unwrap_or_else(|e| fatal("server configuration", &e));
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let mail_config = MailConfig::from_env().unwrap_or_else(|e| fatal("mail configuration", &e));

    // --- Database ---
    let pool = zenith_db::create_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    zenith_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    zenith_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Email ---
    let mailer =
        zenith_mail::build_mailer(&mail_config).unwrap_or_else(|e| fatal("mail transport", &e));
    tracing::info!(from = %mail_config.from_address, "Mail transport ready");

    // --- App state ---
    let state = AppState {
        store: Arc::new(PgApplicationStore::new(pool)),
        notifier: Arc::new(Notifier::new(
            mailer,
            mail_config.from_address.clone(),
            mail_config.letterhead.clone(),
        )),
        config: Arc::new(config.clone()),
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

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server stopped");
}

fn fatal(what: &str, error: &dyn std::fmt::Display) -> ! {
    tracing::error!(error = %error, "Invalid {what}");
    std::process::exit(1)
}

/// Wait for SIGINT (Ctrl-C) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
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
