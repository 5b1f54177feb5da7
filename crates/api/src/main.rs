use std::net::SocketAddr;
use std::sync::Arc;

use companion_api::config::ServerConfig;
use companion_api::router::build_app_router;
use companion_api::state::AppState;
use companion_cloud::cdn::{CloudinaryConfig, CloudinaryHost, ImageHost};
use companion_cloud::relay::{EmailJsConfig, EmailJsRelay, StoryRelay};
use companion_core::capture::decode_rgba;
use image::RgbaImage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "companion_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(?config, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = match companion_db::create_pool(&database_url).await {
        Ok(pool) => {
            tracing::info!("Database connection pool created");
            companion_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");
            pool
        }
        Err(e) => {
            // Stories degrade to the fallback list; everything else answers 500
            // until the database comes back.
            tracing::warn!(error = %e, "Database unreachable at startup, continuing degraded");
            companion_db::create_lazy_pool(&database_url).expect("Invalid DATABASE_URL")
        }
    };

    // --- Outbound collaborators ---
    let image_host: Option<Arc<dyn ImageHost>> = match CloudinaryConfig::from_env() {
        Some(cdn_config) => {
            tracing::info!(cloud = %cdn_config.cloud_name, "Image uploads enabled");
            Some(Arc::new(
                CloudinaryHost::new(cdn_config).expect("Failed to build CDN client"),
            ))
        }
        None => {
            tracing::warn!("Cloudinary credentials missing, image uploads disabled");
            None
        }
    };

    let story_relay: Option<Arc<dyn StoryRelay>> = match EmailJsConfig::from_env() {
        Some(relay_config) => {
            tracing::info!("Story submissions enabled");
            Some(Arc::new(
                EmailJsRelay::new(relay_config).expect("Failed to build relay client"),
            ))
        }
        None => {
            tracing::warn!("EmailJS settings missing, story submissions disabled");
            None
        }
    };

    let overlay = config.overlay_path.as_ref().map(|path| {
        let bytes = std::fs::read(path)
            .unwrap_or_else(|e| panic!("Failed to read overlay {}: {e}", path.display()));
        let image: RgbaImage = decode_rgba(&bytes)
            .unwrap_or_else(|e| panic!("Failed to decode overlay {}: {e}", path.display()));
        tracing::info!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "Overlay asset loaded"
        );
        Arc::new(image)
    });

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        image_host,
        story_relay,
        overlay,
    };

    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(config.host.parse().expect("Invalid HOST"), config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT or SIGTERM.
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
