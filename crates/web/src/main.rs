use anyhow::Context;
use axum::http::{HeaderValue, Method, header};
use storage::ScoreStore;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use web::config::Config;
use web::{build_router, features};

#[derive(OpenApi)]
#[openapi(
    paths(
        features::health::handlers::health,
        features::scores::handlers::create_score,
        features::scores::handlers::get_leaderboard,
    ),
    components(
        schemas(
            features::health::handlers::HealthResponse,
            storage::dto::score::CreateScoreRequest,
            storage::models::score::Score,
            storage::models::score::Difficulty,
        )
    ),
    tags(
        (name = "health", description = "Service health endpoint"),
        (name = "scores", description = "Score submission and leaderboard endpoints"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .init();

    tracing::info!("Starting tank-game score API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let store = ScoreStore::new();
    tracing::info!("In-memory score store initialized (data is lost on restart)");

    let openapi = ApiDoc::openapi();

    let app = build_router(store)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .layer(cors_layer(&config.frontend_origin)?);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Browser clients are served from a separate origin, so the API answers
/// preflights for the configured frontend. `*` (the default) allows any
/// origin.
fn cors_layer(frontend_origin: &str) -> anyhow::Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(if frontend_origin == "*" {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(
            frontend_origin
                .parse::<HeaderValue>()
                .context("FRONTEND_ORIGIN must be a valid origin")?,
        )
    })
}
