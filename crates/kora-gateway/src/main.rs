use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware::Logger, web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kora_gateway::{config::GatewayConfig, metrics::register_metrics, routes, state::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env.local takes precedence over .env
    dotenvy::from_filename(".env.local")
        .or_else(|_| dotenvy::dotenv())
        .ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match GatewayConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    let port = config.port;
    let allowed_origins = config.allowed_origins.clone();
    let rate_limit_rpm = config.rate_limit_rpm;
    let json_limit = config.json_limit;

    tracing::info!("Kora gateway listening on port {port}");
    tracing::info!("Frontend URL: {}", config.frontend_url);
    tracing::info!("Rate limit: {rate_limit_rpm} req/min per IP");
    tracing::info!("Session store: in-memory (sessions are lost on restart)");
    tracing::info!("  POST http://localhost:{port}/api/payments/create");
    tracing::info!("  GET  http://localhost:{port}/api/payments/{{session_id}}");
    tracing::info!("  POST http://localhost:{port}/api/payments/{{session_id}}/confirm");

    register_metrics();

    let state_data = web::Data::new(AppState::in_memory(config));

    let governor_conf = match GovernorConfigBuilder::default()
        .requests_per_minute(u64::from(rate_limit_rpm))
        .finish()
    {
        Some(conf) => conf,
        None => {
            tracing::error!("Failed to create rate limiter config");
            std::process::exit(1);
        }
    };

    HttpServer::new(move || {
        App::new()
            .app_data(state_data.clone())
            .app_data(routes::json_config(json_limit))
            .wrap(Logger::default())
            .wrap(kora_gateway::cors::build_cors(&allowed_origins))
            .wrap(Governor::new(&governor_conf))
            .configure(routes::health::configure)
            .configure(routes::currencies::configure)
            .configure(routes::payments::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
