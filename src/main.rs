use actix_web::{middleware::Logger, web, App, HttpServer};
use book_reviews::config::EnvConfig;
use book_reviews::routes::configure_routes;
use book_reviews::store::{seed::default_catalog, MemoryStore};
use book_reviews::utils::token::TokenService;
use std::io;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let catalog = match &config.catalog_path {
        Some(path) => MemoryStore::load_catalog(path).map_err(io::Error::other)?,
        None => default_catalog(),
    };

    let store = Arc::new(MemoryStore::new(catalog));
    let tokens = Arc::new(TokenService::new(&config.jwt_secret, config.token_ttl_secs));

    info!(
        "Token lifetime {}s, catalog source {}",
        config.token_ttl_secs,
        config.catalog_path.as_deref().unwrap_or("built-in")
    );
    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&store)))
            .app_data(web::Data::new(Arc::clone(&tokens)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
