use actix_web::{web, App, HttpServer};
use redis_user_api::config::EnvConfig;
use redis_user_api::db::redis_service::RedisService;
use redis_user_api::db::user::UserStore;
use redis_user_api::routes::configure_routes;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let store: Arc<dyn UserStore> = Arc::new(
        RedisService::new(&config.redis_url)
            .await
            .expect("Failed to initialize RedisService"),
    );

    log::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&store)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
