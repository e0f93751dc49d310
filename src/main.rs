mod handlers;
mod middlewares;
mod models;
mod registry;
mod routes;
mod state;
mod structs;
mod utils;

use crate::state::app_state::AppState;
use crate::state::config::AppConfig;
use actix_cors::Cors;
use actix_web::{App, HttpServer, http, middleware::Logger, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use routes::init_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Create shared state
    let app_state = web::Data::new(AppState::new(config.clone()));

    if config.seed_demo_data {
        let password_hash = bcrypt::hash(registry::seed::DEMO_PASSWORD, config.bcrypt_cost)
            .map_err(std::io::Error::other)?;
        if let Err(e) =
            registry::seed::seed_demo(&app_state.registry, password_hash, &config.admin_username)
                .await
        {
            error!("Failed to seed demo data: {}", e);
            std::process::exit(1);
        }
    }

    info!(
        "Serving QR codes for {} on {}:{}",
        config.app_domain, config.bind_addr, config.port
    );

    let cors_origins = config.cors_origins.clone();
    HttpServer::new(move || {
        // Create a logger with a custom format instead
        let logger = Logger::new("%a \"%r\" %s %b \"%{Referer}i\" \"%{User-Agent}i\" %D ms");
        let cors = cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![http::header::AUTHORIZATION, http::header::ACCEPT])
            .allowed_header(http::header::CONTENT_TYPE)
            .max_age(3600);
        App::new()
            .wrap(logger)
            .wrap(cors)
            .app_data(app_state.clone())
            .configure(init_routes)
    })
    .bind((config.bind_addr.as_str(), config.port))?
    .run()
    .await
}
