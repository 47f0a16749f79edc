use std::process::ExitCode;

use actix_web::{App, HttpServer, middleware, web};

use catalog_service::db::{establish_connection_pool, run_pending_migrations};
use catalog_service::models::config::ServerConfig;
use catalog_service::repository::DieselRepository;
use catalog_service::routes;

#[actix_web::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run_pending_migrations(&pool) {
        log::error!("Failed to run database migrations: {e}");
        return ExitCode::FAILURE;
    }

    let repo = DieselRepository::new(pool);
    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting catalog service on {}:{}",
        server_config.address,
        server_config.port
    );

    let server = match HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind(bind_address)
    {
        Ok(server) => server,
        Err(e) => {
            log::error!("Failed to bind HTTP server: {e}");
            return ExitCode::FAILURE;
        }
    };

    match server.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("HTTP server stopped with an error: {e}");
            ExitCode::FAILURE
        }
    }
}
