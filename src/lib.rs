use actix_web::dev::Server;
use actix_web::{http, web, App, HttpServer};
use actix_cors::Cors;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub mod config;
pub mod handlers;
pub mod league;
pub mod models;
mod routes;
pub mod storage;
pub mod telemetry;

use crate::league::leagues::LeagueService;
use crate::league::reconciliation::ReconciliationService;
use crate::routes::init_routes;
use crate::storage::AppStores;

pub fn run(listener: TcpListener, stores: AppStores) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let reconciliation = web::Data::new(ReconciliationService::new(&stores));
    let league_service = web::Data::new(LeagueService::new(&stores));
    let stores = web::Data::new(stores);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:3001")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH"])
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .configure(init_routes)
            .app_data(stores.clone())
            .app_data(reconciliation.clone())
            .app_data(league_service.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
