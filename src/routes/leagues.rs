// src/routes/leagues.rs
use actix_web::{delete, get, post, web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::league_handler;
use crate::league::leagues::LeagueService;
use crate::models::league::CreateLeagueRequest;

/// Create a new league owned by an existing user
#[post("/create")]
async fn create_league(
    request: web::Json<CreateLeagueRequest>,
    service: web::Data<LeagueService>,
) -> Result<HttpResponse> {
    league_handler::create_league(request, service).await
}

/// Get all leagues
#[get("/all")]
async fn get_all_leagues(service: web::Data<LeagueService>) -> Result<HttpResponse> {
    league_handler::get_all_leagues(service).await
}

/// Get a specific league by ID
#[get("/{league_id}")]
async fn get_league(
    path: web::Path<Uuid>,
    service: web::Data<LeagueService>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    league_handler::get_league(league_id, service).await
}

/// Delete a league (the owner's league list is updated first)
#[delete("/{league_id}")]
async fn delete_league(
    path: web::Path<Uuid>,
    service: web::Data<LeagueService>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    league_handler::delete_league(league_id, service).await
}
