// src/routes/teams.rs
use actix_web::{get, post, web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::team_handler;
use crate::models::team::TeamRegistrationRequest;
use crate::storage::AppStores;

/// Register a new team into a league
#[post("/teams/register")]
async fn register_team(
    request: web::Json<TeamRegistrationRequest>,
    stores: web::Data<AppStores>,
) -> Result<HttpResponse> {
    team_handler::register_team(request, stores).await
}

/// Get all teams
#[get("/teams")]
async fn get_all_teams(stores: web::Data<AppStores>) -> Result<HttpResponse> {
    team_handler::get_all_teams(stores).await
}

/// Get team information by ID
#[get("/teams/{team_id}")]
async fn get_team(path: web::Path<Uuid>, stores: web::Data<AppStores>) -> Result<HttpResponse> {
    let team_id = path.into_inner();
    team_handler::get_team(team_id, stores).await
}
