use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use uuid::Uuid;

use crate::league::rating;
use crate::models::common::ApiResponse;
use crate::models::team::{Team, TeamRegistrationRequest};
use crate::storage::AppStores;

#[tracing::instrument(
    name = "Register team",
    skip(request, stores),
    fields(
        team_name = %request.team_name,
        league_id = %request.league_id
    )
)]
pub async fn register_team(
    request: web::Json<TeamRegistrationRequest>,
    stores: web::Data<AppStores>,
) -> Result<HttpResponse> {
    if let Err(message) = request.validate() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(message)));
    }

    let league = match stores.leagues.find_by_id(request.league_id) {
        Ok(Some(league)) => league,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error(format!(
                "league with id {} was not found",
                request.league_id
            ))))
        }
        Err(e) => {
            tracing::error!("Failed to look up league: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("internal storage error")));
        }
    };

    let now = Utc::now();
    let team = Team {
        id: Uuid::nil(),
        league_id: league.id,
        owner_id: request.owner_id,
        team_name: request.team_name.trim().to_string(),
        team_description: request.team_description.clone(),
        wins: 0,
        losses: 0,
        rating: rating::DEFAULT_RATING,
        created_at: now,
        updated_at: now,
    };

    match stores.teams.save(team) {
        Ok(saved) => {
            tracing::info!("Registered team {} in league {}", saved.team_name, league.name);
            Ok(HttpResponse::Ok().json(ApiResponse::success("Team registered", saved)))
        }
        Err(e) => {
            tracing::error!("Failed to register team: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to register team")))
        }
    }
}

#[tracing::instrument(name = "Get team", skip(stores), fields(team_id = %team_id))]
pub async fn get_team(team_id: Uuid, stores: web::Data<AppStores>) -> Result<HttpResponse> {
    match stores.teams.find_by_id(team_id) {
        Ok(Some(team)) => Ok(HttpResponse::Ok().json(ApiResponse::success("Team found", team))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error(format!(
            "team with id {} was not found",
            team_id
        )))),
        Err(e) => {
            tracing::error!("Failed to look up team {}: {}", team_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("internal storage error")))
        }
    }
}

#[tracing::instrument(name = "Get all teams", skip(stores))]
pub async fn get_all_teams(stores: web::Data<AppStores>) -> Result<HttpResponse> {
    match stores.teams.find_all() {
        Ok(teams) => {
            tracing::info!("Retrieved {} teams", teams.len());
            Ok(HttpResponse::Ok().json(ApiResponse::success("Teams retrieved", teams)))
        }
        Err(e) => {
            tracing::error!("Failed to list teams: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("internal storage error")))
        }
    }
}
