use actix_web::{web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::error_response;
use crate::league::leagues::LeagueService;
use crate::models::common::ApiResponse;
use crate::models::league::CreateLeagueRequest;

#[tracing::instrument(
    name = "Create league",
    skip(request, service),
    fields(
        league_name = %request.name,
        owner_id = %request.owner_id
    )
)]
pub async fn create_league(
    request: web::Json<CreateLeagueRequest>,
    service: web::Data<LeagueService>,
) -> Result<HttpResponse> {
    match service.create_league(&request) {
        Ok(league) => Ok(HttpResponse::Ok().json(ApiResponse::success("League created", league))),
        Err(e) => {
            tracing::error!("Failed to create league: {}", e);
            Ok(error_response(&e))
        }
    }
}

#[tracing::instrument(name = "Get league", skip(service), fields(league_id = %league_id))]
pub async fn get_league(league_id: Uuid, service: web::Data<LeagueService>) -> Result<HttpResponse> {
    match service.find_leagues(Some(league_id)) {
        Ok(mut leagues) => match leagues.pop() {
            Some(league) => {
                Ok(HttpResponse::Ok().json(ApiResponse::success("League found", league)))
            }
            None => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error(format!(
                "league with id {} was not found",
                league_id
            )))),
        },
        Err(e) => Ok(error_response(&e)),
    }
}

#[tracing::instrument(name = "Get all leagues", skip(service))]
pub async fn get_all_leagues(service: web::Data<LeagueService>) -> Result<HttpResponse> {
    match service.find_leagues(None) {
        Ok(leagues) => {
            tracing::info!("Retrieved {} leagues", leagues.len());
            Ok(HttpResponse::Ok().json(ApiResponse::success("Leagues retrieved", leagues)))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

#[tracing::instrument(name = "Delete league", skip(service), fields(league_id = %league_id))]
pub async fn delete_league(
    league_id: Uuid,
    service: web::Data<LeagueService>,
) -> Result<HttpResponse> {
    match service.delete_league(league_id) {
        Ok(()) => {
            tracing::info!("Deleted league {}", league_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("League deleted")))
        }
        Err(e) => {
            tracing::error!("Failed to delete league {}: {}", league_id, e);
            Ok(error_response(&e))
        }
    }
}
