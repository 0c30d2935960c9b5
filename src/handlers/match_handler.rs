use actix_web::{web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::error_response;
use crate::league::error::ServiceError;
use crate::league::reconciliation::ReconciliationService;
use crate::models::common::ApiResponse;
use crate::models::matches::{CreateMatchRequest, MatchReport};

#[tracing::instrument(
    name = "Create match",
    skip(request, service),
    fields(
        home_team_id = %request.home_team_id,
        away_team_id = %request.away_team_id,
        league_id = %request.league_id
    )
)]
pub async fn create_match(
    request: web::Json<CreateMatchRequest>,
    service: web::Data<ReconciliationService>,
) -> Result<HttpResponse> {
    match service.create_match(&request) {
        Ok(match_record) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success("Match created", match_record)))
        }
        Err(e) => {
            tracing::error!("Failed to create match: {}", e);
            Ok(error_response(&e))
        }
    }
}

#[tracing::instrument(name = "List matches", skip(service))]
pub async fn list_matches(service: web::Data<ReconciliationService>) -> Result<HttpResponse> {
    match service.find_matches(None) {
        Ok(matches) => {
            tracing::info!("Retrieved {} matches", matches.len());
            Ok(HttpResponse::Ok().json(ApiResponse::success("Matches retrieved", matches)))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

#[tracing::instrument(name = "Get match", skip(service), fields(match_id = %match_id))]
pub async fn get_match(
    match_id: Uuid,
    service: web::Data<ReconciliationService>,
) -> Result<HttpResponse> {
    match service.find_matches(Some(match_id)) {
        Ok(mut matches) => match matches.pop() {
            Some(match_record) => {
                Ok(HttpResponse::Ok().json(ApiResponse::success("Match found", match_record)))
            }
            None => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error(format!(
                "match with id {} was not found",
                match_id
            )))),
        },
        Err(e) => Ok(error_response(&e)),
    }
}

#[tracing::instrument(
    name = "Report match result",
    skip(report, service),
    fields(
        match_id = %report.match_id,
        reported_by = %report.reported_by
    )
)]
pub async fn report_result(
    report: web::Json<MatchReport>,
    service: web::Data<ReconciliationService>,
) -> Result<HttpResponse> {
    match service.report_result(&report) {
        Ok(outcome) => {
            tracing::info!(
                "Report for match {} accepted, status now {:?}",
                report.match_id,
                outcome.status
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success("Report recorded", outcome)))
        }
        // Conflicts are part of the protocol, not faults
        Err(e @ ServiceError::Conflict(_)) => {
            tracing::warn!("Report for match {} conflicted: {}", report.match_id, e);
            Ok(error_response(&e))
        }
        Err(e) => {
            tracing::error!("Failed to report match {}: {}", report.match_id, e);
            Ok(error_response(&e))
        }
    }
}

#[tracing::instrument(
    name = "Resolve match conflict",
    skip(report, service),
    fields(
        match_id = %report.match_id,
        resolved_by = %report.reported_by
    )
)]
pub async fn resolve_conflict(
    report: web::Json<MatchReport>,
    service: web::Data<ReconciliationService>,
) -> Result<HttpResponse> {
    match service.resolve_conflict(&report) {
        Ok(outcome) => {
            tracing::info!("Conflict on match {} resolved by owner", report.match_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success("Conflict resolved", outcome)))
        }
        Err(e) => {
            tracing::error!("Failed to resolve match {}: {}", report.match_id, e);
            Ok(error_response(&e))
        }
    }
}

#[tracing::instrument(name = "Delete match", skip(service), fields(match_id = %match_id))]
pub async fn delete_match(
    match_id: Uuid,
    service: web::Data<ReconciliationService>,
) -> Result<HttpResponse> {
    match service.delete_match(match_id) {
        Ok(()) => {
            tracing::info!("Deleted match {}", match_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Match deleted")))
        }
        Err(e) => {
            tracing::error!("Failed to delete match {}: {}", match_id, e);
            Ok(error_response(&e))
        }
    }
}
