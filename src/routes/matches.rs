// src/routes/matches.rs
use actix_web::{delete, get, post, put, web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::match_handler;
use crate::league::reconciliation::ReconciliationService;
use crate::models::matches::{CreateMatchRequest, MatchReport};

/// Create a new match between two league teams
#[post("")]
async fn create_match(
    request: web::Json<CreateMatchRequest>,
    service: web::Data<ReconciliationService>,
) -> Result<HttpResponse> {
    match_handler::create_match(request, service).await
}

/// Get all matches
#[get("")]
async fn list_matches(service: web::Data<ReconciliationService>) -> Result<HttpResponse> {
    match_handler::list_matches(service).await
}

/// Submit one side's result report for a match
#[put("/report")]
async fn report_result(
    report: web::Json<MatchReport>,
    service: web::Data<ReconciliationService>,
) -> Result<HttpResponse> {
    match_handler::report_result(report, service).await
}

/// Resolve a conflicted match (league owner only)
#[put("/resolve")]
async fn resolve_conflict(
    report: web::Json<MatchReport>,
    service: web::Data<ReconciliationService>,
) -> Result<HttpResponse> {
    match_handler::resolve_conflict(report, service).await
}

/// Get a specific match by ID
#[get("/{match_id}")]
async fn get_match(
    path: web::Path<Uuid>,
    service: web::Data<ReconciliationService>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::get_match(match_id, service).await
}

/// Delete a match
#[delete("/{match_id}")]
async fn delete_match(
    path: web::Path<Uuid>,
    service: web::Data<ReconciliationService>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match_handler::delete_match(match_id, service).await
}
