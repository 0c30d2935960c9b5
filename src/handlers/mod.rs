pub mod backend_health_handler;
pub mod league_handler;
pub mod match_handler;
pub mod registration_handler;
pub mod team_handler;

use actix_web::HttpResponse;

use crate::league::error::ServiceError;
use crate::models::common::ApiResponse;

/// Maps core error kinds onto transport responses: missing references are
/// 404, malformed or mis-sequenced input is 400, disagreeing reports are 409
/// (an expected protocol outcome, not a server fault), storage failures 500.
pub fn error_response(error: &ServiceError) -> HttpResponse {
    match error {
        ServiceError::NotFound(_) => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(error.to_string()))
        }
        ServiceError::Validation(_) => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(error.to_string()))
        }
        ServiceError::Conflict(_) => {
            HttpResponse::Conflict().json(ApiResponse::<()>::error(error.to_string()))
        }
        ServiceError::Store(_) => HttpResponse::InternalServerError()
            .json(ApiResponse::<()>::error("internal storage error")),
    }
}
