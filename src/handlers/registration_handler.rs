use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use uuid::Uuid;

use crate::models::common::ApiResponse;
use crate::models::user::{RegistrationRequest, User};
use crate::storage::AppStores;

#[tracing::instrument(
    name = "Adding a new user",
    skip(user_form, stores),
    fields(
        username = %user_form.username,
        user = %user_form
    )
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    stores: web::Data<AppStores>,
) -> Result<HttpResponse> {
    let now = Utc::now();
    let user = User {
        id: Uuid::nil(),
        username: user_form.username.clone(),
        email: user_form.email.clone(),
        league_ids: Vec::new(),
        created_at: now,
        updated_at: now,
    };

    match stores.users.save(user) {
        Ok(saved) => {
            tracing::info!("Registered user {} ({})", saved.username, saved.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success("User registered", saved)))
        }
        Err(e) => {
            tracing::error!("Failed to register user: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to register user")))
        }
    }
}
