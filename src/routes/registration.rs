use actix_web::{post, web, HttpResponse, Result};

use crate::handlers::registration_handler::register_user;
use crate::models::user::RegistrationRequest;
use crate::storage::AppStores;

#[post("/register_user")]
async fn register(
    user_form: web::Json<RegistrationRequest>,
    stores: web::Data<AppStores>,
) -> Result<HttpResponse> {
    register_user(user_form, stores).await
}
