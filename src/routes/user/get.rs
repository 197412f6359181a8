use crate::db::user::UserStore;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::User;
use actix_web::{get, web};
use std::sync::Arc;

#[get("/{email}")]
async fn get(
    store: web::Data<Arc<dyn UserStore>>,
    path: web::Path<String>,
) -> ApiResult<User> {
    // Path segments arrive already percent-decoded.
    let email = path.into_inner();
    let user = store.get_user(&email).await?;
    Ok(ApiResponse::Ok(user))
}
