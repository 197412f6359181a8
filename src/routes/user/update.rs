use crate::db::user::UserStore;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::types::user::{RUserUpsert, User};
use actix_web::{put, web};
use std::sync::Arc;

#[put("/{email}")]
async fn update(
    store: web::Data<Arc<dyn UserStore>>,
    path: web::Path<String>,
    body: web::Json<RUserUpsert>,
) -> ApiResult<MessageRes> {
    let email = path.into_inner();
    let user = User::try_from(body.into_inner())?;
    store.update_user(&email, &user).await?;
    Ok(ApiResponse::Ok(MessageRes::new("User updated successfully")))
}
