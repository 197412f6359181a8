use crate::db::user::UserStore;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::types::user::{RUserUpsert, User};
use actix_web::{post, web};
use std::sync::Arc;

#[post("/")]
async fn create(
    store: web::Data<Arc<dyn UserStore>>,
    body: web::Json<RUserUpsert>,
) -> ApiResult<MessageRes> {
    let user = User::try_from(body.into_inner())?;
    store.create_user(&user).await?;
    Ok(ApiResponse::Ok(MessageRes::new("User created successfully")))
}
