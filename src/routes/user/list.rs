use crate::db::user::UserStore;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserListRes;
use actix_web::{get, web};
use std::sync::Arc;

#[get("/")]
async fn list(store: web::Data<Arc<dyn UserStore>>) -> ApiResult<UserListRes> {
    let users = store.list_users().await?;
    Ok(ApiResponse::Ok(UserListRes { users }))
}
