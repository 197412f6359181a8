use crate::db::user::UserStore;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use actix_web::{delete, web};
use std::sync::Arc;

#[delete("/{email}")]
async fn delete(
    store: web::Data<Arc<dyn UserStore>>,
    path: web::Path<String>,
) -> ApiResult<MessageRes> {
    let email = path.into_inner();
    store.delete_user(&email).await?;
    Ok(ApiResponse::Ok(MessageRes::new("User deleted successfully")))
}
