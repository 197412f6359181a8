use actix_web::get;

use crate::types::response::{ApiResponse, ApiResult, MessageRes};

#[get("/")]
async fn welcome(_req: actix_web::HttpRequest) -> ApiResult<MessageRes> {
    Ok(ApiResponse::Ok(MessageRes::new("Welcome to the Redis API")))
}
