use crate::types::error::AppError;
use actix_web::{HttpResponse, Responder};
use serde::Serialize;

pub enum ApiResponse<T> {
    Ok(T),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Short status payload, `{"message": "..."}`.
#[derive(Serialize)]
pub struct MessageRes {
    pub message: &'static str,
}

impl MessageRes {
    pub fn new(message: &'static str) -> Self {
        MessageRes { message }
    }
}
