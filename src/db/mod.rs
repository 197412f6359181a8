pub mod redis_service;
pub mod user;
