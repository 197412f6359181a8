use crate::db::redis_service::RedisService;
use crate::types::{error::AppError, user::User};
use async_trait::async_trait;
use redis::AsyncCommands;
use std::collections::HashMap;

const USER_KEY_PATTERN: &str = "user:*";

pub fn user_key(email: &str) -> String {
    format!("user:{}", email)
}

/// Store operations behind the handlers, one per route. Object-safe so
/// tests can swap in an in-memory fake.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with `AlreadyExists` if the email key is taken.
    async fn create_user(&self, user: &User) -> Result<(), AppError>;

    async fn get_user(&self, email: &str) -> Result<User, AppError>;

    /// Overwrites the field map stored under `email`'s key with `user`.
    /// The key itself never moves, even when `user.email` differs.
    async fn update_user(&self, email: &str, user: &User) -> Result<(), AppError>;

    /// The delete return value doubles as the existence check.
    async fn delete_user(&self, email: &str) -> Result<(), AppError>;

    async fn list_users(&self) -> Result<Vec<User>, AppError>;
}

#[async_trait]
impl UserStore for RedisService {
    async fn create_user(&self, user: &User) -> Result<(), AppError> {
        let mut conn = self.conn();
        let key = user_key(&user.email);
        let exists: bool = conn.exists(&key).await?;
        if exists {
            return Err(AppError::AlreadyExists);
        }
        // EXISTS-then-HSET is not atomic; a concurrent create on the same
        // email can win the race. Per-command atomicity is all we promise.
        let _: () = conn.hset_multiple(&key, &user.to_field_pairs()).await?;
        Ok(())
    }

    async fn get_user(&self, email: &str) -> Result<User, AppError> {
        let mut conn = self.conn();
        let key = user_key(email);
        let exists: bool = conn.exists(&key).await?;
        if !exists {
            return Err(AppError::NotFound);
        }
        let map: HashMap<String, String> = conn.hgetall(&key).await?;
        User::from_field_map(map)
    }

    async fn update_user(&self, email: &str, user: &User) -> Result<(), AppError> {
        let mut conn = self.conn();
        let key = user_key(email);
        let exists: bool = conn.exists(&key).await?;
        if !exists {
            return Err(AppError::NotFound);
        }
        let _: () = conn.hset_multiple(&key, &user.to_field_pairs()).await?;
        Ok(())
    }

    async fn delete_user(&self, email: &str) -> Result<(), AppError> {
        let mut conn = self.conn();
        let removed: u64 = conn.del(user_key(email)).await?;
        if removed == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let mut conn = self.conn();
        let keys: Vec<String> = conn.keys(USER_KEY_PATTERN).await?;
        let mut users = Vec::with_capacity(keys.len());
        for key in keys {
            let map: HashMap<String, String> = conn.hgetall(&key).await?;
            // Key deleted between KEYS and HGETALL; skip it.
            if map.is_empty() {
                continue;
            }
            users.push(User::from_field_map(map)?);
        }
        Ok(users)
    }
}
