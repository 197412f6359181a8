use async_trait::async_trait;
use redis_user_api::db::user::UserStore;
use redis_user_api::types::error::AppError;
use redis_user_api::types::user::User;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub mod client;

/// In-memory stand-in for the Redis-backed store. Records are keyed by the
/// email the key was derived from, mirroring the `user:<email>` scheme.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<HashMap<String, User>>,
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, user: &User) -> Result<(), AppError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.email) {
            return Err(AppError::AlreadyExists);
        }
        users.insert(user.email.clone(), user.clone());
        Ok(())
    }

    async fn get_user(&self, email: &str) -> Result<User, AppError> {
        self.users
            .lock()
            .unwrap()
            .get(email)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn update_user(&self, email: &str, user: &User) -> Result<(), AppError> {
        let mut users = self.users.lock().unwrap();
        match users.get_mut(email) {
            Some(stored) => {
                // Same contract as the Redis impl: the key stays put, the
                // field map is overwritten with the body.
                *stored = user.clone();
                Ok(())
            }
            None => Err(AppError::NotFound),
        }
    }

    async fn delete_user(&self, email: &str) -> Result<(), AppError> {
        match self.users.lock().unwrap().remove(email) {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound),
        }
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.lock().unwrap().values().cloned().collect())
    }
}

pub struct TestContext {
    pub store: Arc<dyn UserStore>,
}

impl TestContext {
    pub fn new() -> TestContext {
        TestContext {
            store: Arc::new(MemoryStore::default()),
        }
    }
}

// Test data helpers
pub mod test_data {
    use redis_user_api::types::user::RUserUpsert;

    #[allow(dead_code)]
    pub fn sample_user() -> RUserUpsert {
        RUserUpsert {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn sample_user_with_email(email: &str) -> RUserUpsert {
        RUserUpsert {
            name: "Test User".to_string(),
            email: email.to_string(),
        }
    }
}
