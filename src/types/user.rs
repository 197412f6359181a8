use crate::types::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The stored record: a flat name/email pair keyed by email.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Request body for POST and PUT.
#[derive(Serialize, Deserialize)]
pub struct RUserUpsert {
    pub name: String,
    pub email: String,
}

impl TryFrom<RUserUpsert> for User {
    type Error = AppError;

    fn try_from(body: RUserUpsert) -> Result<Self, AppError> {
        validate_email(&body.email)?;
        Ok(User {
            name: body.name,
            email: body.email,
        })
    }
}

impl User {
    /// Decodes the field map returned by the store.
    ///
    /// Stored records always carry both fields; a map with either one
    /// missing is corrupt.
    pub fn from_field_map(mut map: HashMap<String, String>) -> Result<Self, AppError> {
        let name = map
            .remove("name")
            .ok_or_else(|| AppError::Internal("stored user is missing the name field".into()))?;
        let email = map
            .remove("email")
            .ok_or_else(|| AppError::Internal("stored user is missing the email field".into()))?;
        Ok(User { name, email })
    }

    pub fn to_field_pairs(&self) -> [(&'static str, &str); 2] {
        [("name", &self.name), ("email", &self.email)]
    }
}

/// Response body for GET /users/.
#[derive(Serialize, Deserialize)]
pub struct UserListRes {
    pub users: Vec<User>,
}

/// Shape check only: one `@`, non-empty local part, dotted domain with
/// non-empty labels. Anything deeper is out of scope.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    let invalid = || AppError::Validation(format!("invalid email address: {}", email));

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return Err(invalid());
    }
    Ok(())
}
