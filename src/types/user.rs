use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::types::error::AppError;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RUserCreate {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RUserCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".into()));
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::Validation("a valid email is required".into()));
        }
        if self.password.is_empty() {
            return Err(AppError::Validation("password is required".into()));
        }
        Ok(())
    }
}

pub struct DBUserCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserCreateRes {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RGenerateToken {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GenerateTokenRes {
    pub access_token: String,
}
