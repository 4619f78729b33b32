use crate::db::database::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserCreateRes};
use crate::utils::token::hash_password;
use actix_web::{post, web};

#[post("")]
pub async fn create_user(
    db: web::Data<DatabaseService>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserCreateRes> {
    let body = body.into_inner();
    body.validate()?;

    let password_hash = hash_password(&body.password)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

    let user = db
        .create_user(DBUserCreate {
            name: body.name.trim().to_string(),
            email: body.email.trim().to_string(),
            password_hash,
        })
        .await?;

    tracing::info!(user_id = %user.id, "User created");

    Ok(ApiResponse::Created(UserCreateRes {
        id: user.id,
        name: user.name,
        email: user.email,
    }))
}
