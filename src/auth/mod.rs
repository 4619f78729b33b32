//! Token issuance and verification.

pub mod jwt;
pub mod middleware;

use crate::db::database::DatabaseService;
use crate::types::error::AppError;
use crate::utils::token::verify_password;

use self::jwt::TokenAuth;

/// Checks the credentials and signs a token for the user.
///
/// Unknown email and wrong password both come back as
/// [`AppError::Unauthorized`].
pub async fn issue_token(
    db: &DatabaseService,
    tokens: &TokenAuth,
    email: &str,
    password: &str,
) -> Result<String, AppError> {
    let user = match db.get_user_by_email(email.trim()).await {
        Ok(user) => user,
        Err(AppError::NotFound) => {
            tracing::info!("Token request for unknown email");
            return Err(AppError::Unauthorized);
        }
        Err(e) => return Err(e),
    };

    let matches = verify_password(password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("stored password hash unreadable: {e}")))?;
    if !matches {
        tracing::info!(user_id = %user.id, "Token request with wrong password");
        return Err(AppError::Unauthorized);
    }

    tokens.issue(user.id)
}
