use crate::auth::{issue_token, jwt::TokenAuth};
use crate::db::database::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{GenerateTokenRes, RGenerateToken};
use actix_web::{post, web};

#[post("/generate_token")]
pub async fn generate_token(
    db: web::Data<DatabaseService>,
    tokens: web::Data<TokenAuth>,
    body: web::Json<RGenerateToken>,
) -> ApiResult<GenerateTokenRes> {
    let access_token = issue_token(&db, &tokens, &body.email, &body.password).await?;

    Ok(ApiResponse::Ok(GenerateTokenRes { access_token }))
}
