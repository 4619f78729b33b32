use actix_web::{post, web};

use crate::db::database::DatabaseService;
use crate::types::product::{Product, RProductWrite};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::Claims;

#[post("")]
pub async fn create_product(
    db: web::Data<DatabaseService>,
    claims: Claims,
    body: web::Json<RProductWrite>,
) -> ApiResult<Product> {
    let mut body = body.into_inner();
    body.validate()?;
    body.name = body.name.trim().to_string();

    let product = db.create_product(body).await?;
    tracing::info!(product_id = %product.id, user_id = %claims.sub, "Product created");

    Ok(ApiResponse::Created(product.into()))
}
