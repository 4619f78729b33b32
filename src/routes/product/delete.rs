use actix_web::{delete, web};
use uuid::Uuid;

use crate::db::database::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::Claims;

#[delete("/{id}")]
pub async fn delete_product(
    db: web::Data<DatabaseService>,
    claims: Claims,
    id: web::Path<Uuid>,
) -> ApiResult<()> {
    let id = id.into_inner();
    db.delete_product(&id).await?;
    tracing::info!(product_id = %id, user_id = %claims.sub, "Product deleted");
    Ok(ApiResponse::NoContent)
}
