use actix_web::{put, web};
use uuid::Uuid;

use crate::db::database::DatabaseService;
use crate::types::product::{Product, RProductWrite};
use crate::types::response::{ApiResponse, ApiResult};

#[put("/{id}")]
pub async fn update_product(
    db: web::Data<DatabaseService>,
    id: web::Path<Uuid>,
    body: web::Json<RProductWrite>,
) -> ApiResult<Product> {
    let mut body = body.into_inner();
    body.validate()?;
    body.name = body.name.trim().to_string();

    let product = db.update_product(&id.into_inner(), body).await?;
    Ok(ApiResponse::Ok(product.into()))
}
