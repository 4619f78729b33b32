use actix_web::{get, web};
use uuid::Uuid;

use crate::db::database::DatabaseService;
use crate::types::product::Product;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{id}")]
pub async fn get_product(
    db: web::Data<DatabaseService>,
    id: web::Path<Uuid>,
) -> ApiResult<Product> {
    let product = db.get_product_by_id(&id.into_inner()).await?;
    Ok(ApiResponse::Ok(product.into()))
}
