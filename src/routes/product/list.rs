use actix_web::{get, web};

use crate::db::database::DatabaseService;
use crate::types::product::{Product, RProductPage};
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
pub async fn list_products(
    db: web::Data<DatabaseService>,
    query: web::Query<RProductPage>,
) -> ApiResult<Vec<Product>> {
    let page = query.normalize()?;
    let products = db.list_products(page).await?;
    Ok(ApiResponse::Ok(products.into_iter().map(Product::from).collect()))
}
