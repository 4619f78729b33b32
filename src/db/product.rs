use crate::db::database::DatabaseService;
use crate::types::error::AppError;
use crate::types::product::{PageRequest, RProductWrite, SortOrder};
use crate::utils::token;
use chrono::Utc;
use entity::product::{ActiveModel as ProductActive, Column, Entity as ProductData, Model as ProductModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, QuerySelect, Set};
use uuid::Uuid;

impl DatabaseService {
    pub async fn get_product_by_id(&self, id: &Uuid) -> Result<ProductModel, AppError> {
        Ok(ProductData::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Product does not exist".into()))?)
    }

    /// Pages past the end come back empty.
    pub async fn list_products(&self, page: PageRequest) -> Result<Vec<ProductModel>, AppError> {
        let Some(offset) = page.offset() else {
            return Ok(vec![]);
        };

        let query = match page.sort {
            SortOrder::Asc => ProductData::find()
                .order_by_asc(Column::CreatedAt)
                .order_by_asc(Column::Id),
            SortOrder::Desc => ProductData::find()
                .order_by_desc(Column::CreatedAt)
                .order_by_desc(Column::Id),
        };

        Ok(query
            .offset(offset)
            .limit(page.limit)
            .all(&self.db)
            .await?)
    }

    pub async fn create_product(&self, product: RProductWrite) -> Result<ProductModel, AppError> {
        let now = Utc::now();

        let new_product = ProductActive {
            id: Set(token::new_id()),
            name: Set(product.name),
            price: Set(product.price),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(new_product.insert(&self.db).await?)
    }

    pub async fn update_product(
        &self,
        id: &Uuid,
        product: RProductWrite,
    ) -> Result<ProductModel, AppError> {
        let current = self.get_product_by_id(id).await?;

        let mut model: ProductActive = current.into();
        model.name = Set(product.name);
        model.price = Set(product.price);
        model.updated_at = Set(Utc::now());

        Ok(model.update(&self.db).await?)
    }

    pub async fn delete_product(&self, id: &Uuid) -> Result<(), AppError> {
        let result = ProductData::delete_by_id(*id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
