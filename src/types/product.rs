use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::types::error::AppError;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::product::Model> for Product {
    fn from(m: entity::product::Model) -> Self {
        Product {
            id: m.id,
            name: m.name,
            price: m.price,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Body for both create and full update.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RProductWrite {
    pub name: String,
    pub price: f64,
}

impl RProductWrite {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".into()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(AppError::Validation("price must be a non-negative number".into()));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RProductPage {
    pub page: Option<u64>,
    #[serde(alias = "page_size")]
    pub limit: Option<u64>,
    pub sort: Option<SortOrder>,
}

/// Normalised pagination: `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
    pub sort: SortOrder,
}

impl RProductPage {
    pub fn normalize(&self) -> Result<PageRequest, AppError> {
        let page = self.page.unwrap_or(1);
        if page == 0 {
            return Err(AppError::Validation("page starts at 1".into()));
        }
        let limit = self.limit.unwrap_or(DEFAULT_PAGE_SIZE);
        if limit == 0 {
            return Err(AppError::Validation("limit must be at least 1".into()));
        }
        Ok(PageRequest {
            page,
            limit: limit.min(MAX_PAGE_SIZE),
            sort: self.sort.unwrap_or_default(),
        })
    }
}

impl PageRequest {
    /// Rows to skip, or `None` when the page lies beyond anything the
    /// database can address.
    pub fn offset(&self) -> Option<u64> {
        (self.page - 1)
            .checked_mul(self.limit)
            .filter(|offset| *offset <= i64::MAX as u64)
    }
}
