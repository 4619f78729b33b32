use crate::db::database::DatabaseService;
use crate::{
    types::{error::AppError, user::DBUserCreate},
    utils::token,
};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl DatabaseService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Signup: create user. The unique index on email backs up the pre-check
    /// when two signups race.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        let now = Utc::now();

        let model = UserModel {
            id: token::new_id(),
            name: payload.name,
            email: payload.email,
            password_hash: payload.password_hash,
            created_at: now,
            updated_at: now,
        };

        User::insert(UserActive {
            id: Set(model.id),
            name: Set(model.name.clone()),
            email: Set(model.email.clone()),
            password_hash: Set(model.password_hash.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.db)
        .await?;

        Ok(model)
    }
}
