use actix_web::web;

use crate::auth::jwt::TokenAuth;
use crate::config::EnvConfig;
use crate::db::database::DatabaseService;
use crate::middleware::InFlight;

/// Everything the handlers need, injected as `web::Data` when the app is built.
#[derive(Clone)]
pub struct AppState {
    pub db: web::Data<DatabaseService>,
    pub tokens: web::Data<TokenAuth>,
    pub in_flight: web::Data<InFlight>,
}

impl AppState {
    pub fn new(db: DatabaseService, tokens: TokenAuth) -> Self {
        Self {
            db: web::Data::new(db),
            tokens: web::Data::new(tokens),
            in_flight: web::Data::new(InFlight::default()),
        }
    }

    pub async fn from_config(config: &EnvConfig) -> Result<Self, sea_orm::DbErr> {
        let db = DatabaseService::connect(&config.db).await?;
        Ok(Self::new(db, TokenAuth::from_config(&config.jwt)))
    }
}
