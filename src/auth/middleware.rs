use std::future::{ready, Ready};

use actix_web::{
    body::MessageBody,
    dev::{Payload, ServiceRequest, ServiceResponse},
    middleware::Next,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::auth::jwt::TokenAuth;
use crate::types::error::AppError;
use crate::types::token::Claims;

/// Rejects the request with 401 unless it carries a valid bearer token.
/// The verified claims are stashed in the request extensions.
pub async fn require_token(
    mut req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let tokens = req
        .app_data::<web::Data<TokenAuth>>()
        .cloned()
        .ok_or_else(|| AppError::Internal("token verifier not configured".into()))?;

    let credentials = match req.extract::<BearerAuth>().await {
        Ok(credentials) => credentials,
        Err(_) => {
            tracing::debug!(path = %req.path(), "Missing or malformed Authorization header");
            return Err(AppError::Unauthorized.into());
        }
    };

    let claims = tokens.verify(credentials.token())?;
    req.extensions_mut().insert(claims);

    next.call(req).await
}

impl FromRequest for Claims {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(req.extensions().get::<Claims>().cloned().ok_or(AppError::Unauthorized))
    }
}
