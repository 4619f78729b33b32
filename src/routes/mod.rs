use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::from_fn,
    web, App, HttpRequest,
};

use crate::auth::middleware::require_token;
use crate::middleware::{recover, request_logger, track_in_flight};
use crate::state::AppState;
use crate::types::error::AppError;

pub mod product;
pub mod root;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(root::welcome).service(root::sleep);
    cfg.service(
        web::scope("/user")
            .service(user::create::create_user)
            .service(user::generate_token::generate_token)
    );
    cfg.service(
        web::scope("/product")
            .wrap(from_fn(require_token))
            .service(product::list::list_products)
            .service(product::create::create_product)
            .service(product::get::get_product)
            .service(product::update::update_product)
            .service(product::delete::delete_product)
    );
}

/// Malformed bodies, queries and paths all become a JSON 400.
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        AppError::BadRequest(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req: &HttpRequest| {
        AppError::BadRequest(err.to_string()).into()
    }));
}

/// Builds the full app: shared state, global middleware, all routes.
pub fn create_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state.db)
        .app_data(state.tokens)
        .app_data(state.in_flight)
        .configure(configure_extractors)
        .wrap(from_fn(track_in_flight))
        .wrap(from_fn(recover))
        .wrap(request_logger())
        .configure(configure_routes)
}
