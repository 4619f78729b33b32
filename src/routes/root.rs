use std::time::Duration;

use actix_web::{get, HttpResponse};

pub const WELCOME: &str = "Welcome to the Product API";
pub const SLEEP_DELAY: Duration = Duration::from_secs(5);

#[get("/")]
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(WELCOME)
}

/// Liveness probe that holds its own request for [`SLEEP_DELAY`] without
/// blocking the worker.
#[get("/sleep")]
pub async fn sleep() -> HttpResponse {
    tokio::time::sleep(SLEEP_DELAY).await;
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(format!("I woke up after {} seconds", SLEEP_DELAY.as_secs()))
}
