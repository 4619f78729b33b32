mod common;

use actix_web::{
    body::to_bytes,
    dev::Service,
    http::StatusCode,
    middleware::from_fn,
    test, web, App, HttpResponse,
};
use common::{client::TestClient, TestContext};
use product_api::middleware::{recover, track_in_flight, InFlight};
use product_api::routes::root::WELCOME;

#[tokio::test]
async fn test_welcome() {
    println!("\n\n[+] Running test: test_welcome");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.state.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(body, WELCOME.as_bytes());
    println!("[/] Test passed: Welcome text served.");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.state.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_panicking_handler_becomes_500() {
    println!("\n\n[+] Running test: test_panicking_handler_becomes_500");
    let in_flight = web::Data::new(InFlight::default());
    let app = test::init_service(
        App::new()
            .app_data(in_flight.clone())
            .wrap(from_fn(track_in_flight))
            .wrap(from_fn(recover))
            .route("/boom", web::get().to(|| async {
                if true {
                    panic!("handler exploded");
                }
                HttpResponse::Ok().finish()
            }))
            .route("/fine", web::get().to(|| async { HttpResponse::Ok().body("fine") })),
    )
    .await;

    let req = test::TestRequest::get().uri("/boom").to_request();
    let err = app
        .call(req)
        .await
        .err()
        .expect("panic should surface as an error");
    assert_eq!(err.as_response_error().status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = to_bytes(err.error_response().into_body()).await.unwrap();
    println!("[<] Panic response body: {:?}", body);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "INTERNAL_ERROR");
    assert_eq!(in_flight.active(), 0);

    println!("[>] The same app keeps serving afterwards.");
    let req = test::TestRequest::get().uri("/fine").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    println!("[/] Test passed: Panic recovered.");
}
