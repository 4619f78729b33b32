#![allow(dead_code)]

use actix_web::{body::MessageBody, dev::{Service, ServiceResponse}, http::StatusCode, test};
use product_api::auth::jwt::TokenAuth;
use product_api::config::DatabaseConfig;
use product_api::db::database::DatabaseService;
use product_api::state::AppState;

pub mod client;

pub const TEST_SECRET: &[u8] = b"test-secret";
pub const TEST_LIFETIME_SECS: i64 = 300;

pub struct TestContext {
    pub state: AppState,
}

impl TestContext {
    /// Fresh in-memory database per test.
    pub async fn new() -> TestContext {
        let db = DatabaseService::connect(&DatabaseConfig::sqlite_memory())
            .await
            .expect("Failed to initialize DatabaseService");

        TestContext {
            state: AppState::new(db, TokenAuth::new(TEST_SECRET, TEST_LIFETIME_SECS)),
        }
    }

    pub fn db(&self) -> &DatabaseService {
        &self.state.db
    }

    pub fn tokens(&self) -> &TokenAuth {
        &self.state.tokens
    }
}

/// Calls the service and returns the status plus the JSON body (`Null` when empty).
pub async fn call_json<S, R, B>(app: &S, req: R) -> (StatusCode, serde_json::Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    // Errors returned by middleware are rendered the way the server renders them.
    let (status, body) = match app.call(req).await {
        Ok(resp) => (resp.status(), test::read_body(resp).await),
        Err(err) => {
            let resp = err.error_response();
            let status = resp.status();
            let body = actix_web::body::to_bytes(resp.into_body())
                .await
                .unwrap_or_else(|_| panic!("failed to read error response body"));
            (status, body)
        }
    };
    if body.is_empty() {
        return (status, serde_json::Value::Null);
    }
    let json = serde_json::from_slice(&body)
        .unwrap_or_else(|e| panic!("response body is not JSON ({e}): {:?}", body));
    (status, json)
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

// Test data helpers
pub mod test_data {
    use product_api::types::product::RProductWrite;
    use product_api::types::user::RUserCreate;

    pub fn sample_user() -> RUserCreate {
        RUserCreate {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "secret".to_string(),
        }
    }

    pub fn sample_user_with_email(email: &str) -> RUserCreate {
        RUserCreate {
            email: email.to_string(),
            ..sample_user()
        }
    }

    pub fn sample_product() -> RProductWrite {
        RProductWrite {
            name: "Notebook".to_string(),
            price: 12.5,
        }
    }
}
