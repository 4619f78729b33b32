use product_api::{
    db::database::DatabaseService,
    state::AppState,
    types::{error::AppError, user::DBUserCreate},
    utils::token::hash_password,
};
use entity::user::Model as UserModel;
use uuid::Uuid;

pub struct TestClient {
    pub state: AppState,
}

impl TestClient {
    pub fn new(state: AppState) -> Self {
        TestClient { state }
    }

    pub fn db(&self) -> &DatabaseService {
        &self.state.db
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        product_api::routes::create_app(self.state.clone())
    }

    /// Inserts a user straight into the database and signs a token for them.
    pub async fn create_test_user(&self, email: Option<String>) -> Result<(UserModel, String), AppError> {
        let random_id = Uuid::new_v4();
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", random_id));

        let user = self.db().create_user(DBUserCreate {
            name: "Test User".to_string(),
            email,
            password_hash: hash_password("password").expect("Failed to hash password"),
        }).await?;

        let access_token = self.state.tokens.issue(user.id)?;

        Ok((user, access_token))
    }
}
