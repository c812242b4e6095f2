use actix_web::{web, App};
use book_reviews::store::MemoryStore;
use book_reviews::utils::token::TokenService;
use std::sync::Arc;

use super::TestContext;

pub struct TestClient {
    pub store: Arc<MemoryStore>,
    pub tokens: Arc<TokenService>,
}

impl TestClient {
    pub fn new(ctx: &TestContext) -> Self {
        TestClient {
            store: Arc::clone(&ctx.store),
            tokens: Arc::clone(&ctx.tokens),
        }
    }

    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.store)))
            .app_data(web::Data::new(Arc::clone(&self.tokens)))
            .configure(book_reviews::routes::configure_routes)
    }

    /// Registers straight into the store and returns a fresh token.
    #[allow(dead_code)]
    pub fn create_test_user(&self, username: &str) -> String {
        self.store
            .register_user(username, "password")
            .expect("Failed to register test user");
        self.tokens.issue(username).expect("Failed to issue token")
    }
}
