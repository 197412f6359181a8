use actix_web::{web, App};
use redis_user_api::db::user::UserStore;
use redis_user_api::routes::configure_routes;
use std::sync::Arc;

pub struct TestClient {
    pub store: Arc<dyn UserStore>,
}

impl TestClient {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        TestClient { store }
    }

    #[allow(dead_code)]
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
            .configure(configure_routes)
    }
}
