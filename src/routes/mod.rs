use actix_web::web;

pub mod health;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health::welcome);
    cfg.service(
        web::scope("/users")
            .service(user::list::list)
            .service(user::create::create)
            .service(user::get::get)
            .service(user::update::update)
            .service(user::delete::delete),
    );
}
