pub mod health;
pub mod startup;
pub mod stock;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(health::config)
            .configure(stock::config)
            .configure(startup::config),
    );
}
