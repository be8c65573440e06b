use actix_web::{web, HttpResponse, Result};

use crate::catalog::Catalog;
use crate::models::ErrorBody;
use crate::services::startup_service;

pub async fn list_startups(catalog: web::Data<Catalog>) -> Result<HttpResponse> {
    let startups = startup_service::list_startups(catalog.get_ref());
    Ok(HttpResponse::Ok().json(startups))
}

pub async fn get_startup(
    catalog: web::Data<Catalog>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let startup_id = path.into_inner();

    match startup_service::get_startup(catalog.get_ref(), &startup_id) {
        Ok(startup) => Ok(HttpResponse::Ok().json(startup)),
        Err(e) => Ok(HttpResponse::NotFound().json(ErrorBody::new(e.to_string()))),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/startups")
            .route("", web::get().to(list_startups))
            .route("/{startup_id}", web::get().to(get_startup)),
    );
}
