use actix_web::{web, HttpResponse, Result};

use crate::catalog::Catalog;
use crate::models::ErrorBody;
use crate::services::stock_service;

pub async fn market_overview(catalog: web::Data<Catalog>) -> Result<HttpResponse> {
    let overview = stock_service::market_overview(catalog.get_ref());
    Ok(HttpResponse::Ok().json(overview))
}

pub async fn list_stocks(catalog: web::Data<Catalog>) -> Result<HttpResponse> {
    let stocks = stock_service::list_stocks(catalog.get_ref());
    Ok(HttpResponse::Ok().json(stocks))
}

pub async fn list_watchlist(catalog: web::Data<Catalog>) -> Result<HttpResponse> {
    let watchlist = stock_service::list_watchlist(catalog.get_ref());
    Ok(HttpResponse::Ok().json(watchlist))
}

pub async fn get_stock(
    catalog: web::Data<Catalog>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let ticker = path.into_inner();

    match stock_service::get_stock(catalog.get_ref(), &ticker) {
        Ok(stock) => Ok(HttpResponse::Ok().json(stock)),
        Err(e) => Ok(HttpResponse::NotFound().json(ErrorBody::new(e.to_string()))),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    // 字面路由必须注册在 {ticker} 捕获之前
    cfg.service(
        web::scope("/stocks")
            .route("/overview", web::get().to(market_overview))
            .route("/watchlist", web::get().to(list_watchlist))
            .route("", web::get().to(list_stocks))
            .route("/{ticker}", web::get().to(get_stock)),
    );
}
