//! 市场情报数据服务
//!
//! 提供股票与初创公司静态数据的 RESTful API

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use market_intel::catalog::Catalog;
use market_intel::config::AppConfig;
use market_intel::handlers;

/// 应用程序入口
///
/// 启动 HTTP 服务器，目录快照在启动时构造一次并注入所有 worker
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 初始化日志系统，默认日志级别为 info
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    log::info!("启动市场情报数据服务");

    let config = AppConfig::load();
    let catalog = web::Data::new(Catalog::seed());
    log::info!(
        "目录已加载: {} 支股票, {} 家初创公司",
        catalog.stocks().len(),
        catalog.startups().len()
    );

    let bind_addr = config.bind_addr();
    log::info!("监听地址: {}", bind_addr);

    // 创建并启动 HTTP 服务器
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default()) // 添加请求日志中间件
            .app_data(catalog.clone())
            .configure(handlers::config) // 配置路由
    })
    .bind(bind_addr)?;

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.run().await
}
