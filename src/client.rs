//! 数据服务 HTTP 客户端
//!
//! 终端 UI 使用的阻塞式客户端：每次导航触发一次同步请求，
//! 渲染在请求返回之前不继续。

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{ErrorBody, MarketOverview, Startup, StartupSummary, Stock, StockSummary};

/// 客户端错误
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(StatusCode),
}

pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn market_overview(&self) -> Result<MarketOverview, ApiError> {
        self.get_json("/api/stocks/overview")
    }

    pub fn list_stocks(&self) -> Result<Vec<StockSummary>, ApiError> {
        self.get_json("/api/stocks")
    }

    pub fn list_watchlist(&self) -> Result<Vec<StockSummary>, ApiError> {
        self.get_json("/api/stocks/watchlist")
    }

    pub fn get_stock(&self, ticker: &str) -> Result<Stock, ApiError> {
        self.get_json(&format!("/api/stocks/{}", ticker))
    }

    pub fn list_startups(&self) -> Result<Vec<StartupSummary>, ApiError> {
        self.get_json("/api/startups")
    }

    pub fn get_startup(&self, startup_id: &str) -> Result<Startup, ApiError> {
        self.get_json(&format!("/api/startups/{}", startup_id))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).send()?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            // 404 响应体携带服务端的错误信息；解析失败时退回路径本身
            let message = response
                .json::<ErrorBody>()
                .map(|body| body.error)
                .unwrap_or_else(|_| path.to_string());
            return Err(ApiError::NotFound(message));
        }
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(response.json()?)
    }
}
