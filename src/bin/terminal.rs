//! 市场情报终端 UI
//!
//! 键位：1 股票页，2 初创页，↑/↓ 移动光标，w 自选过滤，r 刷新，q 退出

use std::env;

use anyhow::Result;

use market_intel::client::ApiClient;
use market_intel::config::AppConfig;
use market_intel::tui::TuiShell;

fn main() -> Result<()> {
    let config = AppConfig::load();

    // API_BASE 环境变量优先于配置文件
    let base_url = env::var("API_BASE").unwrap_or(config.api.base_url);
    let client = ApiClient::new(base_url, config.api.timeout_secs)?;

    TuiShell::new(client)?.run()
}
