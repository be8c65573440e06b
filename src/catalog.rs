//! 静态数据目录
//!
//! 进程启动时构造一次，之后只读。服务层的所有查询都在该快照上进行，
//! 不存在运行期写入，因此跨 worker 共享时无需加锁。

use thiserror::Error;

use crate::models::{MomentumPoint, PricePoint, Startup, Stock, StockSeries};
use crate::services::startup_service::signal_score;

/// 目录查询错误
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("stock not found: {0}")]
    StockNotFound(String),

    #[error("startup not found: {0}")]
    StartupNotFound(String),
}

/// 股票与初创公司的内存目录
///
/// 字段私有：构造完成后只能通过只读访问器查询
pub struct Catalog {
    stocks: Vec<Stock>,
    startups: Vec<Startup>,
}

impl Catalog {
    pub fn new(stocks: Vec<Stock>, startups: Vec<Startup>) -> Self {
        Self { stocks, startups }
    }

    /// 全部股票，按录入顺序
    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    /// 全部初创公司，按录入顺序
    pub fn startups(&self) -> &[Startup] {
        &self.startups
    }

    /// 按代码查找股票
    pub fn stock(&self, ticker: &str) -> Option<&Stock> {
        self.stocks.iter().find(|s| s.ticker == ticker)
    }

    /// 按 id 查找初创公司
    pub fn startup(&self, id: &str) -> Option<&Startup> {
        self.startups.iter().find(|s| s.id == id)
    }

    /// 构造内置模拟数据集
    pub fn seed() -> Self {
        let stocks = vec![
            mock_stock("AAPL", "Apple Inc.", "Technology", 189.44, 1.12, true),
            mock_stock("MSFT", "Microsoft Corp.", "Technology", 415.30, 0.58, true),
            mock_stock("GOOGL", "Alphabet Inc.", "Technology", 162.08, -0.43, false),
            mock_stock("AMZN", "Amazon.com Inc.", "Consumer Discretionary", 178.22, 2.04, false),
            mock_stock("TSLA", "Tesla Inc.", "Consumer Discretionary", 244.95, -3.18, true),
            mock_stock("JPM", "JPMorgan Chase & Co.", "Financials", 198.47, 0.21, false),
            mock_stock("XOM", "Exxon Mobil Corp.", "Energy", 113.69, -0.75, false),
            mock_stock("JNJ", "Johnson & Johnson", "Health Care", 158.12, 0.00, false),
        ];

        let startups = vec![
            mock_startup(
                "su-001",
                "Airship ML",
                "Artificial Intelligence",
                "Series A",
                &[(4, 31), (6, 38), (9, 46), (11, 57), (15, 72), (18, 85)],
            ),
            mock_startup(
                "su-002",
                "Voltgrid",
                "Energy",
                "Seed",
                &[(2, 12), (2, 15), (3, 14), (3, 19), (4, 22), (4, 26)],
            ),
            mock_startup(
                "su-003",
                "Kelp Robotics",
                "Robotics",
                "Series B",
                &[(12, 40), (13, 44), (12, 43), (14, 48), (16, 51), (15, 55)],
            ),
            mock_startup(
                "su-004",
                "Lumen Bio",
                "Biotech",
                "Seed",
                &[(1, 8), (2, 9), (2, 11), (3, 10), (3, 13), (5, 18)],
            ),
            mock_startup(
                "su-005",
                "Ferrostack",
                "Developer Tools",
                "Series A",
                &[(6, 25), (7, 29), (9, 33), (8, 36), (10, 41), (12, 47)],
            ),
            mock_startup(
                "su-006",
                "Quillpay",
                "Fintech",
                "Seed",
                &[(3, 20), (3, 18), (4, 21), (4, 24), (5, 23), (5, 28)],
            ),
        ];

        Self::new(stocks, startups)
    }
}

/// 动量月份标签，与 mock_startup 的信号点一一对应
const MOMENTUM_MONTHS: [&str; 6] = [
    "2025-01", "2025-02", "2025-03", "2025-04", "2025-05", "2025-06",
];

fn mock_stock(
    ticker: &str,
    name: &str,
    sector: &str,
    price: f64,
    change_pct: f64,
    watchlisted: bool,
) -> Stock {
    // 以当日价格为终点回推历史，漂移方向跟随当日涨跌
    let drift = price * (0.002 + 0.004 * change_pct.signum());
    Stock {
        ticker: ticker.to_string(),
        name: name.to_string(),
        sector: sector.to_string(),
        price,
        change_pct,
        watchlisted,
        series: mock_series(price, drift),
    }
}

fn mock_series(base: f64, drift: f64) -> StockSeries {
    StockSeries {
        one_month: series_window(
            base,
            drift * 0.25,
            &["2025-06-09", "2025-06-16", "2025-06-23", "2025-06-30"],
        ),
        six_month: series_window(
            base,
            drift,
            &[
                "2025-01-31", "2025-02-28", "2025-03-31", "2025-04-30", "2025-05-30",
                "2025-06-30",
            ],
        ),
        one_year: series_window(
            base,
            drift * 2.0,
            &[
                "2024-07-31", "2024-08-30", "2024-09-30", "2024-10-31", "2024-11-29",
                "2024-12-31", "2025-01-31", "2025-02-28", "2025-03-31", "2025-04-30",
                "2025-05-30", "2025-06-30",
            ],
        ),
    }
}

/// 生成一个时间窗口：从 base 回推 step 步长，叠加固定节奏的小幅波动
///
/// 末点不加波动，保证窗口终点与当日快照价格一致
fn series_window(base: f64, step: f64, dates: &[&str]) -> Vec<PricePoint> {
    let n = dates.len();
    dates
        .iter()
        .enumerate()
        .map(|(i, date)| {
            let ripple = if i + 1 == n {
                0.0
            } else {
                ((i % 3) as f64 - 1.0) * step * 0.3
            };
            PricePoint {
                date: (*date).to_string(),
                price: base - step * (n - 1 - i) as f64 + ripple,
            }
        })
        .collect()
}

fn mock_startup(
    id: &str,
    name: &str,
    sector: &str,
    stage: &str,
    signals: &[(u32, u32)],
) -> Startup {
    let momentum: Vec<MomentumPoint> = signals
        .iter()
        .zip(MOMENTUM_MONTHS.iter())
        .map(|((hiring, buzz), month)| MomentumPoint {
            month: (*month).to_string(),
            hiring: *hiring,
            buzz: *buzz,
        })
        .collect();
    Startup {
        id: id.to_string(),
        name: name.to_string(),
        sector: sector.to_string(),
        stage: stage.to_string(),
        signal_score: signal_score(&momentum),
        momentum,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// 测试内置数据集的唯一性约束
    #[test]
    fn test_seed_keys_unique() {
        let catalog = Catalog::seed();

        let tickers: HashSet<&str> = catalog.stocks().iter().map(|s| s.ticker.as_str()).collect();
        assert_eq!(tickers.len(), catalog.stocks().len(), "股票代码必须唯一");

        let ids: HashSet<&str> = catalog.startups().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.startups().len(), "初创公司 id 必须唯一");
    }

    /// 测试按键查找
    #[test]
    fn test_keyed_lookup() {
        let catalog = Catalog::seed();

        let stock = catalog.stock("AAPL").unwrap();
        assert_eq!(stock.ticker, "AAPL");
        assert!(catalog.stock("ZZZZ").is_none());

        let startup = catalog.startup("su-001").unwrap();
        assert_eq!(startup.name, "Airship ML");
        assert!(catalog.startup("su-999").is_none());
    }

    /// 测试每条记录都带有完整的历史序列
    #[test]
    fn test_seed_series_populated() {
        let catalog = Catalog::seed();

        for stock in catalog.stocks() {
            assert_eq!(stock.series.one_month.len(), 4, "{} 缺少月线", stock.ticker);
            assert_eq!(stock.series.six_month.len(), 6, "{} 缺少半年线", stock.ticker);
            assert_eq!(stock.series.one_year.len(), 12, "{} 缺少年线", stock.ticker);
            // 半年线终点应回到当日快照价格
            let last = stock.series.six_month.last().unwrap();
            assert!((last.price - stock.price).abs() < 1e-9);
        }

        for startup in catalog.startups() {
            assert_eq!(startup.momentum.len(), 6, "{} 缺少动量序列", startup.id);
            assert!(startup.signal_score > 0.0);
        }
    }

    /// 自选列表不能为空，否则自选视图无意义
    #[test]
    fn test_seed_has_watchlist() {
        let catalog = Catalog::seed();
        assert!(catalog.stocks().iter().any(|s| s.watchlisted));
        assert!(catalog.stocks().iter().any(|s| !s.watchlisted));
    }
}
