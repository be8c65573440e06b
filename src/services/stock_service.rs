//! 股票查询服务
//!
//! 列表、详情、自选过滤与市场总览聚合

use chrono::Utc;

use crate::catalog::{Catalog, CatalogError};
use crate::models::{MarketOverview, SectorPerformance, Stock, StockSummary};

/// 实体 → 摘要的纯映射
fn to_summary(stock: &Stock) -> StockSummary {
    StockSummary {
        ticker: stock.ticker.clone(),
        name: stock.name.clone(),
        sector: stock.sector.clone(),
        price: stock.price,
        change_pct: stock.change_pct,
        watchlisted: stock.watchlisted,
    }
}

/// 全部股票摘要，按目录录入顺序
pub fn list_stocks(catalog: &Catalog) -> Vec<StockSummary> {
    catalog.stocks().iter().map(to_summary).collect()
}

/// 按代码查询完整记录
pub fn get_stock(catalog: &Catalog, ticker: &str) -> Result<Stock, CatalogError> {
    catalog
        .stock(ticker)
        .cloned()
        .ok_or_else(|| CatalogError::StockNotFound(ticker.to_string()))
}

/// 自选股票子集，保持目录录入顺序
pub fn list_watchlist(catalog: &Catalog) -> Vec<StockSummary> {
    catalog
        .stocks()
        .iter()
        .filter(|s| s.watchlisted)
        .map(to_summary)
        .collect()
}

/// 市场总览聚合
///
/// 行业列表按目录中首次出现顺序排列；空目录时平均涨跌幅为 0
pub fn market_overview(catalog: &Catalog) -> MarketOverview {
    let stocks = catalog.stocks();
    let total_stocks = stocks.len();
    let advancers = stocks.iter().filter(|s| s.change_pct > 0.0).count();
    let decliners = stocks.iter().filter(|s| s.change_pct < 0.0).count();
    let avg_change_pct = if total_stocks == 0 {
        0.0
    } else {
        stocks.iter().map(|s| s.change_pct).sum::<f64>() / total_stocks as f64
    };

    // 按首次出现顺序累加各行业涨跌幅
    let mut acc: Vec<(String, f64, usize)> = Vec::new();
    for stock in stocks {
        match acc.iter_mut().find(|(sector, _, _)| *sector == stock.sector) {
            Some((_, sum, count)) => {
                *sum += stock.change_pct;
                *count += 1;
            }
            None => acc.push((stock.sector.clone(), stock.change_pct, 1)),
        }
    }
    let sectors = acc
        .into_iter()
        .map(|(sector, sum, count)| SectorPerformance {
            sector,
            change_pct: sum / count as f64,
        })
        .collect();

    MarketOverview {
        as_of: Utc::now().to_rfc3339(),
        total_stocks,
        advancers,
        decliners,
        avg_change_pct,
        sectors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== 单元测试 ====================

    /// 测试详情查询返回与请求一致的代码
    #[test]
    fn test_get_stock_roundtrip() {
        println!("\n========== 测试股票详情查询 ==========");
        let catalog = Catalog::seed();

        for summary in list_stocks(&catalog) {
            let stock = get_stock(&catalog, &summary.ticker).unwrap();
            println!("  {} -> {}", summary.ticker, stock.name);
            assert_eq!(stock.ticker, summary.ticker);
        }
        println!("✅ 股票详情查询测试通过！");
    }

    /// 测试未知代码返回 NotFound
    #[test]
    fn test_get_stock_not_found() {
        let catalog = Catalog::seed();
        let err = get_stock(&catalog, "NOPE").unwrap_err();
        assert!(matches!(err, CatalogError::StockNotFound(_)));
        assert!(err.to_string().contains("NOPE"));
    }

    /// 测试自选列表是全量列表的子集，且不漏不多
    #[test]
    fn test_watchlist_subset() {
        println!("\n========== 测试自选列表过滤 ==========");
        let catalog = Catalog::seed();
        let all = list_stocks(&catalog);
        let watchlist = list_watchlist(&catalog);

        assert!(watchlist.iter().all(|s| s.watchlisted), "自选列表只含 watchlisted 股票");
        let expected = all.iter().filter(|s| s.watchlisted).count();
        assert_eq!(watchlist.len(), expected, "自选股票一个都不能少");
        for s in &watchlist {
            assert!(all.iter().any(|a| a.ticker == s.ticker));
        }
        println!("✅ 自选列表过滤测试通过！（{} / {}）", watchlist.len(), all.len());
    }

    /// 测试总览聚合的计数与均值
    #[test]
    fn test_overview_counts() {
        let catalog = Catalog::seed();
        let overview = market_overview(&catalog);
        let all = list_stocks(&catalog);

        assert_eq!(overview.total_stocks, all.len());
        // 平盘股票（change_pct == 0）既不计入上涨也不计入下跌
        assert!(overview.advancers + overview.decliners <= overview.total_stocks);
        assert!(all.iter().any(|s| s.change_pct == 0.0));
        assert!(overview.advancers + overview.decliners < overview.total_stocks);

        let expected_avg = all.iter().map(|s| s.change_pct).sum::<f64>() / all.len() as f64;
        assert!((overview.avg_change_pct - expected_avg).abs() < 1e-9);
    }

    /// 测试行业聚合按首次出现顺序且无重复
    #[test]
    fn test_overview_sector_order() {
        let catalog = Catalog::seed();
        let overview = market_overview(&catalog);
        let all = list_stocks(&catalog);

        assert_eq!(overview.sectors[0].sector, all[0].sector);
        for (i, a) in overview.sectors.iter().enumerate() {
            for b in &overview.sectors[i + 1..] {
                assert_ne!(a.sector, b.sector, "行业不能重复");
            }
        }

        // 单一股票的行业均值等于该股票涨跌幅
        let energy = overview.sectors.iter().find(|s| s.sector == "Energy").unwrap();
        let xom = all.iter().find(|s| s.ticker == "XOM").unwrap();
        assert!((energy.change_pct - xom.change_pct).abs() < 1e-9);
    }

    /// 空目录下的总览
    #[test]
    fn test_overview_empty_catalog() {
        let catalog = Catalog::new(Vec::new(), Vec::new());
        let overview = market_overview(&catalog);
        assert_eq!(overview.total_stocks, 0);
        assert_eq!(overview.avg_change_pct, 0.0);
        assert!(overview.sectors.is_empty());
    }
}
