//! 股票数据模型
//!
//! 定义股票相关的数据结构

use serde::{Deserialize, Serialize};

/// 单日价格点
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PricePoint {
    /// 日期（YYYY-MM-DD）
    pub date: String,
    /// 收盘价
    pub price: f64,
}

/// 股票价格历史
///
/// 三个时间窗口，均按时间升序排列
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct StockSeries {
    /// 近一个月
    pub one_month: Vec<PricePoint>,
    /// 近六个月
    pub six_month: Vec<PricePoint>,
    /// 近一年
    pub one_year: Vec<PricePoint>,
}

/// 股票完整记录
///
/// 目录中的规范形态，详情接口按此返回
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Stock {
    /// 股票代码（目录内唯一）
    pub ticker: String,
    /// 公司名称
    pub name: String,
    /// 所属行业
    pub sector: String,
    /// 当日快照价格
    pub price: f64,
    /// 当日涨跌幅（百分比）
    pub change_pct: f64,
    /// 是否在自选列表中
    pub watchlisted: bool,
    /// 价格历史
    pub series: StockSeries,
}

/// 股票摘要（列表视图）
///
/// 完整记录去掉价格历史后的线上形态
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StockSummary {
    /// 股票代码
    pub ticker: String,
    /// 公司名称
    pub name: String,
    /// 所属行业
    pub sector: String,
    /// 当日快照价格
    pub price: f64,
    /// 当日涨跌幅（百分比）
    pub change_pct: f64,
    /// 是否在自选列表中
    pub watchlisted: bool,
}

/// 单个行业的当日表现
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SectorPerformance {
    /// 行业名称
    pub sector: String,
    /// 行业内平均涨跌幅（百分比）
    pub change_pct: f64,
}

/// 市场总览
///
/// 对全部股票的聚合摘要
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MarketOverview {
    /// 生成时间（ISO 8601 格式）
    pub as_of: String,
    /// 股票总数
    pub total_stocks: usize,
    /// 上涨家数（change_pct > 0）
    pub advancers: usize,
    /// 下跌家数（change_pct < 0）
    pub decliners: usize,
    /// 平均涨跌幅（百分比）
    pub avg_change_pct: f64,
    /// 各行业表现，按目录中首次出现顺序排列
    pub sectors: Vec<SectorPerformance>,
}
