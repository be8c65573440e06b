//! 初创公司数据模型

use serde::{Deserialize, Serialize};

/// 单月动量信号点
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MomentumPoint {
    /// 月份（YYYY-MM）
    pub month: String,
    /// 当月新增招聘岗位数
    pub hiring: u32,
    /// 当月舆论热度计数
    pub buzz: u32,
}

/// 初创公司完整记录
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Startup {
    /// 唯一标识
    pub id: String,
    /// 公司名称
    pub name: String,
    /// 所属赛道
    pub sector: String,
    /// 融资阶段
    pub stage: String,
    /// 信号综合分（由动量序列推导）
    pub signal_score: f64,
    /// 月度动量序列，按时间升序排列
    pub momentum: Vec<MomentumPoint>,
}

/// 初创公司摘要（列表视图）
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StartupSummary {
    /// 唯一标识
    pub id: String,
    /// 公司名称
    pub name: String,
    /// 所属赛道
    pub sector: String,
    /// 融资阶段
    pub stage: String,
    /// 信号综合分
    pub signal_score: f64,
}
