//! 初创公司查询服务

use crate::catalog::{Catalog, CatalogError};
use crate::models::{MomentumPoint, Startup, StartupSummary};

/// 实体 → 摘要的纯映射
fn to_summary(startup: &Startup) -> StartupSummary {
    StartupSummary {
        id: startup.id.clone(),
        name: startup.name.clone(),
        sector: startup.sector.clone(),
        stage: startup.stage.clone(),
        signal_score: startup.signal_score,
    }
}

/// 全部初创公司摘要，按目录录入顺序
pub fn list_startups(catalog: &Catalog) -> Vec<StartupSummary> {
    catalog.startups().iter().map(to_summary).collect()
}

/// 按 id 查询完整记录
pub fn get_startup(catalog: &Catalog, id: &str) -> Result<Startup, CatalogError> {
    catalog
        .startup(id)
        .cloned()
        .ok_or_else(|| CatalogError::StartupNotFound(id.to_string()))
}

/// 动量序列 → 信号综合分
///
/// 招聘权重高于舆论热度，月份越近权重越大，结果保留一位小数。
/// 空序列得 0 分。
pub fn signal_score(momentum: &[MomentumPoint]) -> f64 {
    if momentum.is_empty() {
        return 0.0;
    }
    let mut weighted = 0.0;
    let mut weight_sum = 0.0;
    for (i, point) in momentum.iter().enumerate() {
        let weight = (i + 1) as f64;
        weighted += weight * (point.hiring as f64 * 2.0 + point.buzz as f64 * 0.5);
        weight_sum += weight;
    }
    (weighted / weight_sum * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month: &str, hiring: u32, buzz: u32) -> MomentumPoint {
        MomentumPoint {
            month: month.to_string(),
            hiring,
            buzz,
        }
    }

    /// 测试详情查询返回与请求一致的 id
    #[test]
    fn test_get_startup_roundtrip() {
        let catalog = Catalog::seed();
        for summary in list_startups(&catalog) {
            let startup = get_startup(&catalog, &summary.id).unwrap();
            assert_eq!(startup.id, summary.id);
            assert_eq!(startup.signal_score, summary.signal_score);
        }
    }

    /// 测试未知 id 返回 NotFound
    #[test]
    fn test_get_startup_not_found() {
        let catalog = Catalog::seed();
        let err = get_startup(&catalog, "su-404").unwrap_err();
        assert!(matches!(err, CatalogError::StartupNotFound(_)));
    }

    /// 空动量序列得 0 分
    #[test]
    fn test_signal_score_empty() {
        assert_eq!(signal_score(&[]), 0.0);
    }

    /// 信号越强分数越高
    #[test]
    fn test_signal_score_monotonic() {
        let weak = vec![point("2025-05", 2, 10), point("2025-06", 2, 12)];
        let strong = vec![point("2025-05", 8, 40), point("2025-06", 10, 55)];
        assert!(signal_score(&strong) > signal_score(&weak));
    }

    /// 同样的信号，出现在近月时分数更高
    #[test]
    fn test_signal_score_recency_weighted() {
        let early = vec![point("2025-05", 10, 20), point("2025-06", 0, 0)];
        let late = vec![point("2025-05", 0, 0), point("2025-06", 10, 20)];
        assert!(signal_score(&late) > signal_score(&early));
    }
}
