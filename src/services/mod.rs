//! 业务逻辑服务模块
//!
//! 目录快照上的纯只读查询，无副作用

pub mod startup_service; // 初创公司查询
pub mod stock_service;   // 股票查询
