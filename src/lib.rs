//! 市场情报仪表盘
//!
//! 终端双栏仪表盘：「公开股票」与「初创信号」两个视图
//! 后端为提供静态模拟数据的 RESTful API，前端为键盘导航的终端 UI

pub mod catalog;  // 静态数据目录
pub mod client;   // 数据服务 HTTP 客户端
pub mod config;   // 配置
pub mod handlers; // HTTP 请求处理器
pub mod models;   // 数据模型定义
pub mod services; // 业务逻辑服务
pub mod tui;      // 终端 UI
