//! 通用 API 响应模型

use serde::{Deserialize, Serialize};

/// 错误响应体
///
/// 所有非 2xx 响应统一返回该结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// 错误信息
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
