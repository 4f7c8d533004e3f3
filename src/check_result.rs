//! 检测结果值对象。

use serde::Serialize;

/// 单条网盘链接的检测结论。
///
/// `is_valid` 是唯一的判定字段；`message` 用于展示，`error` 仅携带
/// 传输层/解析层的原始错误文本，作诊断用途，不参与判定。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResult {
    pub fn valid(message: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn valid_with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::valid(message)
        }
    }

    pub fn invalid_with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::invalid(message)
        }
    }
}
