//! 网络层失败时各网盘的默认判定策略。
//!
//! 这些接口都是无鉴权的公开端点，风控、限流和瞬时 5xx 的表现各不相同，
//! 失败兜底也因此按家调校：大多数乐观放行，百度悲观判死，天翼只对超时
//! 乐观。策略以具名常量形式放在各 provider 模块里，不做统一。

use reqwest::StatusCode;
use thiserror::Error;

use crate::check_result::CheckResult;

/// 单次检测中未能完成关键词/字段判定时的失败形态。
#[derive(Debug, Error)]
pub(crate) enum ProviderError {
    #[error("请求超时")]
    Timeout,
    #[error("HTTP 状态 {0}")]
    Status(StatusCode),
    #[error("{0}")]
    Transport(reqwest::Error),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Transport(err)
        }
    }
}

/// 失败兜底判定。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fallback {
    AssumeValid,
    AssumeInvalid,
}

/// 一家网盘的失败兜底策略：超时与其它失败分开配置。
#[derive(Debug, Clone, Copy)]
pub(crate) struct ErrorPolicy {
    pub on_timeout: Fallback,
    pub on_other: Fallback,
}

impl ErrorPolicy {
    /// 将失败按策略折算成检测结果。超时放行时沿用固定文案且不带
    /// error 字段，其余情况把原始错误文本挂在 `error` 上。
    pub(crate) fn apply(self, err: ProviderError) -> CheckResult {
        let fallback = match err {
            ProviderError::Timeout => self.on_timeout,
            _ => self.on_other,
        };
        match (fallback, &err) {
            (Fallback::AssumeValid, ProviderError::Timeout) => {
                CheckResult::valid("检测超时，链接可能有效")
            }
            (Fallback::AssumeValid, _) => {
                CheckResult::valid_with_error("网络错误，链接可能有效", err.to_string())
            }
            (Fallback::AssumeInvalid, _) => {
                CheckResult::invalid_with_error("链接检测失败", err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIMISTIC: ErrorPolicy = ErrorPolicy {
        on_timeout: Fallback::AssumeValid,
        on_other: Fallback::AssumeValid,
    };
    const PESSIMISTIC: ErrorPolicy = ErrorPolicy {
        on_timeout: Fallback::AssumeInvalid,
        on_other: Fallback::AssumeInvalid,
    };
    const TIMEOUT_ONLY: ErrorPolicy = ErrorPolicy {
        on_timeout: Fallback::AssumeValid,
        on_other: Fallback::AssumeInvalid,
    };

    #[test]
    fn optimistic_timeout_has_fixed_message_without_error() {
        let result = OPTIMISTIC.apply(ProviderError::Timeout);
        assert!(result.is_valid);
        assert_eq!(result.message.as_deref(), Some("检测超时，链接可能有效"));
        assert!(result.error.is_none());
    }

    #[test]
    fn optimistic_status_failure_keeps_error_text() {
        let result = OPTIMISTIC.apply(ProviderError::Status(StatusCode::BAD_GATEWAY));
        assert!(result.is_valid);
        assert_eq!(result.message.as_deref(), Some("网络错误，链接可能有效"));
        assert_eq!(result.error.as_deref(), Some("HTTP 状态 502 Bad Gateway"));
    }

    #[test]
    fn pessimistic_failure_is_invalid() {
        let result = PESSIMISTIC.apply(ProviderError::Timeout);
        assert!(!result.is_valid);
        assert_eq!(result.message.as_deref(), Some("链接检测失败"));
    }

    #[test]
    fn split_policy_branches_on_timeout() {
        assert!(TIMEOUT_ONLY.apply(ProviderError::Timeout).is_valid);
        assert!(
            !TIMEOUT_ONLY
                .apply(ProviderError::Status(StatusCode::INTERNAL_SERVER_ERROR))
                .is_valid
        );
    }
}
