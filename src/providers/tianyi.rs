//! 天翼云盘：按分享码查询分享信息。
//!
//! 接口失败时返回 XML/JSON 错误码文本，直接对原始响应体做子串匹配。
//! 兜底策略是拆开的：超时乐观放行，其余失败判死。

use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::check_result::CheckResult;
use crate::policy::{ErrorPolicy, Fallback, ProviderError};

pub(crate) const API: &str = "https://api.cloud.189.cn/open/share/getShareInfoByCodeV2.action";

const INVALID_KEYWORDS: [&str; 5] = [
    "ShareInfoNotFound",
    "ShareNotFound",
    "FileNotFound",
    "ShareExpiredError",
    "ShareAuditNotPass",
];

const ERROR_POLICY: ErrorPolicy = ErrorPolicy {
    on_timeout: Fallback::AssumeValid,
    on_other: Fallback::AssumeInvalid,
};

pub(crate) async fn check(client: &Client, api: &str, share_id: &str) -> CheckResult {
    match fetch(client, api, share_id).await {
        Ok(result) => result,
        Err(err) => ERROR_POLICY.apply(err),
    }
}

async fn fetch(client: &Client, api: &str, share_id: &str) -> Result<CheckResult, ProviderError> {
    debug!("检测天翼云盘分享: shareCode={}", share_id);
    let response = client
        .post(api)
        .json(&json!({ "shareCode": share_id }))
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Status(status));
    }
    let text = response.text().await?;
    Ok(classify(&text))
}

fn classify(text: &str) -> CheckResult {
    if INVALID_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        return CheckResult::invalid("链接已失效");
    }
    CheckResult::valid("链接有效")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_in_body_is_invalid() {
        let result = classify("<res_code>ShareInfoNotFound</res_code>");
        assert!(!result.is_valid);
        assert_eq!(result.message.as_deref(), Some("链接已失效"));
    }

    #[test]
    fn audit_rejection_is_invalid() {
        assert!(!classify(r#"{"errorCode":"ShareAuditNotPass"}"#).is_valid);
    }

    #[test]
    fn body_without_error_code_is_valid() {
        let result = classify(r#"{"shareId":12345,"fileName":"资料.zip"}"#);
        assert!(result.is_valid);
        assert_eq!(result.message.as_deref(), Some("链接有效"));
    }
}
