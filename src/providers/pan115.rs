//! 115 网盘：分享快照接口。

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::check_result::CheckResult;
use crate::json::{field_str, field_truthy};
use crate::policy::{ErrorPolicy, Fallback, ProviderError};

pub(crate) const API: &str = "https://webapi.115.com/share/snap";

const ERROR_POLICY: ErrorPolicy = ErrorPolicy {
    on_timeout: Fallback::AssumeValid,
    on_other: Fallback::AssumeValid,
};

pub(crate) async fn check(client: &Client, api: &str, share_id: &str) -> CheckResult {
    match fetch(client, api, share_id).await {
        Ok(result) => result,
        Err(err) => ERROR_POLICY.apply(err),
    }
}

async fn fetch(client: &Client, api: &str, share_id: &str) -> Result<CheckResult, ProviderError> {
    debug!("检测 115 网盘分享: share_code={}", share_id);
    let response = client
        .get(api)
        .query(&[("share_code", share_id), ("receive_code", "")])
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Status(status));
    }
    let body: Value = response.json().await?;
    Ok(classify(&body))
}

fn classify(body: &Value) -> CheckResult {
    // 带访问码的分享 state 为假，但 error 文案会提示输入访问码。
    let needs_code = field_str(body, "error").is_some_and(|e| e.contains("请输入访问码"));
    CheckResult {
        is_valid: field_truthy(body, "state") || needs_code,
        message: Some(if needs_code { "需要访问码" } else { "链接有效" }.to_string()),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthy_state_is_valid() {
        let result = classify(&json!({ "state": true, "data": {} }));
        assert!(result.is_valid);
        assert_eq!(result.message.as_deref(), Some("链接有效"));
    }

    #[test]
    fn access_code_prompt_is_valid() {
        let result = classify(&json!({ "state": false, "error": "请输入访问码" }));
        assert!(result.is_valid);
        assert_eq!(result.message.as_deref(), Some("需要访问码"));
    }

    #[test]
    fn false_state_without_prompt_is_invalid() {
        let result = classify(&json!({ "state": false, "error": "分享不存在" }));
        assert!(!result.is_valid);
    }
}
