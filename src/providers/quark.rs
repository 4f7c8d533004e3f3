//! 夸克网盘：分享页 token 接口。

use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

use crate::check_result::CheckResult;
use crate::json::field_str;
use crate::policy::{ErrorPolicy, Fallback, ProviderError};

pub(crate) const API: &str = "https://drive.quark.cn/1/clouddrive/share/sharepage/token";

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
    debug!("检测夸克网盘分享: pwd_id={}", share_id);
    let response = client
        .post(api)
        .json(&json!({ "pwd_id": share_id, "passcode": "" }))
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
    let message = field_str(body, "message").unwrap_or_default();
    let needs_code = message == "需要提取码";
    CheckResult {
        is_valid: message == "ok" || needs_code,
        message: Some(if needs_code { "需要提取码" } else { "链接有效" }.to_string()),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_message_is_valid() {
        let result = classify(&json!({ "status": 200, "message": "ok" }));
        assert!(result.is_valid);
        assert_eq!(result.message.as_deref(), Some("链接有效"));
    }

    #[test]
    fn passcode_prompt_is_valid() {
        let result = classify(&json!({ "status": 400, "message": "需要提取码" }));
        assert!(result.is_valid);
        assert_eq!(result.message.as_deref(), Some("需要提取码"));
    }

    #[test]
    fn other_message_is_invalid() {
        let result = classify(&json!({ "status": 404, "message": "分享不存在" }));
        assert!(!result.is_valid);
    }
}
