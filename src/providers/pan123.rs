//! 123 云盘：分享信息接口。

use reqwest::Client;
use reqwest::StatusCode;
use reqwest::header::USER_AGENT;
use serde_json::Value;
use tracing::debug;

use crate::check_result::CheckResult;
use crate::json::{field, field_truthy};
use crate::policy::{ErrorPolicy, Fallback, ProviderError};

pub(crate) const API: &str = "https://www.123pan.com/api/share/info";

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
    debug!("检测 123 云盘分享: shareKey={}", share_id);
    let response = client
        .get(api)
        .query(&[("shareKey", share_id)])
        .header(USER_AGENT, "Mozilla/5.0")
        .send()
        .await?;
    let status = response.status();
    // 接口对无 Cookie 的请求常回 403，视为分享大概率存在。
    if status == StatusCode::FORBIDDEN {
        return Ok(CheckResult::valid("链接可能有效（403错误）"));
    }
    if !status.is_success() {
        return Err(ProviderError::Status(status));
    }
    let body: Value = response.json().await?;
    Ok(classify(&body))
}

fn classify(body: &Value) -> CheckResult {
    let has_pwd = field(body, "data").is_some_and(|data| field_truthy(data, "HasPwd"));
    let code_ok = field(body, "code").and_then(Value::as_i64) == Some(0);
    CheckResult {
        is_valid: has_pwd || code_ok,
        message: Some(if has_pwd { "需要密码" } else { "链接有效" }.to_string()),
        error: None,
    }
}
