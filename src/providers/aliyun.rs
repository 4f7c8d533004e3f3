//! 阿里云盘：匿名分享信息接口。

use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

use crate::check_result::CheckResult;
use crate::json::{field, field_truthy, truthy};
use crate::policy::{ErrorPolicy, Fallback, ProviderError};

pub(crate) const API: &str =
    "https://api.aliyundrive.com/adrive/v3/share_link/get_share_by_anonymous";

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
    debug!("检测阿里云盘分享: share_id={}", share_id);
    let response = client
        .post(api)
        .json(&json!({ "share_id": share_id }))
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
    let has_pwd = field_truthy(body, "has_pwd");
    let has_files = field(body, "file_infos").is_some_and(truthy);
    CheckResult {
        is_valid: has_pwd || has_files,
        message: Some(if has_pwd { "需要提取码" } else { "链接有效" }.to_string()),
        error: None,
    }
}
