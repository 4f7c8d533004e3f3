//! 百度网盘：抓取分享页，按页面关键词判定。
//!
//! 唯一在网络层失败时判死的网盘：百度分享页很少被风控整页拦截，
//! 拿不到页面基本意味着链接有问题。

use reqwest::Client;
use reqwest::header::USER_AGENT;
use tracing::debug;

use crate::check_result::CheckResult;
use crate::policy::{ErrorPolicy, Fallback, ProviderError};

pub(crate) const SHARE_BASE: &str = "https://pan.baidu.com/s";

const INVALID_KEYWORDS: [&str; 3] = ["分享的文件已经被取消", "分享已过期", "你访问的页面不存在"];
const VALID_KEYWORDS: [&str; 3] = ["请输入提取码", "提取文件", "过期时间"];

const ERROR_POLICY: ErrorPolicy = ErrorPolicy {
    on_timeout: Fallback::AssumeInvalid,
    on_other: Fallback::AssumeInvalid,
};

pub(crate) async fn check(
    client: &Client,
    share_base: &str,
    user_agent: &str,
    share_id: &str,
) -> CheckResult {
    match fetch(client, share_base, user_agent, share_id).await {
        Ok(result) => result,
        Err(err) => ERROR_POLICY.apply(err),
    }
}

async fn fetch(
    client: &Client,
    share_base: &str,
    user_agent: &str,
    share_id: &str,
) -> Result<CheckResult, ProviderError> {
    let url = format!("{share_base}/{share_id}");
    debug!("检测百度网盘分享页: {}", url);
    let response = client
        .get(&url)
        .header(USER_AGENT, user_agent)
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Status(status));
    }
    let text = response.text().await?;
    Ok(classify(&text))
}

// 人机校验页优先放行，其次查失效关键词，最后才看有效关键词。
fn classify(text: &str) -> CheckResult {
    if text.contains("need verify") {
        return CheckResult::valid("需要验证");
    }
    if INVALID_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        return CheckResult::invalid("链接已失效");
    }
    let needs_code = text.contains("请输入提取码");
    CheckResult {
        is_valid: VALID_KEYWORDS.iter().any(|kw| text.contains(kw)),
        message: Some(if needs_code { "需要提取码" } else { "链接有效" }.to_string()),
        error: None,
    }
}
