//! UC 网盘：抓取分享页，按页面关键词判定（移动端 UA 才会返回分享页）。

use reqwest::Client;
use reqwest::StatusCode;
use reqwest::header::USER_AGENT;
use tracing::debug;

use crate::check_result::CheckResult;
use crate::policy::{ErrorPolicy, Fallback, ProviderError};

pub(crate) const SHARE_BASE: &str = "https://drive.uc.cn/s";

const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 10; SM-G975F) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/87.0.4280.101 Mobile Safari/537.36";

const INVALID_KEYWORDS: [&str; 6] = ["失效", "不存在", "违规", "删除", "已过期", "被取消"];

const ERROR_POLICY: ErrorPolicy = ErrorPolicy {
    on_timeout: Fallback::AssumeValid,
    on_other: Fallback::AssumeValid,
};

pub(crate) async fn check(client: &Client, share_base: &str, share_id: &str) -> CheckResult {
    match fetch(client, share_base, share_id).await {
        Ok(result) => result,
        // 分享页整页 404 说明分享本身不存在，不走乐观兜底。
        Err(ProviderError::Status(StatusCode::NOT_FOUND)) => CheckResult::invalid("链接不存在"),
        Err(err) => ERROR_POLICY.apply(err),
    }
}

async fn fetch(
    client: &Client,
    share_base: &str,
    share_id: &str,
) -> Result<CheckResult, ProviderError> {
    let url = format!("{share_base}/{share_id}");
    debug!("检测 UC 网盘分享页: {}", url);
    let response = client
        .get(&url)
        .header(USER_AGENT, MOBILE_USER_AGENT)
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Status(status));
    }
    let text = response.text().await?;
    Ok(classify(&text))
}

// 先查失效关键词再查有效标记，顺序不可调换。
fn classify(text: &str) -> CheckResult {
    if INVALID_KEYWORDS.iter().any(|kw| text.contains(kw)) {
        return CheckResult::invalid("链接已失效");
    }
    if text.contains("文件") || text.contains("分享") {
        return CheckResult::valid("链接有效");
    }
    CheckResult::invalid("链接无效")
}
