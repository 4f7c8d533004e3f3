//! 链接检测入口：识别网盘类型并分发到对应实现，支持批量并发检测。

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use tracing::{debug, warn};

use crate::check_result::CheckResult;
use crate::providers::{self, Provider};
use crate::share_id::extract_share_id;

const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// 检测器配置。
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// 单次请求的整体超时。
    pub request_timeout: Duration,
    /// 桌面端 UA，用于百度分享页抓取。UC 固定用移动端 UA。
    pub user_agent: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            user_agent: DESKTOP_USER_AGENT.to_string(),
        }
    }
}

/// 各网盘的请求地址。测试里替换为本地 mock。
#[derive(Debug, Clone)]
pub(crate) struct Endpoints {
    pub uc_share_base: String,
    pub aliyun_api: String,
    pub pan115_api: String,
    pub quark_api: String,
    pub pan123_api: String,
    pub baidu_share_base: String,
    pub tianyi_api: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            uc_share_base: providers::uc::SHARE_BASE.to_string(),
            aliyun_api: providers::aliyun::API.to_string(),
            pan115_api: providers::pan115::API.to_string(),
            quark_api: providers::quark::API.to_string(),
            pan123_api: providers::pan123::API.to_string(),
            baidu_share_base: providers::baidu::SHARE_BASE.to_string(),
            tianyi_api: providers::tianyi::API.to_string(),
        }
    }
}

/// 网盘链接检测器。
///
/// 内部只持有一个共享的 HTTP 客户端，克隆开销很小；所有检测方法
/// 都保证返回 [`CheckResult`] 而不是向上抛错。
#[derive(Debug, Clone)]
pub struct LinkChecker {
    client: Client,
    config: CheckerConfig,
    endpoints: Endpoints,
}

impl LinkChecker {
    pub fn new() -> Result<Self> {
        Self::with_config(CheckerConfig::default())
    }

    pub fn with_config(config: CheckerConfig) -> Result<Self> {
        Self::build(config, Endpoints::default())
    }

    #[cfg(test)]
    pub(crate) fn with_endpoints(config: CheckerConfig, endpoints: Endpoints) -> Result<Self> {
        Self::build(config, endpoints)
    }

    fn build(config: CheckerConfig, endpoints: Endpoints) -> Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            config,
            endpoints,
        })
    }

    /// 检测单条分享链接。任何失败都会被折算成结果，永不返回错误。
    pub async fn check_link(&self, url: &str) -> CheckResult {
        match self.dispatch(url).await {
            Ok(result) => result,
            Err(err) => {
                warn!("链接检测流程出错: {:#}", err);
                CheckResult::valid_with_error("检测出错，链接可能有效", err.to_string())
            }
        }
    }

    async fn dispatch(&self, url: &str) -> Result<CheckResult> {
        let Some(share_id) = extract_share_id(url) else {
            return Ok(CheckResult::invalid("无效的网盘链接格式"));
        };
        let Some(provider) = Provider::from_url(url) else {
            debug!("未识别的网盘链接: {}", url);
            return Ok(CheckResult::valid("未知网盘类型，无法检测"));
        };
        debug!("检测{}链接: share_id={}", provider.name(), share_id);

        let ep = &self.endpoints;
        let result = match provider {
            Provider::Uc => providers::uc::check(&self.client, &ep.uc_share_base, &share_id).await,
            Provider::Aliyun => {
                providers::aliyun::check(&self.client, &ep.aliyun_api, &share_id).await
            }
            Provider::Pan115 => {
                providers::pan115::check(&self.client, &ep.pan115_api, &share_id).await
            }
            Provider::Quark => {
                providers::quark::check(&self.client, &ep.quark_api, &share_id).await
            }
            Provider::Pan123 => {
                providers::pan123::check(&self.client, &ep.pan123_api, &share_id).await
            }
            Provider::Baidu => {
                providers::baidu::check(
                    &self.client,
                    &ep.baidu_share_base,
                    &self.config.user_agent,
                    &share_id,
                )
                .await
            }
            Provider::Tianyi => {
                providers::tianyi::check(&self.client, &ep.tianyi_api, &share_id).await
            }
        };
        Ok(result)
    }

    /// 批量检测：每条链接一个任务全量并发，结果按原始 URL 字符串归集。
    ///
    /// 同一 share id 的不同写法各算一条；整体耗时取决于最慢的一条。
    pub async fn batch_check<I, S>(&self, urls: I) -> HashMap<String, CheckResult>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut handles = Vec::new();
        for url in urls {
            let url = url.into();
            let checker = self.clone();
            handles.push(tokio::spawn(async move {
                let result = checker.check_link(&url).await;
                (url, result)
            }));
        }

        let mut results = HashMap::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok((url, result)) => {
                    results.insert(url, result);
                }
                Err(err) => warn!("批量检测任务异常退出: {}", err),
            }
        }
        results
    }
}
