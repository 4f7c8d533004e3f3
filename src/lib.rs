//! 网盘分享链接有效性检测。
//!
//! 支持 UC、阿里云盘、115、夸克、123 云盘、百度网盘、天翼云盘七家：
//! 每次检测只对相应公开接口发起一次请求，把响应体/状态码按各家的
//! 关键词和字段规则归类成 [`CheckResult`]。所有失败（超时、连接
//! 失败、非 2xx、解析失败）都会被折算进结果里，调用方只需要分支
//! `is_valid`，永远不需要处理错误。
//!
//! ```no_run
//! # async fn demo() -> anyhow::Result<()> {
//! use netdisk_link_checker::LinkChecker;
//!
//! let checker = LinkChecker::new()?;
//! let result = checker.check_link("https://pan.baidu.com/s/1AbCdEfGhIj").await;
//! if result.is_valid {
//!     println!("{}", result.message.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

mod check_result;
mod checker;
mod json;
mod policy;
mod providers;
mod share_id;

pub use check_result::CheckResult;
pub use checker::{CheckerConfig, LinkChecker};
pub use providers::Provider;
pub use share_id::extract_share_id;
