//! 分享链接 share id 提取与规范化。

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

static RE_TOKEN: OnceLock<Regex> = OnceLock::new();

fn re_token() -> &'static Regex {
    RE_TOKEN.get_or_init(|| Regex::new(r"[a-zA-Z0-9]{8,}").expect("compile RE_TOKEN"))
}

/// 从分享链接中提取 share id：取 URL 路径中最后一个非空段。
///
/// URL 解析失败时退化为扫描原始字符串里首个长度 >= 8 的字母数字串。
/// 该回退只是尽力而为：带跟踪参数或多段长 token 的输入本身就有歧义，
/// 收紧规则可能误伤真实分享链接，故保持现状。
pub fn extract_share_id(url: &str) -> Option<String> {
    match Url::parse(url) {
        Ok(parsed) => parsed
            .path()
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .map(str::to_string),
        Err(_) => re_token().find(url).map(|m| m.as_str().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_last_path_segment() {
        assert_eq!(
            extract_share_id("https://pan.baidu.com/s/1AbCdEfGhIj"),
            Some("1AbCdEfGhIj".to_string())
        );
    }

    #[test]
    fn skips_trailing_empty_segments() {
        assert_eq!(
            extract_share_id("https://drive.uc.cn/s/abc123xy/"),
            Some("abc123xy".to_string())
        );
    }

    #[test]
    fn ignores_query_and_fragment() {
        assert_eq!(
            extract_share_id("https://www.123pan.com/s/KeyABC12?from=share#top"),
            Some("KeyABC12".to_string())
        );
    }

    #[test]
    fn empty_path_yields_none() {
        assert_eq!(extract_share_id("https://example.com/"), None);
        assert_eq!(extract_share_id("https://example.com"), None);
    }

    #[test]
    fn falls_back_to_alphanumeric_run_on_parse_failure() {
        assert_eq!(
            extract_share_id("not a url but ABCDEFGH123 embedded"),
            Some("ABCDEFGH123".to_string())
        );
    }

    #[test]
    fn fallback_requires_eight_chars() {
        assert_eq!(extract_share_id("short ab12 tokens only"), None);
    }
}
