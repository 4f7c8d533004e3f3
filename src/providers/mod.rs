//! 各网盘的检测实现与类型识别。

pub(crate) mod aliyun;
pub(crate) mod baidu;
pub(crate) mod pan115;
pub(crate) mod pan123;
pub(crate) mod quark;
pub(crate) mod tianyi;
pub(crate) mod uc;

/// 支持检测的网盘类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Uc,
    Aliyun,
    Pan115,
    Quark,
    Pan123,
    Baidu,
    Tianyi,
}

impl Provider {
    /// 按链接中的域名关键串识别网盘类型。匹配顺序即优先级。
    pub fn from_url(url: &str) -> Option<Self> {
        if url.contains("uc.cn") || url.contains("drive.uc.cn") {
            Some(Self::Uc)
        } else if url.contains("aliyundrive.com") {
            Some(Self::Aliyun)
        } else if url.contains("115.com") {
            Some(Self::Pan115)
        } else if url.contains("quark.cn") {
            Some(Self::Quark)
        } else if url.contains("123pan.com") {
            Some(Self::Pan123)
        } else if url.contains("pan.baidu.com") {
            Some(Self::Baidu)
        } else if url.contains("cloud.189.cn") {
            Some(Self::Tianyi)
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Uc => "UC网盘",
            Self::Aliyun => "阿里云盘",
            Self::Pan115 => "115网盘",
            Self::Quark => "夸克网盘",
            Self::Pan123 => "123云盘",
            Self::Baidu => "百度网盘",
            Self::Tianyi => "天翼云盘",
        }
    }
}
