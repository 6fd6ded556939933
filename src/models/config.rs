use serde::{Deserialize, Serialize};
use url::Url;

use super::error::ConfigError;
use super::middleware::Middleware;

/// 站点配置描述符
///
/// 在进程启动时构造一次，按值提交给博客框架入口，之后不再修改。
/// 本地不做任何校验或默认值推导，一律交给框架处理。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// 站点标题（框架契约要求，此处不强制）
    pub title: String,
    /// 站点作者
    pub author: Option<String>,
    /// 头像，相对路径或远程 HTTPS URL，均为字符串
    pub avatar: Option<String>,
    /// 头像样式提示，原样透传给框架
    pub avatar_class: Option<String>,
    /// 站点描述
    pub description: Option<String>,
    /// 导航链接（插入顺序即展示顺序，不去重）
    #[serde(default)]
    pub links: Vec<Link>,
    /// 中间件列表（顺序即框架内的请求处理顺序）
    #[serde(default)]
    pub middlewares: Vec<Middleware>,
    /// 站点图标路径
    pub favicon: Option<String>,
}

/// 导航链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// 链接标题
    pub title: String,
    /// 链接地址
    pub url: String,
}

/// 链接类型，按 URL scheme 区分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// mailto: 邮件链接
    Mailto,
    /// https:// 链接
    Https,
    /// 其他或无法解析的地址
    Other,
}

impl Link {
    /// 创建新的链接
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// 链接类型（仅检查 scheme，不校验地址有效性）
    pub fn kind(&self) -> LinkKind {
        match Url::parse(&self.url) {
            Ok(url) if url.scheme() == "mailto" => LinkKind::Mailto,
            Ok(url) if url.scheme() == "https" => LinkKind::Https,
            _ => LinkKind::Other,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            author: None,
            avatar: None,
            avatar_class: None,
            description: None,
            links: Vec::new(),
            middlewares: Vec::new(),
            favicon: None,
        }
    }
}

impl SiteConfig {
    /// 序列化为 YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// 从 YAML 反序列化
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// 序列化为 JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 从 JSON 反序列化
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_kind() {
        // mailto 链接
        let link = Link::new("Email", "mailto:someone@example.com");
        assert_eq!(link.kind(), LinkKind::Mailto);

        // https 链接
        let link = Link::new("GitHub", "https://github.com/example");
        assert_eq!(link.kind(), LinkKind::Https);

        // 其他 scheme 或无法解析的地址
        let link = Link::new("FTP", "ftp://example.com");
        assert_eq!(link.kind(), LinkKind::Other);
        let link = Link::new("Broken", "not a url");
        assert_eq!(link.kind(), LinkKind::Other);
    }

    #[test]
    fn test_camel_case_field_names() {
        let config = SiteConfig {
            avatar_class: Some("rounded-full".to_string()),
            ..SiteConfig::default()
        };

        // avatarClass 按描述符原始字段名序列化
        let json = config.to_json().unwrap();
        assert!(json.contains("avatarClass"));
        assert!(!json.contains("avatar_class"));
    }
}
