//! 站点配置快照
//!
//! 三份配置来自同一站点的不同快照，字段集各有出入
//! （描述、favicon、统计 ID），此处原样保留，不做归并。

use crate::models::{ga, Link, SiteConfig};

/// 公共导航链接
fn links() -> Vec<Link> {
    vec![
        Link::new("Email", "mailto:ezrantn@proton.me"),
        Link::new("GitHub", "https://github.com/ezrantn"),
        Link::new("LinkedIn", "https://www.linkedin.com/in/ezrantn"),
        Link::new(
            "Google Scholar",
            "https://scholar.google.com/citations?hl=en&user=iubOEX4AAAAJ",
        ),
    ]
}

/// 主配置：本地头像，带描述与 favicon
pub fn primary() -> SiteConfig {
    SiteConfig {
        title: "Ezra Natanael".to_string(),
        author: Some("Ezra Natanael".to_string()),
        avatar: Some("./posts/static/pic-of-me.jpeg".to_string()),
        avatar_class: Some("rounded-full".to_string()),
        description: Some("Software Engineer".to_string()),
        links: links(),
        middlewares: vec![ga("G-RJ3SV8DLML")],
        favicon: Some("favicon.ico".to_string()),
    }
}

/// 旧版快照：无描述、无 favicon，统计 ID 仍是 Universal Analytics 占位符
pub fn legacy() -> SiteConfig {
    SiteConfig {
        title: "Ezra Natanael".to_string(),
        author: Some("Ezra Natanael".to_string()),
        avatar: Some("./posts/static/pic-of-me.jpeg".to_string()),
        avatar_class: Some("rounded-full".to_string()),
        description: None,
        links: links(),
        middlewares: vec![ga("UA-XXXXXXXX-X")],
        favicon: None,
    }
}

/// 远程头像快照：头像改用 HTTPS URL，无描述、无 favicon
pub fn remote_avatar() -> SiteConfig {
    SiteConfig {
        title: "Ezra Natanael".to_string(),
        author: Some("Ezra Natanael".to_string()),
        avatar: Some("https://github.com/ezrantn.png".to_string()),
        avatar_class: Some("rounded-full".to_string()),
        description: None,
        links: links(),
        middlewares: vec![ga("G-RJ3SV8DLML")],
        favicon: None,
    }
}
