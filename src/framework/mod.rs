use anyhow::Result;
use tracing::info;

use crate::models::SiteConfig;

/// 博客框架入口契约
///
/// 框架接收配置后负责全部实际工作：渲染文章、路由、模板、
/// 启动服务、生成 feed。本仓库只构造配置并提交。
pub trait Blog {
    /// 消费站点配置并启动框架流程
    fn blog(&mut self, config: SiteConfig) -> Result<()>;
}

/// 空运行入口
///
/// 只记录收到的配置，不做任何生成工作。用于本地确认
/// 提交的描述符内容。
#[derive(Debug, Default)]
pub struct DryRun {
    received: Option<SiteConfig>,
}

impl DryRun {
    /// 创建新的空运行入口
    pub fn new() -> Self {
        Self::default()
    }

    /// 最近一次提交的配置
    pub fn received(&self) -> Option<&SiteConfig> {
        self.received.as_ref()
    }
}

impl Blog for DryRun {
    fn blog(&mut self, config: SiteConfig) -> Result<()> {
        info!("Site: {}", config.title);
        if let Some(author) = &config.author {
            info!("Author: {}", author);
        }
        if let Some(avatar) = &config.avatar {
            info!("Avatar: {}", avatar);
        }
        info!("Links: {}", config.links.len());
        for middleware in &config.middlewares {
            info!("Middleware: {}", middleware.name());
        }

        self.received = Some(config);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site;

    #[test]
    fn test_dry_run_records_config() {
        let mut entry = DryRun::new();
        assert!(entry.received().is_none());

        // 提交后原样保存，字段不被修改
        let config = site::primary();
        entry.blog(config.clone()).unwrap();
        assert_eq!(entry.received(), Some(&config));
    }
}
