use anyhow::Result;
use blog_config::framework::{Blog, DryRun};
use blog_config::site;
use colored::Colorize;
use tracing::error;
use tracing_subscriber::fmt;

fn main() -> Result<()> {
    // 初始化日志系统
    fmt()
        .with_target(false)
        .init();

    // 打印欢迎信息
    println!("{} {}", "Blog-Config".bright_cyan(), env!("CARGO_PKG_VERSION").bright_green());
    println!("{}", "Site configuration descriptor for a minimal blog framework".bright_white());
    println!();

    // 构造配置并提交给框架入口
    let mut entry = DryRun::new();
    if let Err(e) = entry.blog(site::primary()) {
        error!("Error: {}", e);

        // 打印错误链
        let mut source = e.source();
        while let Some(e) = source {
            error!("Caused by: {}", e);
            source = e.source();
        }

        std::process::exit(1);
    }

    Ok(())
}

