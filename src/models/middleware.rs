use serde::{Deserialize, Serialize};

/// 中间件
///
/// 由工厂函数构造的不透明值。本仓库只负责把它挂进配置，
/// 实际的请求处理逻辑在框架内部。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Middleware {
    kind: MiddlewareKind,
}

/// 中间件种类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum MiddlewareKind {
    /// Google Analytics 跟踪
    GoogleAnalytics { tracking_id: String },
}

/// Google Analytics 中间件工厂
pub fn ga(tracking_id: impl Into<String>) -> Middleware {
    Middleware {
        kind: MiddlewareKind::GoogleAnalytics {
            tracking_id: tracking_id.into(),
        },
    }
}

impl Middleware {
    /// 中间件名称
    pub fn name(&self) -> &'static str {
        match self.kind {
            MiddlewareKind::GoogleAnalytics { .. } => "google-analytics",
        }
    }

    /// 跟踪 ID（仅分析类中间件有值）
    pub fn tracking_id(&self) -> Option<&str> {
        match &self.kind {
            MiddlewareKind::GoogleAnalytics { tracking_id } => Some(tracking_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ga_factory() {
        let middleware = ga("G-RJ3SV8DLML");
        assert_eq!(middleware.name(), "google-analytics");
        assert_eq!(middleware.tracking_id(), Some("G-RJ3SV8DLML"));
    }

    #[test]
    fn test_middleware_equality() {
        // 同一跟踪 ID 构造的中间件应相等
        assert_eq!(ga("G-RJ3SV8DLML"), ga("G-RJ3SV8DLML"));
        assert_ne!(ga("G-RJ3SV8DLML"), ga("UA-XXXXXXXX-X"));
    }
}
