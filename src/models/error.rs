use thiserror::Error;

/// 配置错误类型
///
/// 描述符本身的构造不会失败，唯一可能出错的本地操作是序列化。
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("YAML 序列化错误: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON 序列化错误: {0}")]
    Json(#[from] serde_json::Error),
}
