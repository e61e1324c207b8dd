//! 错误类型
//!
//! 仿真本身没有运行时错误（电压饱和而非拒绝），
//! 只有加载/校验配置时可能失败。

use std::path::PathBuf;
use thiserror::Error;

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML 解析失败
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML 序列化失败
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// 参数不满足物理约束
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// 参数名（点分路径，如 `drive.reduction`）
        name: &'static str,
        /// 实际值
        value: f64,
        /// 原因
        reason: &'static str,
    },
}

impl ConfigError {
    /// 是否为参数校验错误（相对于 IO/解析错误）
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, ConfigError::InvalidParameter { .. })
    }
}
