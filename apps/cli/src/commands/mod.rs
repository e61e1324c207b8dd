//! 命令定义和实现

pub mod config;
pub mod simulate;

pub use config::ConfigCommand;
pub use simulate::SimulateCommand;

use anyhow::{Context, Result};
use std::path::Path;
use swerve_sdk::ModuleConstants;

/// 加载模块常量：给定路径则读文件，否则使用默认值
pub fn load_constants(path: Option<&Path>) -> Result<ModuleConstants> {
    match path {
        Some(path) => ModuleConstants::load_from_file(path)
            .with_context(|| format!("加载配置文件失败: {}", path.display())),
        None => Ok(ModuleConstants::default()),
    }
}
