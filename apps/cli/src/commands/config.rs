//! 配置打印命令

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// 配置命令参数
#[derive(Args, Debug)]
pub struct ConfigCommand {
    /// 配置文件（省略则打印默认值）
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ConfigCommand {
    /// 以 TOML 打印（校验后的）模块常量
    pub fn execute(&self) -> Result<()> {
        let constants = super::load_constants(self.config.as_deref())?;
        let text = constants.to_toml_string().context("序列化配置失败")?;
        print!("{text}");
        Ok(())
    }
}
