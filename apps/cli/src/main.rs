//! # Swerve CLI
//!
//! swerve 模块执行器仿真的命令行工具。
//!
//! ```bash
//! # 打印默认模块常量（TOML）
//! swerve-cli config > module.toml
//!
//! # 开环仿真：驱动 6V，转向 1.5V，运行 50 个周期
//! swerve-cli simulate --config module.toml --cycles 50 --drive-volts 6 --turn-volts 1.5
//!
//! # JSON Lines 输出，便于脚本处理
//! swerve-cli simulate --seed 42 --format json
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{ConfigCommand, SimulateCommand};

/// Swerve CLI - 模块执行器仿真工具
#[derive(Parser, Debug)]
#[command(name = "swerve-cli")]
#[command(about = "Command-line runner for the swerve module actuator simulation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 打印模块常量
    Config {
        #[command(flatten)]
        args: ConfigCommand,
    },

    /// 开环电压仿真并输出遥测
    Simulate {
        #[command(flatten)]
        args: SimulateCommand,
    },
}

fn main() -> Result<()> {
    // 初始化日志（日志写 stderr，遥测写 stdout）
    swerve_sdk::init_logging("swerve_cli=info,swerve_sim=warn");

    let cli = Cli::parse();

    match cli.command {
        Commands::Config { args } => args.execute(),
        Commands::Simulate { args } => args.execute(),
    }
}
