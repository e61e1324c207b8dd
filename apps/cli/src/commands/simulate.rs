//! 开环仿真命令
//!
//! 以固定电压驱动一个仿真模块，逐周期输出遥测。

use anyhow::{Result, bail};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use swerve_sdk::prelude::*;
use tracing::info;

/// 输出格式
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// 对齐表格
    Table,
    /// 每周期一行 JSON
    Json,
}

/// 仿真命令参数
#[derive(Args, Debug)]
pub struct SimulateCommand {
    /// 配置文件（省略则使用默认常量）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 仿真周期数
    #[arg(short = 'n', long, default_value_t = 10)]
    pub cycles: u32,

    /// 驱动电压（V，超出额定范围会饱和）
    #[arg(long, default_value_t = 6.0, allow_negative_numbers = true)]
    pub drive_volts: f64,

    /// 转向电压（V，超出额定范围会饱和）
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub turn_volts: f64,

    /// 转向初始偏置的随机种子（省略则使用系统熵）
    #[arg(long)]
    pub seed: Option<u64>,

    /// 输出格式
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl SimulateCommand {
    /// 执行仿真
    pub fn execute(&self) -> Result<()> {
        if self.cycles == 0 {
            bail!("cycles 必须大于 0");
        }

        let constants = super::load_constants(self.config.as_deref())?;
        let sim = match self.seed {
            Some(seed) => ModuleIoSim::with_seed(&constants, seed)?,
            None => ModuleIoSim::from_entropy(&constants)?,
        };
        info!(
            turn_offset = %sim.turn_offset(),
            cycles = self.cycles,
            "Starting open-loop simulation"
        );

        let mut module = ModuleBackend::from(sim);
        let dt = constants.loop_period();

        if self.format == OutputFormat::Table {
            println!(
                "{:>5} {:>8} {:>12} {:>12} {:>9} {:>12} {:>12} {:>9}",
                "cycle", "t(s)", "drive(rad)", "drive(r/s)", "drive(A)", "turn_abs", "turn(r/s)", "turn(A)"
            );
        }

        for cycle in 1..=self.cycles {
            module.set_drive_voltage(Volts(self.drive_volts));
            module.set_turn_voltage(Volts(self.turn_volts));
            let telemetry = module.update(dt);
            let timestamp = telemetry
                .latest_odometry()
                .map_or(0.0, |sample| sample.timestamp_secs);

            match self.format {
                OutputFormat::Table => println!("{}", format_row(cycle, timestamp, &telemetry)),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({
                        "cycle": cycle,
                        "telemetry": telemetry,
                    })
                ),
            }
        }

        Ok(())
    }
}

fn format_row(cycle: u32, timestamp: f64, t: &ModuleTelemetry) -> String {
    format!(
        "{:>5} {:>8.3} {:>12.4} {:>12.4} {:>9.3} {:>12.4} {:>12.4} {:>9.3}",
        cycle,
        timestamp,
        t.drive_position.0,
        t.drive_velocity.0,
        t.drive_current.0,
        t.turn_absolute_position.0,
        t.turn_velocity.0,
        t.turn_current.0,
    )
}
