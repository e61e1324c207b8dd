//! 仿真 / 硬件两种模块后端
//!
//! 控制循环持有 [`ModuleBackend`]，不关心电压最终落到仿真模型还是真实电机控制器上。
//! 硬件实现由外部 crate 提供，只需实现 [`ModuleIo`]。

use crate::io::{ModuleIo, ModuleTelemetry};
use crate::sim::ModuleIoSim;
use std::fmt;
use std::time::Duration;
use swerve_types::Volts;

/// 模块后端
pub enum ModuleBackend {
    /// 物理仿真
    Simulated(ModuleIoSim),
    /// 真实硬件（外部实现）
    Hardware(Box<dyn ModuleIo + Send>),
}

impl ModuleBackend {
    /// 包装外部硬件实现
    pub fn hardware<T: ModuleIo + Send + 'static>(io: T) -> Self {
        ModuleBackend::Hardware(Box::new(io))
    }

    pub fn is_simulated(&self) -> bool {
        matches!(self, ModuleBackend::Simulated(_))
    }

    /// 后端名称（用于日志）
    pub fn kind(&self) -> &'static str {
        match self {
            ModuleBackend::Simulated(_) => "simulated",
            ModuleBackend::Hardware(_) => "hardware",
        }
    }

    /// 仿真后端的引用（硬件后端返回 `None`）
    pub fn as_sim(&self) -> Option<&ModuleIoSim> {
        match self {
            ModuleBackend::Simulated(sim) => Some(sim),
            ModuleBackend::Hardware(_) => None,
        }
    }
}

impl From<ModuleIoSim> for ModuleBackend {
    fn from(sim: ModuleIoSim) -> Self {
        ModuleBackend::Simulated(sim)
    }
}

impl fmt::Debug for ModuleBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleBackend::Simulated(sim) => f.debug_tuple("Simulated").field(sim).finish(),
            ModuleBackend::Hardware(_) => f.write_str("Hardware(..)"),
        }
    }
}

impl ModuleIo for ModuleBackend {
    fn set_drive_voltage(&mut self, volts: Volts) {
        match self {
            ModuleBackend::Simulated(sim) => sim.set_drive_voltage(volts),
            ModuleBackend::Hardware(io) => io.set_drive_voltage(volts),
        }
    }

    fn set_turn_voltage(&mut self, volts: Volts) {
        match self {
            ModuleBackend::Simulated(sim) => sim.set_turn_voltage(volts),
            ModuleBackend::Hardware(io) => io.set_turn_voltage(volts),
        }
    }

    fn advance(&mut self, dt: Duration) {
        match self {
            ModuleBackend::Simulated(sim) => sim.advance(dt),
            ModuleBackend::Hardware(io) => io.advance(dt),
        }
    }

    fn read_telemetry(&self) -> ModuleTelemetry {
        match self {
            ModuleBackend::Simulated(sim) => sim.read_telemetry(),
            ModuleBackend::Hardware(io) => io.read_telemetry(),
        }
    }
}
