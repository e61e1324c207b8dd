//! 模块 IO 契约
//!
//! 控制循环只面向 [`ModuleIo`] 编写：仿真实现（[`ModuleIoSim`](crate::ModuleIoSim)）
//! 和硬件实现共享同一套电压指令与遥测快照。
//!
//! # 周期约定
//!
//! ```text
//! set_drive_voltage / set_turn_voltage   (控制器输出)
//!         ↓
//! advance(dt)                            (每周期恰好一次)
//!         ↓
//! read_telemetry()                       (本周期有效)
//! ```

use serde::Serialize;
use smallvec::SmallVec;
use std::time::Duration;
use swerve_types::{Amps, Rad, RadPerSec, Volts};

/// 里程计采样
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct OdometrySample {
    /// 采样时间（秒）
    pub timestamp_secs: f64,
    /// 驱动轴累积转角
    pub drive_position: Rad,
    /// 转向轴相对转角
    pub turn_position: Rad,
}

/// 里程计采样序列（每个子步一个）
pub type OdometrySamples = SmallVec<[OdometrySample; 4]>;

/// 模块遥测快照
///
/// 每个控制周期生成一份，只读。
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ModuleTelemetry {
    /// 驱动轴累积转角（不回绕）
    pub drive_position: Rad,
    pub drive_velocity: RadPerSec,
    pub drive_applied_volts: Volts,
    /// 驱动电流幅值（非负）
    pub drive_current: Amps,

    /// 转向绝对位置（相对位置 + 初始偏置，规范化到 [-π, π]）
    pub turn_absolute_position: Rad,
    /// 转向相对位置（原始仿真转角）
    pub turn_position: Rad,
    pub turn_velocity: RadPerSec,
    pub turn_applied_volts: Volts,
    /// 转向电流幅值（非负）
    pub turn_current: Amps,

    /// 按时间顺序排列的里程计采样
    pub odometry: OdometrySamples,
}

impl ModuleTelemetry {
    /// 最新的里程计采样
    pub fn latest_odometry(&self) -> Option<&OdometrySample> {
        self.odometry.last()
    }

    /// 两个电机的总电流
    pub fn total_current(&self) -> Amps {
        self.drive_current + self.turn_current
    }
}

/// 单个 swerve 模块的执行器接口
pub trait ModuleIo {
    /// 设置驱动电机电压（饱和到额定范围）
    fn set_drive_voltage(&mut self, volts: Volts);

    /// 设置转向电机电压（饱和到额定范围）
    fn set_turn_voltage(&mut self, volts: Volts);

    /// 推进一个控制周期
    fn advance(&mut self, dt: Duration);

    /// 读取当前遥测
    fn read_telemetry(&self) -> ModuleTelemetry;

    /// `advance` 后立即读取遥测
    fn update(&mut self, dt: Duration) -> ModuleTelemetry {
        self.advance(dt);
        self.read_telemetry()
    }
}

impl<T: ModuleIo + ?Sized> ModuleIo for Box<T> {
    fn set_drive_voltage(&mut self, volts: Volts) {
        (**self).set_drive_voltage(volts)
    }

    fn set_turn_voltage(&mut self, volts: Volts) {
        (**self).set_turn_voltage(volts)
    }

    fn advance(&mut self, dt: Duration) {
        (**self).advance(dt)
    }

    fn read_telemetry(&self) -> ModuleTelemetry {
        (**self).read_telemetry()
    }
}
