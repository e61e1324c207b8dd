//! # Swerve Types
//!
//! swerve 底盘控制链路共享的值类型（无状态、无 IO）
//!
//! ## 模块
//!
//! - `units`: 强类型单位（`Rad`、`RadPerSec`、`Volts`、`Amps`）
//! - `kinematics`: 底盘速度与模块状态
//! - `setpoint`: 运动学层下发给模块控制器的设定点
//!
//! ## Feature Flags
//!
//! - `serde` - 为全部类型派生 `Serialize` / `Deserialize`

pub mod kinematics;
pub mod setpoint;
pub mod units;

// 重新导出常用类型
pub use kinematics::{ChassisSpeeds, SwerveModuleState};
pub use setpoint::{ModuleStates, SwerveSetpoint};
pub use units::{Amps, Rad, RadPerSec, Volts};
