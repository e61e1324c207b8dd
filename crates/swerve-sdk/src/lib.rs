//! Swerve SDK - swerve 模块执行器层
//!
//! 为周期控制循环提供两块积木：
//!
//! - **执行器仿真** (`sim`): 驱动/转向直流电机物理模型，电压进、遥测出
//! - **设定点模型** (`types`): 底盘速度与各模块目标状态的不可变组合
//!
//! 运动学求解、闭环控制器和位姿估计都在本 SDK 之外。
//!
//! # 快速开始
//!
//! ```rust
//! use swerve_sdk::prelude::*;
//!
//! let constants = ModuleConstants::default();
//! let mut module = ModuleBackend::from(ModuleIoSim::with_seed(&constants, 1).unwrap());
//!
//! module.set_drive_voltage(Volts(6.0));
//! module.set_turn_voltage(Volts(0.0));
//! let telemetry = module.update(constants.loop_period());
//! assert!(telemetry.drive_current.0 >= 0.0);
//!
//! let setpoint = SwerveSetpoint::new(
//!     ChassisSpeeds::new(1.0, 0.0, 0.0),
//!     [SwerveModuleState::new(1.0, Rad::ZERO); 4],
//! );
//! assert_eq!(setpoint.module_count(), 4);
//! ```

pub mod logging;
pub mod prelude;

// 分层 crate 通过模块路径访问
pub use swerve_sim as sim;
pub use swerve_types as types;

pub use logging::init_logging;
pub use swerve_sim::{ConfigError, ModuleBackend, ModuleConstants, ModuleIo, ModuleIoSim};
pub use swerve_types::SwerveSetpoint;
