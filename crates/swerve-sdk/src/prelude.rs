//! Prelude - 常用类型的便捷导入
//!
//! ```rust
//! use swerve_sdk::prelude::*;
//! ```

// 值类型
pub use swerve_types::{
    Amps, ChassisSpeeds, Rad, RadPerSec, SwerveModuleState, SwerveSetpoint, Volts,
};

// 仿真与 IO 契约
pub use swerve_sim::{
    ModuleBackend, ModuleConstants, ModuleIo, ModuleIoSim, ModuleTelemetry, OdometrySample,
};

// 错误类型
pub use swerve_sim::ConfigError;
