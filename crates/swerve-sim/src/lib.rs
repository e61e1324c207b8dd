//! # Swerve Sim
//!
//! swerve 模块执行器层的物理仿真：把驱动/转向电压指令转换为
//! 位置、速度、电流遥测，每个控制周期采样一次。
//!
//! ## 模块
//!
//! - `motor`: 直流电机特性、减速负载模型（纯函数步进）、单轴仿真
//! - `io`: `ModuleIo` 契约、遥测快照、里程计采样
//! - `sim`: `ModuleIoSim` 仿真实现
//! - `backend`: 仿真 / 硬件后端分发
//! - `config`: 模块常量（TOML）
//! - `error`: 配置错误
//!
//! ## 并发
//!
//! 单线程、同步、按周期驱动。每个模块的仿真由对应控制循环独占，无需加锁。

pub mod backend;
pub mod config;
pub mod error;
pub mod io;
pub mod motor;
pub mod sim;

// 重新导出常用类型
pub use backend::ModuleBackend;
pub use config::{AxisConstants, ModuleConstants, MotorSpec};
pub use error::ConfigError;
pub use io::{ModuleIo, ModuleTelemetry, OdometrySample, OdometrySamples};
pub use motor::{DcMotor, DcMotorPlant, DcMotorSim, PlantStep};
pub use sim::ModuleIoSim;
