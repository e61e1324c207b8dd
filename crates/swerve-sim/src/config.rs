//! # 模块配置
//!
//! 每台机器人固定的物理参数：减速比、电机特性、等效转动惯量和控制周期。
//! 运行期不可修改；从 TOML 加载时会立即校验。
//!
//! ```toml
//! loop_period_secs = 0.02
//! max_voltage = 12.0
//! odometry_substeps = 1
//!
//! [drive]
//! reduction = 6.75
//! moi_kg_m2 = 0.025
//! motor = { type = "neo", count = 1 }
//!
//! [turn]
//! reduction = 21.428571428571427
//! moi_kg_m2 = 0.004
//! motor = { type = "neo", count = 1 }
//! ```

use crate::error::ConfigError;
use crate::motor::DcMotor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use swerve_types::RadPerSec;

fn one() -> u32 {
    1
}

/// 电机型号
///
/// 预设型号使用厂商数据手册参数；`custom` 允许直接给出特性曲线。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MotorSpec {
    /// REV NEO
    #[serde(rename = "neo")]
    Neo {
        #[serde(default = "one")]
        count: u32,
    },

    /// REV NEO 550
    #[serde(rename = "neo_550")]
    Neo550 {
        #[serde(default = "one")]
        count: u32,
    },

    /// CTRE Falcon 500
    #[serde(rename = "falcon_500")]
    Falcon500 {
        #[serde(default = "one")]
        count: u32,
    },

    /// WCP Kraken X60
    #[serde(rename = "kraken_x60")]
    KrakenX60 {
        #[serde(default = "one")]
        count: u32,
    },

    /// 自定义特性曲线（单台电机参数）
    #[serde(rename = "custom")]
    Custom {
        nominal_voltage: f64,
        stall_torque_nm: f64,
        stall_current_amps: f64,
        free_current_amps: f64,
        free_speed_rpm: f64,
        #[serde(default = "one")]
        count: u32,
    },
}

impl MotorSpec {
    /// 同轴电机数量
    pub fn count(&self) -> u32 {
        match *self {
            MotorSpec::Neo { count }
            | MotorSpec::Neo550 { count }
            | MotorSpec::Falcon500 { count }
            | MotorSpec::KrakenX60 { count }
            | MotorSpec::Custom { count, .. } => count,
        }
    }

    /// 构建电机模型
    pub fn to_motor(&self) -> DcMotor {
        match *self {
            MotorSpec::Neo { count } => DcMotor::neo(count),
            MotorSpec::Neo550 { count } => DcMotor::neo_550(count),
            MotorSpec::Falcon500 { count } => DcMotor::falcon_500(count),
            MotorSpec::KrakenX60 { count } => DcMotor::kraken_x60(count),
            MotorSpec::Custom {
                nominal_voltage,
                stall_torque_nm,
                stall_current_amps,
                free_current_amps,
                free_speed_rpm,
                count,
            } => DcMotor::new(
                nominal_voltage,
                stall_torque_nm,
                stall_current_amps,
                free_current_amps,
                RadPerSec::from_rpm(free_speed_rpm),
                count,
            ),
        }
    }

    fn validate(&self, prefix: &'static str) -> Result<(), ConfigError> {
        if self.count() == 0 {
            return Err(ConfigError::InvalidParameter {
                name: prefix,
                value: 0.0,
                reason: "motor count must be at least 1",
            });
        }

        if let MotorSpec::Custom {
            nominal_voltage,
            stall_torque_nm,
            stall_current_amps,
            free_current_amps,
            free_speed_rpm,
            ..
        } = *self
        {
            require_positive(prefix, nominal_voltage)?;
            require_positive(prefix, stall_torque_nm)?;
            require_positive(prefix, stall_current_amps)?;
            require_positive(prefix, free_speed_rpm)?;
            if !(0.0..stall_current_amps).contains(&free_current_amps) {
                return Err(ConfigError::InvalidParameter {
                    name: prefix,
                    value: free_current_amps,
                    reason: "free current must be in [0, stall current)",
                });
            }
        }
        Ok(())
    }
}

/// 单个轴（驱动或转向）的机械参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisConstants {
    /// 减速比（电机转数 / 输出轴转数）
    pub reduction: f64,

    /// 输出轴等效转动惯量（kg·m²）
    pub moi_kg_m2: f64,

    /// 电机型号
    pub motor: MotorSpec,
}

impl AxisConstants {
    /// MK4i L2 驱动轴
    pub fn default_drive() -> Self {
        Self {
            reduction: 6.75,
            moi_kg_m2: 0.025,
            motor: MotorSpec::Neo { count: 1 },
        }
    }

    /// MK4i 转向轴
    pub fn default_turn() -> Self {
        Self {
            reduction: 150.0 / 7.0,
            moi_kg_m2: 0.004,
            motor: MotorSpec::Neo { count: 1 },
        }
    }

    fn validate(
        &self,
        reduction_name: &'static str,
        moi_name: &'static str,
        motor_name: &'static str,
    ) -> Result<(), ConfigError> {
        require_positive(reduction_name, self.reduction)?;
        require_positive(moi_name, self.moi_kg_m2)?;
        self.motor.validate(motor_name)
    }
}

/// 模块常量
///
/// 所有模块共用一份；由 [`ModuleIoSim`](crate::ModuleIoSim) 在构造时读取。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModuleConstants {
    /// 控制周期（秒）
    pub loop_period_secs: f64,

    /// 执行器额定电压（V），指令电压限制在 ±max_voltage
    pub max_voltage: f64,

    /// 每个控制周期的里程计子步数（1 = 每周期一个采样）
    pub odometry_substeps: u32,

    /// 驱动轴
    pub drive: AxisConstants,

    /// 转向轴
    pub turn: AxisConstants,
}

impl Default for ModuleConstants {
    fn default() -> Self {
        Self {
            loop_period_secs: 0.02,
            max_voltage: 12.0,
            odometry_substeps: 1,
            drive: AxisConstants::default_drive(),
            turn: AxisConstants::default_turn(),
        }
    }
}

impl ModuleConstants {
    /// 从 TOML 字符串解析并校验
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let constants: ModuleConstants = toml::from_str(content)?;
        constants.validate()?;
        Ok(constants)
    }

    /// 从文件加载并校验
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// 序列化为 TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// 控制周期
    ///
    /// 调用前应已通过 [`validate`](Self::validate)；无法表示的周期返回零。
    pub fn loop_period(&self) -> Duration {
        Duration::try_from_secs_f64(self.loop_period_secs).unwrap_or_default()
    }

    /// 校验全部参数
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("loop_period_secs", self.loop_period_secs)?;
        if Duration::try_from_secs_f64(self.loop_period_secs).is_err() {
            return Err(ConfigError::InvalidParameter {
                name: "loop_period_secs",
                value: self.loop_period_secs,
                reason: "must fit in a Duration",
            });
        }
        require_positive("max_voltage", self.max_voltage)?;
        if self.odometry_substeps == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "odometry_substeps",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        self.drive
            .validate("drive.reduction", "drive.moi_kg_m2", "drive.motor")?;
        self.turn
            .validate("turn.reduction", "turn.moi_kg_m2", "turn.motor")?;
        Ok(())
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value,
            reason: "must be finite and positive",
        })
    }
}
