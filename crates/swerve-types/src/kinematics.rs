//! 底盘速度与模块状态
//!
//! 运动学层（外部）把 [`ChassisSpeeds`] 分解为每个模块的 [`SwerveModuleState`]；
//! 本模块只定义这两个值类型，不做任何求解。

use crate::units::Rad;
use std::fmt;

/// 底盘速度
///
/// 机器人坐标系下的平面速度：前进（x）、横移（y）、旋转角速度（omega）。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChassisSpeeds {
    /// 前进方向速度（m/s）
    pub vx_mps: f64,
    /// 横移方向速度（m/s，左为正）
    pub vy_mps: f64,
    /// 旋转角速度（rad/s，逆时针为正）
    pub omega_rad_per_sec: f64,
}

impl ChassisSpeeds {
    /// 静止
    pub const ZERO: Self = ChassisSpeeds {
        vx_mps: 0.0,
        vy_mps: 0.0,
        omega_rad_per_sec: 0.0,
    };

    #[inline]
    pub const fn new(vx_mps: f64, vy_mps: f64, omega_rad_per_sec: f64) -> Self {
        ChassisSpeeds {
            vx_mps,
            vy_mps,
            omega_rad_per_sec,
        }
    }

    /// 平移速度大小（m/s）
    #[inline]
    pub fn translational_speed(&self) -> f64 {
        self.vx_mps.hypot(self.vy_mps)
    }
}

impl fmt::Display for ChassisSpeeds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChassisSpeeds(vx: {:.3} m/s, vy: {:.3} m/s, omega: {:.3} rad/s)",
            self.vx_mps, self.vy_mps, self.omega_rad_per_sec
        )
    }
}

/// 单个 swerve 模块的目标状态（轮速 + 转向角）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwerveModuleState {
    /// 轮子线速度（m/s）
    pub speed_mps: f64,
    /// 转向角
    pub angle: Rad,
}

impl SwerveModuleState {
    #[inline]
    pub const fn new(speed_mps: f64, angle: Rad) -> Self {
        SwerveModuleState { speed_mps, angle }
    }
}

impl fmt::Display for SwerveModuleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwerveModuleState(speed: {:.3} m/s, angle: {:.2}°)",
            self.speed_mps,
            self.angle.to_degrees()
        )
    }
}
