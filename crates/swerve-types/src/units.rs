//! 强类型单位系统
//!
//! 使用 NewType 模式区分角度、角速度、电压和电流，防止在仿真循环中混用。
//!
//! # 示例
//!
//! ```rust
//! use swerve_types::units::{Rad, RadPerSec, Volts};
//!
//! let heading = Rad(3.0 * std::f64::consts::PI).wrap();
//! assert!((heading.0.abs() - std::f64::consts::PI).abs() < 1e-9);
//!
//! let volts = Volts(15.0).clamp_symmetric(12.0);
//! assert_eq!(volts, Volts(12.0));
//!
//! let omega = RadPerSec(2.0);
//! assert_eq!(omega * 0.5, RadPerSec(1.0));
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// 为单位类型生成通用方法和运算符重载
macro_rules! unit_newtype {
    ($name:ident, $suffix:literal, $precision:literal) => {
        impl $name {
            /// 零值常量
            pub const ZERO: Self = $name(0.0);

            #[inline]
            pub const fn new(value: f64) -> Self {
                $name(value)
            }

            /// 获取原始值
            #[inline]
            pub fn value(self) -> f64 {
                self.0
            }

            /// 取绝对值
            #[inline]
            pub fn abs(self) -> Self {
                $name(self.0.abs())
            }

            /// 是否为有限值（非 NaN / 非无穷）
            #[inline]
            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!("{:.", $precision, "} ", $suffix), self.0)
            }
        }

        impl Add for $name {
            type Output = Self;
            #[inline]
            fn add(self, rhs: Self) -> Self {
                $name(self.0 + rhs.0)
            }
        }

        impl Sub for $name {
            type Output = Self;
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                $name(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $name {
            type Output = Self;
            #[inline]
            fn mul(self, rhs: f64) -> Self {
                $name(self.0 * rhs)
            }
        }

        impl Div<f64> for $name {
            type Output = Self;
            #[inline]
            fn div(self, rhs: f64) -> Self {
                $name(self.0 / rhs)
            }
        }

        impl Neg for $name {
            type Output = Self;
            #[inline]
            fn neg(self) -> Self {
                $name(-self.0)
            }
        }

        impl AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                self.0 -= rhs.0;
            }
        }
    };
}

/// 弧度（NewType）
///
/// 既用于累积转角（不回绕），也用于经 [`Rad::wrap`] 规范化后的朝向。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rad(pub f64);

unit_newtype!(Rad, "rad", "4");

impl Rad {
    /// π 弧度（180度）
    pub const PI: Self = Rad(std::f64::consts::PI);

    /// 2π 弧度（360度）
    pub const TAU: Self = Rad(std::f64::consts::TAU);

    #[inline]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    #[inline]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    /// 转换为角度值
    #[inline]
    pub fn to_degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// 规范化为旋转角，范围 [-π, π]
    ///
    /// 与平面旋转（cos, sin）表示等价：先投影到单位圆，再用 `atan2` 取角。
    pub fn wrap(self) -> Self {
        Rad(self.0.sin().atan2(self.0.cos()))
    }

    /// 规范化为 [0, 2π) 范围
    pub fn wrap_positive(self) -> Self {
        let angle = self.0.rem_euclid(std::f64::consts::TAU);
        // rem_euclid 在极小负数上可能返回 TAU 本身
        if angle >= std::f64::consts::TAU {
            Rad(0.0)
        } else {
            Rad(angle)
        }
    }

    /// 两个角度之间的最短有符号差值，范围 [-π, π]
    pub fn shortest_distance(self, other: Rad) -> Rad {
        (other - self).wrap()
    }
}

/// 弧度每秒（角速度）
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadPerSec(pub f64);

unit_newtype!(RadPerSec, "rad/s", "4");

impl RadPerSec {
    /// 从每分钟转数（RPM）创建
    #[inline]
    pub fn from_rpm(rpm: f64) -> Self {
        RadPerSec(rpm * std::f64::consts::TAU / 60.0)
    }

    /// 转换为每分钟转数（RPM）
    #[inline]
    pub fn to_rpm(self) -> f64 {
        self.0 * 60.0 / std::f64::consts::TAU
    }

    /// 以该角速度持续 `dt_secs` 秒产生的转角
    #[inline]
    pub fn integrate(self, dt_secs: f64) -> Rad {
        Rad(self.0 * dt_secs)
    }
}

/// 伏特（电压）
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Volts(pub f64);

unit_newtype!(Volts, "V", "3");

impl Volts {
    /// 限制到 [-limit, +limit]（饱和，而非报错）
    ///
    /// NaN 输入视为 0 V，保证执行器永远收到有限电压。
    #[inline]
    pub fn clamp_symmetric(self, limit: f64) -> Self {
        if self.0.is_nan() {
            return Volts::ZERO;
        }
        Volts(self.0.clamp(-limit, limit))
    }
}

/// 安培（电流）
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Amps(pub f64);

unit_newtype!(Amps, "A", "3");

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_rad_operations() {
        let r1 = Rad(1.0);
        let r2 = Rad(2.0);

        assert_eq!(r1 + r2, Rad(3.0));
        assert_eq!(r2 - r1, Rad(1.0));
        assert_eq!(r1 * 2.0, Rad(2.0));
        assert_eq!(r2 / 2.0, Rad(1.0));
        assert_eq!(-r1, Rad(-1.0));
    }

    #[test]
    fn test_rad_wrap() {
        assert_eq!(Rad(0.0).wrap(), Rad(0.0));
        assert!((Rad(FRAC_PI_2).wrap().0 - FRAC_PI_2).abs() < 1e-12);
        // 3π/2 ≡ -π/2
        assert!((Rad(1.5 * PI).wrap().0 + FRAC_PI_2).abs() < 1e-12);
        // 多圈累积
        assert!((Rad(10.0 * TAU + 0.25).wrap().0 - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_rad_wrap_positive() {
        assert_eq!(Rad(0.0).wrap_positive(), Rad(0.0));
        assert!((Rad(-FRAC_PI_2).wrap_positive().0 - 1.5 * PI).abs() < 1e-12);
        assert!(Rad(TAU).wrap_positive().0 < TAU);
        assert!(Rad(-1e-18).wrap_positive().0 < TAU);
    }

    #[test]
    fn test_shortest_distance() {
        let a = Rad(PI - 0.1);
        let b = Rad(-PI + 0.1);
        assert!((a.shortest_distance(b).0 - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_rpm_conversion() {
        let omega = RadPerSec::from_rpm(60.0);
        assert!((omega.0 - TAU).abs() < 1e-12);
        assert!((omega.to_rpm() - 60.0).abs() < 1e-9);
        assert_eq!(RadPerSec(2.0).integrate(0.5), Rad(1.0));
    }

    #[test]
    fn test_volts_clamp() {
        assert_eq!(Volts(20.0).clamp_symmetric(12.0), Volts(12.0));
        assert_eq!(Volts(-20.0).clamp_symmetric(12.0), Volts(-12.0));
        assert_eq!(Volts(3.5).clamp_symmetric(12.0), Volts(3.5));
        assert_eq!(Volts(f64::NAN).clamp_symmetric(12.0), Volts::ZERO);
        assert_eq!(Volts(f64::INFINITY).clamp_symmetric(12.0), Volts(12.0));
        assert_eq!(Volts(f64::NEG_INFINITY).clamp_symmetric(12.0), Volts(-12.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Rad(FRAC_PI_2)), "1.5708 rad");
        assert_eq!(format!("{}", RadPerSec(1.0)), "1.0000 rad/s");
        assert_eq!(format!("{}", Volts(12.0)), "12.000 V");
        assert_eq!(format!("{}", Amps(1.5)), "1.500 A");
    }

    #[test]
    fn test_assign_operators() {
        let mut rad = Rad(1.0);
        rad += Rad(2.0);
        assert_eq!(rad, Rad(3.0));

        rad -= Rad(1.0);
        assert_eq!(rad, Rad(2.0));
    }
}
