//! Swerve 设定点
//!
//! [`SwerveSetpoint`] 把期望的底盘速度和由它分解出的各模块目标状态绑定在一起，
//! 由运动学/优化层在每个规划周期构造一次，再只读地交给各模块控制器。
//!
//! # 约定
//!
//! - **不可变**：字段私有，只能通过访问器读取；新周期用新实例替换旧实例
//! - **保持顺序**：模块状态的下标顺序与构造时完全一致，下游按位置匹配模块
//! - **不校验**：速度/角度是否可行由运动学层负责，本类型不做检查
//!
//! # 示例
//!
//! ```rust
//! use swerve_types::{ChassisSpeeds, SwerveModuleState, SwerveSetpoint, Rad};
//!
//! let setpoint = SwerveSetpoint::new(
//!     ChassisSpeeds::new(1.0, 0.0, 0.0),
//!     [SwerveModuleState::new(1.0, Rad::ZERO); 4],
//! );
//! assert_eq!(setpoint.module_count(), 4);
//! assert_eq!(setpoint.module(0).map(|s| s.speed_mps), Some(1.0));
//! ```

use crate::kinematics::{ChassisSpeeds, SwerveModuleState};
use smallvec::SmallVec;

/// 模块状态存储（四模块机器人不分配堆内存）
pub type ModuleStates = SmallVec<[SwerveModuleState; 4]>;

/// 底盘速度 + 各模块目标状态
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwerveSetpoint {
    chassis_speeds: ChassisSpeeds,
    module_states: ModuleStates,
}

impl SwerveSetpoint {
    /// 创建设定点
    ///
    /// `module_states` 按机器人模块编号顺序给出，原样保存。
    pub fn new<I>(chassis_speeds: ChassisSpeeds, module_states: I) -> Self
    where
        I: IntoIterator<Item = SwerveModuleState>,
    {
        SwerveSetpoint {
            chassis_speeds,
            module_states: module_states.into_iter().collect(),
        }
    }

    /// 期望底盘速度
    #[inline]
    pub fn chassis_speeds(&self) -> ChassisSpeeds {
        self.chassis_speeds
    }

    /// 全部模块目标状态（按模块编号顺序）
    #[inline]
    pub fn module_states(&self) -> &[SwerveModuleState] {
        &self.module_states
    }

    #[inline]
    pub fn module_count(&self) -> usize {
        self.module_states.len()
    }

    /// 第 `index` 个模块的目标状态，越界返回 `None`
    #[inline]
    pub fn module(&self, index: usize) -> Option<&SwerveModuleState> {
        self.module_states.get(index)
    }

    /// 拆分为组成部分
    pub fn into_parts(self) -> (ChassisSpeeds, ModuleStates) {
        (self.chassis_speeds, self.module_states)
    }
}
