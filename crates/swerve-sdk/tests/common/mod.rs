//! 测试辅助函数

#![allow(dead_code)]

use std::time::Duration;
use swerve_sdk::prelude::*;

/// 标准控制周期
pub const DT: Duration = Duration::from_millis(20);

/// 默认常量、固定偏置的仿真模块
pub fn sim_module(turn_offset: f64) -> ModuleIoSim {
    ModuleIoSim::new(&ModuleConstants::default(), Rad(turn_offset))
        .expect("default constants are valid")
}

/// 四模块仿真后端（种子依次为 0..4）
pub fn four_sim_backends(constants: &ModuleConstants) -> Vec<ModuleBackend> {
    (0..4)
        .map(|seed| {
            ModuleBackend::from(
                ModuleIoSim::with_seed(constants, seed).expect("default constants are valid"),
            )
        })
        .collect()
}

/// 两个角度在圆周上的距离
pub fn angular_distance(a: Rad, b: Rad) -> f64 {
    a.shortest_distance(b).0.abs()
}
