//! # 模块物理仿真
//!
//! 两个独立的减速直流电机模型：驱动轴带动车轮，转向轴带动舵向。
//! 不模拟轮胎打滑、温度和模块间耦合，每个模块各自仿真。
//!
//! 转向轴的绝对编码器在构造时带有 [0, 2π) 内的初始偏置，代表尚未校准的安装角；
//! 偏置由调用方显式给出（固定值或随机种子），测试可以完全复现。
//!
//! # 示例
//!
//! ```rust
//! use std::time::Duration;
//! use swerve_sim::{ModuleConstants, ModuleIo, ModuleIoSim};
//! use swerve_types::Volts;
//!
//! let constants = ModuleConstants::default();
//! let mut module = ModuleIoSim::with_seed(&constants, 42).unwrap();
//!
//! module.set_drive_voltage(Volts(6.0));
//! let telemetry = module.update(Duration::from_millis(20));
//! assert!(telemetry.drive_velocity.0 > 0.0);
//! assert_eq!(telemetry.odometry.len(), 1);
//! ```

use crate::config::{AxisConstants, ModuleConstants};
use crate::error::ConfigError;
use crate::io::{ModuleIo, ModuleTelemetry, OdometrySample, OdometrySamples};
use crate::motor::{DcMotorPlant, DcMotorSim};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use std::time::Duration;
use swerve_types::{Rad, Volts};
use tracing::{debug, trace, warn};

/// 仿真实现的模块 IO
#[derive(Debug, Clone)]
pub struct ModuleIoSim {
    drive: DcMotorSim,
    turn: DcMotorSim,

    /// 转向绝对编码器初始偏置，[0, 2π)
    turn_offset: Rad,

    odometry_substeps: u32,

    /// 仿真时间（秒），每次 advance 累加 dt
    sim_time_secs: f64,

    /// 最近一次 advance 产生的里程计采样
    odometry: OdometrySamples,
}

impl ModuleIoSim {
    /// 使用固定的转向初始偏置创建
    ///
    /// `turn_offset` 会被规范化到 [0, 2π)。
    pub fn new(constants: &ModuleConstants, turn_offset: Rad) -> Result<Self, ConfigError> {
        constants.validate()?;

        let turn_offset = turn_offset.wrap_positive();
        debug!(
            turn_offset_rad = turn_offset.0,
            drive_reduction = constants.drive.reduction,
            turn_reduction = constants.turn.reduction,
            substeps = constants.odometry_substeps,
            "Created simulated swerve module"
        );

        Ok(ModuleIoSim {
            drive: build_axis(&constants.drive, constants.max_voltage),
            turn: build_axis(&constants.turn, constants.max_voltage),
            turn_offset,
            odometry_substeps: constants.odometry_substeps,
            sim_time_secs: 0.0,
            odometry: OdometrySamples::new(),
        })
    }

    /// 由随机种子生成转向初始偏置（可复现）
    pub fn with_seed(constants: &ModuleConstants, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::with_rng(constants, &mut rng)
    }

    /// 从给定随机源抽取转向初始偏置
    pub fn with_rng<R: Rng>(
        constants: &ModuleConstants,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let offset = Rad(rng.gen_range(0.0..TAU));
        Self::new(constants, offset)
    }

    /// 使用系统熵生成转向初始偏置（不可复现）
    pub fn from_entropy(constants: &ModuleConstants) -> Result<Self, ConfigError> {
        Self::with_rng(constants, &mut rand::thread_rng())
    }

    /// 转向绝对编码器初始偏置
    pub fn turn_offset(&self) -> Rad {
        self.turn_offset
    }

    /// 仿真时间（超出 `Duration` 范围时饱和）
    pub fn sim_time(&self) -> Duration {
        Duration::try_from_secs_f64(self.sim_time_secs).unwrap_or(Duration::MAX)
    }

    pub fn drive_sim(&self) -> &DcMotorSim {
        &self.drive
    }

    pub fn turn_sim(&self) -> &DcMotorSim {
        &self.turn
    }

    fn record_odometry(&mut self, timestamp_secs: f64) {
        self.odometry.push(OdometrySample {
            timestamp_secs,
            drive_position: self.drive.position(),
            turn_position: self.turn.position(),
        });
    }
}

fn build_axis(axis: &AxisConstants, max_voltage: f64) -> DcMotorSim {
    let plant = DcMotorPlant::new(axis.motor.to_motor(), axis.reduction, axis.moi_kg_m2);
    DcMotorSim::new(plant, max_voltage)
}

impl ModuleIo for ModuleIoSim {
    fn set_drive_voltage(&mut self, volts: Volts) {
        let applied = self.drive.set_input_voltage(volts);
        if applied != volts {
            trace!(requested = volts.0, applied = applied.0, "Drive voltage saturated");
        }
    }

    fn set_turn_voltage(&mut self, volts: Volts) {
        let applied = self.turn.set_input_voltage(volts);
        if applied != volts {
            trace!(requested = volts.0, applied = applied.0, "Turn voltage saturated");
        }
    }

    fn advance(&mut self, dt: Duration) {
        self.odometry.clear();

        if dt.is_zero() {
            warn!("Swerve module sim advanced with zero dt, state unchanged");
            self.record_odometry(self.sim_time_secs);
            return;
        }

        let dt_secs = dt.as_secs_f64();
        let substeps = self.odometry_substeps.max(1);
        let step_secs = dt_secs / f64::from(substeps);

        for i in 1..=substeps {
            self.drive.update(step_secs);
            self.turn.update(step_secs);
            let timestamp = if i == substeps {
                self.sim_time_secs + dt_secs
            } else {
                self.sim_time_secs + step_secs * f64::from(i)
            };
            self.record_odometry(timestamp);
        }

        self.sim_time_secs += dt_secs;
    }

    fn read_telemetry(&self) -> ModuleTelemetry {
        let turn_position = self.turn.position();
        ModuleTelemetry {
            drive_position: self.drive.position(),
            drive_velocity: self.drive.velocity(),
            drive_applied_volts: self.drive.input_voltage(),
            drive_current: self.drive.current_draw_magnitude(),

            turn_absolute_position: (turn_position + self.turn_offset).wrap(),
            turn_position,
            turn_velocity: self.turn.velocity(),
            turn_applied_volts: self.turn.input_voltage(),
            turn_current: self.turn.current_draw_magnitude(),

            odometry: self.odometry.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use swerve_types::RadPerSec;

    const DT: Duration = Duration::from_millis(20);

    fn sim(offset: f64) -> ModuleIoSim {
        ModuleIoSim::new(&ModuleConstants::default(), Rad(offset)).unwrap()
    }

    #[test]
    fn test_voltage_clamped_on_readback() {
        let mut module = sim(0.0);
        module.set_drive_voltage(Volts(18.0));
        module.set_turn_voltage(Volts(-100.0));
        let telemetry = module.update(DT);
        assert_eq!(telemetry.drive_applied_volts, Volts(12.0));
        assert_eq!(telemetry.turn_applied_volts, Volts(-12.0));
    }

    #[test]
    fn test_custom_voltage_envelope() {
        let constants = ModuleConstants {
            max_voltage: 10.0,
            ..Default::default()
        };
        let mut module = ModuleIoSim::new(&constants, Rad::ZERO).unwrap();
        module.set_drive_voltage(Volts(11.0));
        assert_eq!(module.read_telemetry().drive_applied_volts, Volts(10.0));
    }

    #[test]
    fn test_no_spontaneous_motion() {
        let mut module = sim(1.0);
        for _ in 0..500 {
            module.advance(DT);
        }
        let telemetry = module.read_telemetry();
        assert_eq!(telemetry.drive_position, Rad::ZERO);
        assert_eq!(telemetry.drive_velocity, RadPerSec::ZERO);
        assert_eq!(telemetry.turn_position, Rad::ZERO);
        assert_eq!(telemetry.turn_velocity, RadPerSec::ZERO);
        assert_eq!(telemetry.drive_current.0, 0.0);
    }

    #[test]
    fn test_drive_scenario_neo_six_volts() {
        let mut module = sim(0.0);
        module.set_drive_voltage(Volts(6.0));
        let telemetry = module.update(DT);

        let bound = module.drive_sim().plant().free_speed_bound();
        let v = telemetry.drive_velocity.0;
        assert!(v.is_finite());
        assert!(v > 0.0);
        assert!(v < bound.0);
        assert!(telemetry.drive_current.0.is_finite());
        assert!(telemetry.drive_current.0 >= 0.0);
        // 转向轴未受指令
        assert_eq!(telemetry.turn_velocity, RadPerSec::ZERO);
    }

    #[test]
    fn test_turn_absolute_includes_offset() {
        let mut module = sim(2.0);
        module.set_turn_voltage(Volts(4.0));
        for _ in 0..50 {
            let telemetry = module.update(DT);
            let expected = (telemetry.turn_position + Rad(2.0)).wrap();
            assert_eq!(telemetry.turn_absolute_position, expected);
            let diff = telemetry
                .turn_absolute_position
                .shortest_distance(telemetry.turn_position + Rad(2.0));
            assert!(diff.0.abs() < 1e-9);
        }
        // 相对位置不回绕
        assert!(module.read_telemetry().turn_position.0 > TAU);
    }

    #[test]
    fn test_offset_normalized() {
        assert_relative_eq!(sim(-1.0).turn_offset().0, TAU - 1.0, epsilon = 1e-12);
        assert_relative_eq!(sim(TAU + 0.5).turn_offset().0, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_seeded_offset_reproducible() {
        let constants = ModuleConstants::default();
        let a = ModuleIoSim::with_seed(&constants, 7).unwrap();
        let b = ModuleIoSim::with_seed(&constants, 7).unwrap();
        assert_eq!(a.turn_offset(), b.turn_offset());
        assert!((0.0..TAU).contains(&a.turn_offset().0));

        let random = ModuleIoSim::from_entropy(&constants).unwrap();
        assert!((0.0..TAU).contains(&random.turn_offset().0));
    }

    #[test]
    fn test_single_odometry_sample_per_cycle() {
        let mut module = sim(0.0);
        assert!(module.read_telemetry().odometry.is_empty());

        module.set_drive_voltage(Volts(3.0));
        for cycle in 1..=3 {
            let telemetry = module.update(DT);
            assert_eq!(telemetry.odometry.len(), 1);
            let sample = telemetry.odometry[0];
            assert_relative_eq!(sample.timestamp_secs, 0.02 * f64::from(cycle), epsilon = 1e-12);
            assert_eq!(sample.drive_position, telemetry.drive_position);
            assert_eq!(sample.turn_position, telemetry.turn_position);
        }
        assert_eq!(module.sim_time(), Duration::from_millis(60));
    }

    #[test]
    fn test_sim_time_saturates() {
        let mut module = sim(0.0);
        module.advance(Duration::MAX);
        module.advance(Duration::MAX);
        assert_eq!(module.sim_time(), Duration::MAX);
        assert!(module.read_telemetry().drive_position.is_finite());
    }

    #[test]
    fn test_substeps_record_one_sample_each() {
        let constants = ModuleConstants {
            odometry_substeps: 4,
            ..Default::default()
        };
        let mut sub = ModuleIoSim::new(&constants, Rad::ZERO).unwrap();
        let mut whole = sim(0.0);

        for module in [&mut sub, &mut whole] {
            module.set_drive_voltage(Volts(8.0));
            module.set_turn_voltage(Volts(-2.0));
        }
        let sub_t = sub.update(DT);
        let whole_t = whole.update(DT);

        assert_eq!(sub_t.odometry.len(), 4);
        let stamps: Vec<f64> = sub_t.odometry.iter().map(|s| s.timestamp_secs).collect();
        assert!(stamps.windows(2).all(|w| w[0] < w[1]));
        assert_relative_eq!(stamps[0], 0.005, epsilon = 1e-12);
        assert_eq!(stamps[3], 0.02);

        let drive: Vec<f64> = sub_t.odometry.iter().map(|s| s.drive_position.0).collect();
        assert!(drive.windows(2).all(|w| w[0] < w[1]));

        // 闭式积分：子步结果与整步一致
        assert_relative_eq!(sub_t.drive_position.0, whole_t.drive_position.0, epsilon = 1e-9);
        assert_relative_eq!(sub_t.turn_velocity.0, whole_t.turn_velocity.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_dt_keeps_state() {
        let mut module = sim(0.0);
        module.set_drive_voltage(Volts(6.0));
        let before = module.update(DT);
        let after = module.update(Duration::ZERO);
        assert_eq!(before.drive_position, after.drive_position);
        assert_eq!(before.drive_velocity, after.drive_velocity);
        assert_eq!(after.odometry.len(), 1);
        assert_eq!(after.odometry[0].timestamp_secs, 0.02);
    }

    #[test]
    fn test_invalid_constants_rejected() {
        let constants = ModuleConstants {
            loop_period_secs: -0.02,
            ..Default::default()
        };
        assert!(ModuleIoSim::new(&constants, Rad::ZERO).is_err());
    }
}
