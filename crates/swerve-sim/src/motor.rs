//! 直流电机模型
//!
//! 三层结构，从无状态到有状态：
//! - [`DcMotor`]: 电机特性曲线（堵转/空载参数推导出 R、Kv、Kt）
//! - [`DcMotorPlant`]: 减速后带动等效惯量的一阶系统，提供纯函数 [`DcMotorPlant::step`]
//! - [`DcMotorSim`]: 持有位置/速度/电压/电流状态的单轴仿真
//!
//! # 物理模型
//!
//! ```text
//! I   = (V - G·ω / Kv) / R
//! τ   = G · Kt · I
//! dω/dt = τ / J = a·ω + b·V
//!
//! a = -G²·Kt / (Kv·R·J)
//! b =  G·Kt / (R·J)
//! ```
//!
//! 其中 `ω` 为输出轴角速度，`G` 为减速比，`J` 为输出轴等效转动惯量。
//! 输入电压在一个步长内保持不变（零阶保持），因此可以精确积分，
//! 与步长大小无关，不会出现显式欧拉法的数值发散。

use swerve_types::{Amps, Rad, RadPerSec, Volts};

/// 直流电机特性
///
/// `count` 台相同电机并联驱动同一轴时，堵转力矩和电流按台数放大，空载转速不变。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DcMotor {
    nominal_voltage: f64,
    stall_torque_nm: f64,
    stall_current_amps: f64,
    free_current_amps: f64,
    free_speed: RadPerSec,
    count: u32,

    resistance_ohms: f64,
    kv_rad_per_sec_per_volt: f64,
    kt_nm_per_amp: f64,
}

impl DcMotor {
    /// 从单台电机的数据手册参数创建
    ///
    /// # 参数
    ///
    /// - `nominal_voltage`: 标定电压（V）
    /// - `stall_torque_nm`: 堵转力矩（N·m）
    /// - `stall_current_amps`: 堵转电流（A）
    /// - `free_current_amps`: 空载电流（A）
    /// - `free_speed`: 空载转速
    /// - `count`: 同轴电机数量
    pub fn new(
        nominal_voltage: f64,
        stall_torque_nm: f64,
        stall_current_amps: f64,
        free_current_amps: f64,
        free_speed: RadPerSec,
        count: u32,
    ) -> Self {
        let n = f64::from(count);
        let stall_torque_nm = stall_torque_nm * n;
        let stall_current_amps = stall_current_amps * n;
        let free_current_amps = free_current_amps * n;

        let resistance_ohms = nominal_voltage / stall_current_amps;
        let kv_rad_per_sec_per_volt =
            free_speed.0 / (nominal_voltage - resistance_ohms * free_current_amps);
        let kt_nm_per_amp = stall_torque_nm / stall_current_amps;

        DcMotor {
            nominal_voltage,
            stall_torque_nm,
            stall_current_amps,
            free_current_amps,
            free_speed,
            count,
            resistance_ohms,
            kv_rad_per_sec_per_volt,
            kt_nm_per_amp,
        }
    }

    /// REV NEO
    pub fn neo(count: u32) -> Self {
        Self::new(12.0, 2.6, 105.0, 1.8, RadPerSec::from_rpm(5676.0), count)
    }

    /// REV NEO 550
    pub fn neo_550(count: u32) -> Self {
        Self::new(12.0, 0.97, 100.0, 1.4, RadPerSec::from_rpm(11000.0), count)
    }

    /// CTRE Falcon 500
    pub fn falcon_500(count: u32) -> Self {
        Self::new(12.0, 4.69, 257.0, 1.5, RadPerSec::from_rpm(6380.0), count)
    }

    /// WCP Kraken X60
    pub fn kraken_x60(count: u32) -> Self {
        Self::new(12.0, 7.09, 366.0, 2.0, RadPerSec::from_rpm(6000.0), count)
    }

    /// 给定电机转速和端电压时的电流
    #[inline]
    pub fn current(&self, speed: RadPerSec, volts: Volts) -> Amps {
        Amps((volts.0 - speed.0 / self.kv_rad_per_sec_per_volt) / self.resistance_ohms)
    }

    /// 给定电流时的电机力矩（N·m）
    #[inline]
    pub fn torque(&self, current: Amps) -> f64 {
        current.0 * self.kt_nm_per_amp
    }

    /// 产生给定力矩和转速所需的电压
    #[inline]
    pub fn voltage(&self, torque_nm: f64, speed: RadPerSec) -> Volts {
        Volts(
            torque_nm / self.kt_nm_per_amp * self.resistance_ohms
                + speed.0 / self.kv_rad_per_sec_per_volt,
        )
    }

    pub fn nominal_voltage(&self) -> f64 {
        self.nominal_voltage
    }

    pub fn stall_torque_nm(&self) -> f64 {
        self.stall_torque_nm
    }

    pub fn stall_current(&self) -> Amps {
        Amps(self.stall_current_amps)
    }

    pub fn free_current(&self) -> Amps {
        Amps(self.free_current_amps)
    }

    /// 空载转速（电机轴）
    pub fn free_speed(&self) -> RadPerSec {
        self.free_speed
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// 绕组等效电阻（Ω）
    pub fn resistance_ohms(&self) -> f64 {
        self.resistance_ohms
    }

    /// 速度常数（rad/s per V）
    pub fn kv(&self) -> f64 {
        self.kv_rad_per_sec_per_volt
    }

    /// 力矩常数（N·m per A）
    pub fn kt(&self) -> f64 {
        self.kt_nm_per_amp
    }
}

/// [`DcMotorPlant::step`] 的结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantStep {
    /// 步末输出轴累积转角
    pub position: Rad,
    /// 步末输出轴角速度
    pub velocity: RadPerSec,
    /// 步末电流（有符号，整组电机）
    pub current: Amps,
}

/// |a| 低于此值时退化为匀加速积分，避免 (e^{a·dt} - 1) / a 的 0/0
const MIN_POLE_MAGNITUDE: f64 = 1e-12;

/// 减速电机 + 等效惯量
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DcMotorPlant {
    motor: DcMotor,
    reduction: f64,
    moi_kg_m2: f64,
    a: f64,
    b: f64,
}

impl DcMotorPlant {
    /// 创建电机负载模型
    ///
    /// `reduction` 与 `moi_kg_m2` 必须为正（由配置校验保证）。
    pub fn new(motor: DcMotor, reduction: f64, moi_kg_m2: f64) -> Self {
        let r = motor.resistance_ohms();
        let a = -reduction * reduction * motor.kt() / (motor.kv() * r * moi_kg_m2);
        let b = reduction * motor.kt() / (r * moi_kg_m2);
        DcMotorPlant {
            motor,
            reduction,
            moi_kg_m2,
            a,
            b,
        }
    }

    pub fn motor(&self) -> &DcMotor {
        &self.motor
    }

    pub fn reduction(&self) -> f64 {
        self.reduction
    }

    pub fn moi_kg_m2(&self) -> f64 {
        self.moi_kg_m2
    }

    /// 输出轴空载转速（数据手册空载转速 / 减速比）
    pub fn free_speed_bound(&self) -> RadPerSec {
        RadPerSec(self.motor.free_speed().0 / self.reduction)
    }

    /// 给定电压下的稳态输出轴速度
    pub fn steady_state_velocity(&self, volts: Volts) -> RadPerSec {
        RadPerSec(-self.b * volts.0 / self.a)
    }

    /// 输出轴速度和电压对应的电流
    #[inline]
    pub fn current(&self, velocity: RadPerSec, volts: Volts) -> Amps {
        self.motor
            .current(RadPerSec(velocity.0 * self.reduction), volts)
    }

    /// 推进 `dt_secs` 秒（纯函数）
    ///
    /// 电压在步长内保持为 `volts`。`dt_secs <= 0` 时状态不变。
    pub fn step(&self, position: Rad, velocity: RadPerSec, volts: Volts, dt_secs: f64) -> PlantStep {
        if dt_secs <= 0.0 {
            return PlantStep {
                position,
                velocity,
                current: self.current(velocity, volts),
            };
        }

        let (new_position, new_velocity) = if self.a.abs() < MIN_POLE_MAGNITUDE {
            let accel = self.b * volts.0;
            (
                position.0 + velocity.0 * dt_secs + 0.5 * accel * dt_secs * dt_secs,
                velocity.0 + accel * dt_secs,
            )
        } else {
            let omega_ss = self.steady_state_velocity(volts).0;
            let decay_m1 = (self.a * dt_secs).exp_m1();
            let deviation = velocity.0 - omega_ss;
            (
                position.0 + omega_ss * dt_secs + deviation * decay_m1 / self.a,
                omega_ss + deviation * (decay_m1 + 1.0),
            )
        };

        let new_velocity = RadPerSec(new_velocity);
        PlantStep {
            position: Rad(new_position),
            velocity: new_velocity,
            current: self.current(new_velocity, volts),
        }
    }
}

/// 单轴电机仿真
///
/// 持有累积转角、角速度、输入电压和电流；输入电压饱和在 ±`max_voltage`。
#[derive(Debug, Clone)]
pub struct DcMotorSim {
    plant: DcMotorPlant,
    max_voltage: f64,
    position: Rad,
    velocity: RadPerSec,
    input: Volts,
    current: Amps,
}

impl DcMotorSim {
    pub fn new(plant: DcMotorPlant, max_voltage: f64) -> Self {
        DcMotorSim {
            plant,
            max_voltage,
            position: Rad::ZERO,
            velocity: RadPerSec::ZERO,
            input: Volts::ZERO,
            current: Amps::ZERO,
        }
    }

    /// 设置输入电压，返回饱和后的实际电压
    pub fn set_input_voltage(&mut self, volts: Volts) -> Volts {
        self.input = volts.clamp_symmetric(self.max_voltage);
        self.input
    }

    /// 推进 `dt_secs` 秒
    pub fn update(&mut self, dt_secs: f64) {
        let step = self
            .plant
            .step(self.position, self.velocity, self.input, dt_secs);
        self.position = step.position;
        self.velocity = step.velocity;
        self.current = step.current;
    }

    /// 重置状态（输入电压保持不变）
    pub fn reset(&mut self, position: Rad, velocity: RadPerSec) {
        self.position = position;
        self.velocity = velocity;
        self.current = self.plant.current(velocity, self.input);
    }

    pub fn plant(&self) -> &DcMotorPlant {
        &self.plant
    }

    /// 输出轴累积转角（不回绕）
    pub fn position(&self) -> Rad {
        self.position
    }

    pub fn velocity(&self) -> RadPerSec {
        self.velocity
    }

    pub fn input_voltage(&self) -> Volts {
        self.input
    }

    /// 有符号电流
    pub fn current_draw(&self) -> Amps {
        self.current
    }

    /// 电流大小（只有幅值可观测）
    pub fn current_draw_magnitude(&self) -> Amps {
        self.current.abs()
    }
}
