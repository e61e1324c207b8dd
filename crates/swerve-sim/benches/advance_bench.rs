//! 仿真步进性能基准测试
//!
//! 控制周期 20ms，单模块一次 advance + read_telemetry 应远低于微秒级。

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;
use swerve_sim::{DcMotor, DcMotorPlant, ModuleConstants, ModuleIo, ModuleIoSim};
use swerve_types::{Rad, RadPerSec, Volts};

fn bench_plant_step(c: &mut Criterion) {
    let plant = DcMotorPlant::new(DcMotor::neo(1), 6.75, 0.025);
    c.bench_function("plant_step", |b| {
        b.iter(|| {
            plant.step(
                black_box(Rad(1.0)),
                black_box(RadPerSec(20.0)),
                black_box(Volts(6.0)),
                black_box(0.02),
            )
        })
    });
}

fn bench_module_cycle(c: &mut Criterion) {
    let constants = ModuleConstants::default();
    let mut module = ModuleIoSim::new(&constants, Rad(0.3)).expect("default constants are valid");
    let dt = Duration::from_millis(20);

    c.bench_function("module_cycle", |b| {
        b.iter(|| {
            module.set_drive_voltage(black_box(Volts(6.0)));
            module.set_turn_voltage(black_box(Volts(-1.5)));
            black_box(module.update(dt))
        })
    });

    let substep_constants = ModuleConstants {
        odometry_substeps: 5,
        ..Default::default()
    };
    let mut module =
        ModuleIoSim::new(&substep_constants, Rad(0.3)).expect("default constants are valid");
    c.bench_function("module_cycle_5_substeps", |b| {
        b.iter(|| {
            module.set_drive_voltage(black_box(Volts(6.0)));
            black_box(module.update(dt))
        })
    });
}

criterion_group!(benches, bench_plant_step, bench_module_cycle);
criterion_main!(benches);
