/// Simple custom benchmarking without criterion
use std::time::Instant;

use gasbox2d::{ConfigUpdate, SimParams, SimulationState, SpawnPattern};

fn time_it<F: FnMut()>(name: &str, iterations: usize, mut f: F) {
    // Warmup
    for _ in 0..5 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();

    let avg_ms = elapsed.as_secs_f64() * 1000.0 / iterations as f64;
    println!("{}: {:.3}ms avg ({} iterations)", name, avg_ms, iterations);
}

fn create_state(count: usize) -> SimulationState {
    let params = SimParams::default().with_spawn_pattern(SpawnPattern::Uniform);
    let mut state = SimulationState::with_seed(params, 1);
    state.configure(ConfigUpdate::new().strength_threshold(1e9));
    if let Err(err) = state.add_particles(count) {
        panic!("failed to populate benchmark state: {err}");
    }
    state
}

fn main() {
    println!("\n=== Gas Box Benchmarks ===\n");

    println!("--- Idle step (collisions + containment) ---");
    for &count in &[100, 500, 1000, 2000] {
        let mut state = create_state(count);
        time_it(&format!("step (n={})", count), 50, || {
            if let Err(err) = state.step(1.0) {
                panic!("step failed: {err}");
            }
        });
    }

    println!("\n--- Rupture ---");
    for &count in &[100, 1000] {
        time_it(&format!("explode (n={})", count), 10, || {
            let mut state = create_state(count);
            if let Err(err) = state.explode() {
                panic!("explode failed: {err}");
            }
        });
    }

    println!("\n=== Benchmark Complete ===\n");
}
