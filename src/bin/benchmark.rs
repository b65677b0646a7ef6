//! Step benchmark comparing the serial and parallel mark phase

use std::time::Instant;

use anyhow::Result;
use conway_life::{seed, StepStrategy};
use rand::SeedableRng;
use rand::rngs::StdRng;

const BENCH_SEED: u64 = 0x5eed_11fe;

/// Average milliseconds per step
fn benchmark(size: usize, iterations: u32, strategy: StepStrategy) -> Result<f64> {
    let mut board = seed(size, size, &mut StdRng::seed_from_u64(BENCH_SEED))?;

    let start = Instant::now();
    for _ in 0..iterations {
        board.step(strategy);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<()> {
    println!("=== Game of Life Step Benchmark ===\n");
    for strategy in StepStrategy::all() {
        println!("{:>10}: {}", strategy.name(), strategy.description());
    }
    println!();

    let sizes = [64, 256, 512, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, iterations, StepStrategy::Serial)?;
        let parallel_ms = benchmark(size, iterations, StepStrategy::Parallel)?;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 2000;
    let cells = size * size;
    let parallel_ms = benchmark(size, iterations, StepStrategy::Parallel)?;
    println!(
        "\nParallel at {size}x{size}: {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );

    Ok(())
}
