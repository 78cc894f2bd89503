//! Long-running stress test for the Marquee carousel.
//!
//! Runs thousands of create/navigate/tick/dispose cycles on a virtual clock,
//! checking after every cycle that the index stayed in range, that at most one
//! autoplay wakeup was ever pending, and that nothing is left scheduled once
//! the carousel is gone.
//!
//! Usage:
//!   cargo run --bin stress_test -- [--cycles N]

use marquee_core::{Carousel, CarouselConfig, VirtualClock};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

struct Timings {
    navigate: Duration,
    ticks: Duration,
    teardown: Duration,
}

fn run_cycle(cycle: usize, rng: &mut StdRng, timings: &mut Timings) -> Result<usize, String> {
    let clock = VirtualClock::new();
    let len: usize = rng.random_range(0..12);
    let interval: u64 = rng.random_range(50..5050);
    let mut carousel = Carousel::new(
        (0..len).collect::<Vec<_>>(),
        CarouselConfig::from_millis(rng.random_bool(0.5), interval),
        clock.timer(),
    )
    .map_err(|e| format!("cycle {cycle}: CREATE FAILED: {e}"))?;

    let mut advances = 0;
    for step in 0..200 {
        let t0 = Instant::now();
        match rng.random_range(0..8) {
            0 => carousel.next(),
            1 => carousel.previous(),
            2 => {
                let target = rng.random_range(0..=len);
                match carousel.go_to(target) {
                    Ok(()) => {}
                    Err(_) if target >= len => {}
                    Err(e) => return Err(format!("cycle {cycle} step {step}: GOTO FAILED: {e}")),
                }
            }
            3 => carousel.play(),
            4 => carousel.pause(),
            5 => carousel.toggle(),
            _ => {
                clock.advance_ms(rng.random_range(0..interval * 3));
                let t1 = Instant::now();
                advances += carousel.run_due();
                timings.ticks += t1.elapsed();
            }
        }
        timings.navigate += t0.elapsed();

        if len > 0 && carousel.index() >= len {
            return Err(format!(
                "cycle {cycle} step {step}: INDEX ESCAPED: {} of {len}",
                carousel.index()
            ));
        }
        if clock.pending() > 1 {
            return Err(format!(
                "cycle {cycle} step {step}: TIMER LEAK: {} pending",
                clock.pending()
            ));
        }
    }

    let t0 = Instant::now();
    if rng.random_bool(0.5) {
        carousel.dispose();
    }
    drop(carousel);
    timings.teardown += t0.elapsed();

    if clock.pending() != 0 {
        return Err(format!(
            "cycle {cycle}: TIMER LEAK AFTER TEARDOWN: {} pending",
            clock.pending()
        ));
    }
    Ok(advances)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let cycles: usize = args
        .iter()
        .position(|a| a == "--cycles")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
        .unwrap_or(5000);

    println!("Marquee stress test: {cycles} cycles");
    println!("============================================");

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut timings = Timings {
        navigate: Duration::ZERO,
        ticks: Duration::ZERO,
        teardown: Duration::ZERO,
    };
    let mut failures = 0u64;
    let mut advances = 0usize;

    for cycle in 1..=cycles {
        match run_cycle(cycle, &mut rng, &mut timings) {
            Ok(n) => advances += n,
            Err(e) => {
                eprintln!("  {e}");
                failures += 1;
            }
        }
        if cycle.is_multiple_of(1000) {
            println!("  cycle {cycle}: {advances} autoplay advances so far");
        }
    }

    println!();
    println!("============================================");
    println!("Results: {cycles} cycles, {failures} failures, {advances} advances");
    println!(
        "  operations: {:.3}s total",
        timings.navigate.as_secs_f64()
    );
    println!("  run_due:    {:.3}s total", timings.ticks.as_secs_f64());
    println!("  teardown:   {:.3}s total", timings.teardown.as_secs_f64());

    if failures > 0 {
        eprintln!("\nSTRESS TEST FAILED");
        std::process::exit(1);
    } else {
        println!("\nSTRESS TEST PASSED");
    }
}
