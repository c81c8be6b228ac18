//! Compares allocating steps against the double-buffered variant

use anyhow::Result;
use life_board::game_of_life::{patterns, Grid, LifeRules};
use std::time::{Duration, Instant};

const GENERATIONS: usize = 200;

fn time_allocating(start: &Grid) -> (Duration, Grid) {
    let begin = Instant::now();
    let mut grid = start.clone();
    for _ in 0..GENERATIONS {
        grid = LifeRules::step(&grid);
    }
    (begin.elapsed(), grid)
}

fn time_double_buffered(start: &Grid) -> Result<(Duration, Grid)> {
    let begin = Instant::now();
    let mut current = start.clone();
    let mut next = start.clone();
    for _ in 0..GENERATIONS {
        LifeRules::step_into(&current, &mut next)?;
        std::mem::swap(&mut current, &mut next);
    }
    Ok((begin.elapsed(), current))
}

fn main() -> Result<()> {
    println!("{:>10} | {:>12} | {:>12} | {:>8}", "Board", "step", "step_into", "Living");
    println!("{}", "-".repeat(52));

    for size in [19, 64, 256, 512] {
        let start = patterns::named("r-pentomino", size, size)?;
        let (allocating, a) = time_allocating(&start);
        let (buffered, b) = time_double_buffered(&start)?;
        anyhow::ensure!(a == b, "the two variants disagree on a {}x{} board", size, size);

        println!(
            "{:>10} | {:>10.3}ms | {:>10.3}ms | {:>8}",
            format!("{}x{}", size, size),
            allocating.as_secs_f64() * 1000.0,
            buffered.as_secs_f64() * 1000.0,
            a.living_count()
        );
    }

    Ok(())
}
