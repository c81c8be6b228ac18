//! Plays a glider for a few seconds, pausing and resuming half way
//!
//! The driver advances the board on its own thread; this thread only
//! receives finished generations and prints them.

use anyhow::Result;
use life_board::{
    animation::{GenerationsPerMinute, LifeSession},
    game_of_life::patterns,
    utils::GridFormatter,
};
use std::time::Duration;

fn main() -> Result<()> {
    let mut session = LifeSession::new(patterns::named("glider", 12, 12)?);
    let pace = GenerationsPerMinute::new(240)?;

    for leg in 1..=2 {
        println!("=== Leg {} ({}) ===", leg, pace);
        let driver = session.start(pace)?;

        for _ in 0..6 {
            let Some(frame) = driver.recv_timeout(Duration::from_secs(2)) else {
                break;
            };
            println!("{}", GridFormatter::format_frame(frame.generation, &frame.grid));
            session.accept(frame);
        }

        session.stop(driver)?;
        println!("Paused at generation {}\n", session.generation());
    }

    session.reset();
    println!(
        "After reset:\n{}",
        GridFormatter::format_frame(session.generation(), session.current())
    );
    Ok(())
}
