//! Background generation advancement

use super::pace::GenerationsPerMinute;
use super::task::RepeatingTask;
use crate::error::LifeError;
use crate::game_of_life::{Grid, LifeRules};
use std::ops::ControlFlow;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

/// One generation handed from the worker to the owner of the display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub generation: u64,
    pub grid: Grid,
}

struct DriverState {
    current: Grid,
    buffer: Grid,
    generation: u64,
    frames: Sender<Frame>,
}

impl DriverState {
    fn advance(&mut self) -> ControlFlow<()> {
        if LifeRules::step_into(&self.current, &mut self.buffer).is_err() {
            return ControlFlow::Break(());
        }
        std::mem::swap(&mut self.current, &mut self.buffer);
        self.generation += 1;

        let frame = Frame {
            generation: self.generation,
            grid: self.current.clone(),
        };
        match self.frames.send(frame) {
            Ok(()) => ControlFlow::Continue(()),
            // Nobody is watching any more
            Err(_) => ControlFlow::Break(()),
        }
    }
}

/// Steps a grid on a background thread at a fixed pace.
///
/// Every new generation is sent back over a channel; the owner drains it
/// with [`recv`](Self::recv) or [`recv_timeout`](Self::recv_timeout) on the
/// thread that renders.
pub struct AnimationDriver {
    task: RepeatingTask<DriverState>,
    frames: Receiver<Frame>,
    pace: GenerationsPerMinute,
}

impl AnimationDriver {
    pub fn start(grid: Grid, pace: GenerationsPerMinute) -> Self {
        Self::start_at(grid, 0, pace)
    }

    /// Start from `grid`, numbering the frames after `generation`
    pub fn start_at(grid: Grid, generation: u64, pace: GenerationsPerMinute) -> Self {
        let (sender, frames) = mpsc::channel();
        let state = DriverState {
            buffer: grid.clone(),
            current: grid,
            generation,
            frames: sender,
        };
        let task = RepeatingTask::spawn(pace.interval(), state, DriverState::advance);

        Self { task, frames, pace }
    }

    pub fn pace(&self) -> GenerationsPerMinute {
        self.pace
    }

    pub fn set_pace(&mut self, pace: GenerationsPerMinute) {
        self.pace = pace;
        self.task.set_interval(pace.interval());
    }

    /// Block until the next frame; `None` once the worker has ended
    pub fn recv(&self) -> Option<Frame> {
        self.frames.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<Frame> {
        match self.frames.recv_timeout(timeout) {
            Ok(frame) => Some(frame),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Stop advancing and return the last generation computed
    pub fn stop(self) -> Result<Frame, LifeError> {
        let state = self.task.stop()?;
        Ok(Frame {
            generation: state.generation,
            grid: state.current,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::patterns;

    fn fast() -> GenerationsPerMinute {
        GenerationsPerMinute::new(250).unwrap()
    }

    #[test]
    fn test_frames_follow_step() {
        let glider = patterns::named("glider", 19, 19).unwrap();
        let driver = AnimationDriver::start(glider.clone(), fast());

        let mut expected = glider.clone();
        for generation in 1..=3 {
            let frame = driver.recv_timeout(Duration::from_secs(5)).unwrap();
            expected = LifeRules::step(&expected);
            assert_eq!(frame.generation, generation);
            assert_eq!(frame.grid, expected);
        }

        let last = driver.stop().unwrap();
        assert!(last.generation >= 3);
        assert_eq!(
            last.grid,
            LifeRules::evolve_generations(&glider, last.generation as usize)
        );
    }

    #[test]
    fn test_start_at_continues_numbering() {
        let blinker = patterns::named("blinker", 5, 5).unwrap();
        let driver = AnimationDriver::start_at(blinker.clone(), 10, fast());
        let frame = driver.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(frame.generation, 11);
        assert_eq!(frame.grid, LifeRules::step(&blinker));
        driver.stop().unwrap();
    }

    #[test]
    fn test_set_pace() {
        let block = patterns::named("block", 4, 4).unwrap();
        let mut driver = AnimationDriver::start(block, GenerationsPerMinute::new(1).unwrap());
        driver.set_pace(fast());
        assert_eq!(driver.pace(), fast());

        let frame = driver.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(frame.generation, 1);
        driver.stop().unwrap();
    }
}
