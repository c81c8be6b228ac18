//! Start/stop/reset bookkeeping around a board

use super::driver::{AnimationDriver, Frame};
use super::pace::GenerationsPerMinute;
use crate::error::LifeError;
use crate::game_of_life::{Grid, LifeRules};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// At generation 0, the board can be edited freely
    Idle,
    Running,
    /// Stopped part way; starting again resumes from the current generation
    Paused,
}

/// A board being played: the retained initial state, the generation on
/// display, and whether an animation is driving it.
#[derive(Debug, Clone)]
pub struct LifeSession {
    initial: Grid,
    current: Grid,
    generation: u64,
    state: RunState,
}

impl LifeSession {
    pub fn new(initial: Grid) -> Self {
        Self {
            current: initial.clone(),
            initial,
            generation: 0,
            state: RunState::Idle,
        }
    }

    pub fn initial(&self) -> &Grid {
        &self.initial
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Flip one cell.
    ///
    /// While idle this edits the initial state; while paused it edits only
    /// the generation on display, so a reset still restores the original.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), LifeError> {
        match self.state {
            RunState::Running => return Err(LifeError::SessionRunning),
            RunState::Idle => {
                self.initial = self.initial.toggled(row, col)?;
                self.current = self.initial.clone();
            }
            RunState::Paused => {
                self.current = self.current.toggled(row, col)?;
            }
        }
        Ok(())
    }

    /// Replace the retained initial state and reset to it
    pub fn set_initial(&mut self, initial: Grid) -> Result<(), LifeError> {
        if self.state == RunState::Running {
            return Err(LifeError::SessionRunning);
        }
        self.initial = initial;
        self.reset();
        Ok(())
    }

    /// Start, or resume, the animation from the current generation
    pub fn start(&mut self, pace: GenerationsPerMinute) -> Result<AnimationDriver, LifeError> {
        if self.state == RunState::Running {
            return Err(LifeError::SessionRunning);
        }
        if self.initial.is_empty() {
            return Err(LifeError::EmptyInitialState);
        }

        let driver = AnimationDriver::start_at(self.current.clone(), self.generation, pace);
        self.state = RunState::Running;
        Ok(driver)
    }

    /// Adopt a frame produced by the running driver.
    /// Returns false, ignoring the frame, when the session is not running.
    pub fn accept(&mut self, frame: Frame) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        self.generation = frame.generation;
        self.current = frame.grid;
        true
    }

    /// Stop the driver and pause on the last accepted generation.
    ///
    /// Frames the driver computed but nobody accepted are dropped, so a
    /// resume continues from what was last displayed.
    pub fn stop(&mut self, driver: AnimationDriver) -> Result<(), LifeError> {
        let result = driver.stop();
        if self.state == RunState::Running {
            self.state = RunState::Paused;
        }
        result.map(|_| ())
    }

    /// Advance by hand, one generation
    pub fn advance(&mut self) -> Result<&Grid, LifeError> {
        if self.state == RunState::Running {
            return Err(LifeError::SessionRunning);
        }
        self.current = LifeRules::step(&self.current);
        self.generation += 1;
        self.state = RunState::Paused;
        Ok(&self.current)
    }

    /// Discard the current generation and go back to the initial state
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
        self.generation = 0;
        self.state = RunState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::patterns;
    use std::time::Duration;

    fn fast() -> GenerationsPerMinute {
        GenerationsPerMinute::new(250).unwrap()
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let glider = patterns::named("glider", 19, 19).unwrap();
        let mut session = LifeSession::new(glider.clone());
        for _ in 0..7 {
            session.advance().unwrap();
        }
        assert_eq!(session.generation(), 7);
        assert_ne!(session.current(), &glider);

        session.reset();
        assert_eq!(session.current(), &glider);
        assert_eq!(session.initial(), &glider);
        assert_eq!(session.generation(), 0);
        assert_eq!(session.state(), RunState::Idle);
    }

    #[test]
    fn test_start_refuses_empty_board() {
        let mut session = LifeSession::new(Grid::dead(19, 19).unwrap());
        assert!(matches!(session.start(fast()), Err(LifeError::EmptyInitialState)));
        assert_eq!(session.state(), RunState::Idle);
    }

    #[test]
    fn test_toggle_edits_initial_state_when_idle() {
        let mut session = LifeSession::new(Grid::dead(5, 5).unwrap());
        session.toggle_cell(2, 2).unwrap();
        assert!(session.initial().get(2, 2));
        assert!(session.current().get(2, 2));
        assert!(matches!(
            session.toggle_cell(5, 0),
            Err(LifeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_toggle_while_paused_keeps_initial_state() {
        let block = patterns::named("block", 6, 6).unwrap();
        let mut session = LifeSession::new(block.clone());
        session.advance().unwrap();
        session.toggle_cell(0, 0).unwrap();
        assert!(session.current().get(0, 0));
        assert_eq!(session.initial(), &block);

        session.reset();
        assert_eq!(session.current(), &block);
    }

    #[test]
    fn test_running_session_rejects_edits() {
        let mut session = LifeSession::new(patterns::named("blinker", 5, 5).unwrap());
        let driver = session.start(fast()).unwrap();
        assert_eq!(session.state(), RunState::Running);

        assert!(matches!(session.toggle_cell(0, 0), Err(LifeError::SessionRunning)));
        assert!(matches!(session.advance(), Err(LifeError::SessionRunning)));
        assert!(matches!(session.start(fast()), Err(LifeError::SessionRunning)));

        session.stop(driver).unwrap();
        assert_eq!(session.state(), RunState::Paused);
    }

    #[test]
    fn test_stop_and_resume_continue_generations() {
        let glider = patterns::named("glider", 19, 19).unwrap();
        let mut session = LifeSession::new(glider.clone());

        let driver = session.start(fast()).unwrap();
        let frame = driver.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(session.accept(frame));
        session.stop(driver).unwrap();

        let paused_at = session.generation();
        assert_eq!(paused_at, 1);
        assert_eq!(
            session.current(),
            &LifeRules::evolve_generations(&glider, paused_at as usize)
        );

        let driver = session.start(fast()).unwrap();
        let frame = driver.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(frame.generation, paused_at + 1);
        assert!(session.accept(frame));
        session.stop(driver).unwrap();

        assert!(!session.accept(Frame {
            generation: 99,
            grid: glider.clone(),
        }));
        session.reset();
        assert_eq!(session.current(), &glider);
    }

    #[test]
    fn test_set_initial_resets() {
        let mut session = LifeSession::new(patterns::named("block", 4, 4).unwrap());
        session.advance().unwrap();
        let blinker = patterns::named("blinker", 5, 5).unwrap();
        session.set_initial(blinker.clone()).unwrap();
        assert_eq!(session.current(), &blinker);
        assert_eq!(session.generation(), 0);
    }
}
