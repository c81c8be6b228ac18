//! Timed advancement of a board, separate from the transition rules

pub mod driver;
pub mod pace;
pub mod session;
pub mod task;

pub use driver::{AnimationDriver, Frame};
pub use pace::GenerationsPerMinute;
pub use session::{LifeSession, RunState};
pub use task::RepeatingTask;
