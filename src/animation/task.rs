//! A cancellable task that ticks on its own thread

use crate::error::LifeError;
use std::ops::ControlFlow;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Runs `tick` on a dedicated thread, waiting `interval` between ticks,
/// until stopped, dropped, or the tick returns `ControlFlow::Break`.
///
/// The worker waits on the stop channel rather than sleeping, so a stop
/// request cuts the pending wait short.
pub struct RepeatingTask<S> {
    stop_sender: Sender<()>,
    interval_sender: Sender<Duration>,
    handle: Option<JoinHandle<S>>,
}

impl<S: Send + 'static> RepeatingTask<S> {
    pub fn spawn<F>(mut interval: Duration, mut state: S, mut tick: F) -> Self
    where
        F: FnMut(&mut S) -> ControlFlow<()> + Send + 'static,
    {
        let (stop_sender, stop_receiver) = mpsc::channel();
        let (interval_sender, interval_receiver) = mpsc::channel();

        let handle = thread::spawn(move || {
            loop {
                if tick(&mut state).is_break() {
                    break;
                }

                if let Some(latest) = interval_receiver.try_iter().last() {
                    interval = latest;
                }

                match stop_receiver.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            state
        });

        Self {
            stop_sender,
            interval_sender,
            handle: Some(handle),
        }
    }

    /// Change the wait used after the next tick
    pub fn set_interval(&self, interval: Duration) {
        // A finished worker has nobody left to tell
        let _ = self.interval_sender.send(interval);
    }

    /// True once the worker has left its loop
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Cancel the task and hand back its state
    pub fn stop(mut self) -> Result<S, LifeError> {
        let _ = self.stop_sender.send(());
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| LifeError::TaskPanicked),
            None => Err(LifeError::TaskPanicked),
        }
    }
}

impl<S> Drop for RepeatingTask<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = self.stop_sender.send(());
            let _ = handle.join();
        }
    }
}
