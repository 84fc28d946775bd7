//! Cancellable repeating timer behind the carousel auto-advance.
//!
//! The worker thread never touches showcase state. It posts [`Tick`]s into a
//! bounded channel owned by the controller; the channel has room for exactly
//! one tick, and a tick that finds the slot occupied is dropped. The owner
//! therefore never sees more than one pending tick.
//!
//! Dropping or [`AutoAdvance::cancel`]ling the handle disconnects the worker's
//! control channel; the worker wakes immediately, exits, and is joined before
//! `cancel` returns. No tick is sent after that point.

use log::{info, trace};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, SyncSender, TrySendError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// One auto-advance step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

enum Control {
    /// Start the current interval over.
    Restart,
}

/// Single-slot tick channel: the receiving half stays with the state owner.
pub fn tick_channel() -> (SyncSender<Tick>, Receiver<Tick>) {
    mpsc::sync_channel(1)
}

/// Handle to a running auto-advance timer.
pub struct AutoAdvance {
    control: Option<Sender<Control>>,
    worker: Option<JoinHandle<()>>,
    interval: Duration,
}

impl AutoAdvance {
    /// Spawn the timer. A tick is offered to `ticks` every `interval`.
    pub fn start(interval: Duration, ticks: SyncSender<Tick>) -> Self {
        let (control_tx, control_rx) = mpsc::channel();
        let worker = thread::spawn(move || run(interval, control_rx, ticks));
        info!("auto-advance started ({} ms)", interval.as_millis());
        Self {
            control: Some(control_tx),
            worker: Some(worker),
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Start the current interval over, so the next tick is a full interval away.
    pub fn restart(&self) {
        if let Some(control) = &self.control {
            let _ = control.send(Control::Restart);
        }
    }

    /// Stop the timer and wait for the worker to exit. Idempotent.
    pub fn cancel(&mut self) {
        drop(self.control.take());
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
            info!("auto-advance stopped");
        }
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn run(interval: Duration, control: Receiver<Control>, ticks: SyncSender<Tick>) {
    loop {
        match control.recv_timeout(interval) {
            Ok(Control::Restart) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => match ticks.try_send(Tick) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => trace!("tick dropped, one already pending"),
                Err(TrySendError::Disconnected(_)) => break,
            },
        }
    }
}
