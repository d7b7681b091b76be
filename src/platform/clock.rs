//! Periodic tick source
//!
//! A background thread plays the part of the watchdog timer interrupt: it
//! sends one `Tick` per period over a channel. The game thread is the only
//! consumer, so a tick is never handled while the previous one is running.

use std::sync::mpsc::{self, Receiver, RecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Sequence number of a timer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick(pub u64);

/// Receiving end of the tick channel
pub struct TickSource {
    rx: Receiver<Tick>,
    handle: Option<JoinHandle<()>>,
}

impl TickSource {
    /// Spawn a timer thread firing every `period`, stopping after `limit` ticks
    pub fn spawn(period: Duration, limit: Option<u64>) -> std::io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("tick".into())
            .spawn(move || {
                let mut n = 0u64;
                while limit.is_none_or(|limit| n < limit) {
                    thread::sleep(period);
                    n += 1;
                    if tx.send(Tick(n)).is_err() {
                        break;
                    }
                }
                log::debug!("tick source stopped after {} ticks", n);
            })?;
        Ok(Self {
            rx,
            handle: Some(handle),
        })
    }

    /// Exactly `count` ticks, available immediately
    pub fn burst(count: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        for n in 1..=count {
            // receiver is alive until the end of this function
            let _ = tx.send(Tick(n));
        }
        Self { rx, handle: None }
    }

    /// Block until the next tick; Err once the source is exhausted
    pub fn wait(&self) -> Result<Tick, RecvError> {
        self.rx.recv()
    }
}

impl Drop for TickSource {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            // dropping rx first makes the thread's next send fail
            let (_, rx) = mpsc::channel();
            drop(std::mem::replace(&mut self.rx, rx));
            let _ = handle.join();
        }
    }
}
