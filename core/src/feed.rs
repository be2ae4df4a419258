//! The periodic synthetic-availability feed, as an explicitly
//! cancellable scheduled task.
//!
//! RULES:
//!   - The owning view starts the feed on activation and stops it on
//!     deactivation. stop() is idempotent.
//!   - Drop stops the feed, so a leaked timer cannot outlive its handle.
//!   - Registry operations run to completion under the registry lock;
//!     a feed tick and a user action interleave but never race.

use crate::{
    config::FeedConfig,
    error::{CoreError, CoreResult},
    registry::BedRegistry,
    rng::FeedRng,
    types::Tick,
};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;

pub struct BedFeed {
    registry: Arc<Mutex<BedRegistry>>,
    config: FeedConfig,
    seed: u64,
    stop_tx: Option<Sender<()>>,
    worker: Option<JoinHandle<Tick>>,
}

impl BedFeed {
    pub fn new(registry: Arc<Mutex<BedRegistry>>, config: FeedConfig, seed: u64) -> Self {
        Self {
            registry,
            config,
            seed,
            stop_tx: None,
            worker: None,
        }
    }

    /// Spawn the periodic task: one registry tick per interval until
    /// stopped. Restarting after stop() begins a fresh RNG stream from
    /// the same seed.
    pub fn start(&mut self) -> CoreResult<()> {
        if self.worker.is_some() {
            return Err(CoreError::FeedAlreadyRunning);
        }

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let registry = Arc::clone(&self.registry);
        let interval = self.config.tick_interval();
        let max_delta = self.config.max_delta;
        let mut rng = FeedRng::new(self.seed);

        let handle = std::thread::spawn(move || {
            let mut tick: Tick = 0;
            loop {
                match stop_rx.recv_timeout(interval) {
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    Err(RecvTimeoutError::Timeout) => {}
                }
                tick += 1;
                let mut reg = lock_registry(&registry);
                for event in reg.tick(tick, max_delta, &mut rng) {
                    log::debug!("feed: {event:?}");
                }
            }
            tick
        });

        self.stop_tx = Some(stop_tx);
        self.worker = Some(handle);
        log::info!("feed: started (every {} ms)", self.config.tick_interval_ms);
        Ok(())
    }

    /// Signal the task and join it. Safe to call repeatedly; calls after
    /// the first are no-ops.
    pub fn stop(&mut self) {
        // Dropping the sender wakes the worker out of its timed wait.
        self.stop_tx.take();
        if let Some(handle) = self.worker.take() {
            match handle.join() {
                Ok(ticks) => log::info!("feed: stopped after {ticks} ticks"),
                Err(_) => log::warn!("feed: worker panicked"),
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }
}

impl Drop for BedFeed {
    fn drop(&mut self) {
        self.stop();
    }
}

/// A poisoned registry lock only means a panicking caller left the state
/// mid-render somewhere; the records themselves are always consistent
/// after each operation, so the feed keeps going.
fn lock_registry(registry: &Arc<Mutex<BedRegistry>>) -> MutexGuard<'_, BedRegistry> {
    match registry.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
