//! Debounced background actions
//!
//! Delays an action until triggers pause for a fixed quiet interval, so a
//! burst of triggers runs the action once. Used to coalesce exploit index
//! reload requests: hammering the reload endpoint re-reads the data file a
//! single time after the burst settles.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;

/// Coalesces bursts of triggers into a single deferred action run
#[derive(Debug, Clone)]
pub struct Debouncer {
    tx: mpsc::Sender<()>,
}

impl Debouncer {
    /// Spawn the background task driving the debounced action.
    ///
    /// After the first trigger, the action runs once triggers stop arriving
    /// for `quiet`. Further triggers restart the cycle.
    pub fn new<F, Fut>(quiet: Duration, mut action: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (tx, mut rx) = mpsc::channel::<()>(16);

        tokio::spawn(async move {
            while rx.recv().await.is_some() {
                // Absorb the burst: every trigger restarts the quiet window.
                loop {
                    match tokio::time::timeout(quiet, rx.recv()).await {
                        Ok(Some(())) => continue,
                        Ok(None) => {
                            action().await;
                            return;
                        }
                        Err(_) => break,
                    }
                }
                action().await;
            }
        });

        Self { tx }
    }

    /// Request a run of the action.
    ///
    /// Non-blocking; returns false if the trigger was dropped because the
    /// channel is saturated, which is harmless since a run is then already
    /// pending.
    pub fn trigger(&self) -> bool {
        self.tx.try_send(()).is_ok()
    }
}
