//! Periodic health polling fanned out over a `tokio::sync::watch` channel.
//!
//! `HealthMonitor` owns the only sender; each observer holds a
//! `HealthSubscription`. `stop()` drops the sender, which ends every
//! subscriber loop.

use super::DatabaseApi;
use crate::shared::retry::Sleeper;
use contracts::system::HealthStatus;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use tokio::sync::watch;

type HealthSender = watch::Sender<Option<HealthStatus>>;

/// Receiving end of the health stream; dropping it unsubscribes.
///
/// The first `next()` replays the latest published status, later calls wait
/// for the next publish.
pub struct HealthSubscription {
    rx: watch::Receiver<Option<HealthStatus>>,
    replayed: bool,
}

impl HealthSubscription {
    /// Returns `None` once the monitor has stopped.
    pub async fn next(&mut self) -> Option<HealthStatus> {
        loop {
            if self.replayed {
                self.rx.changed().await.ok()?;
            }
            self.replayed = true;
            let status = self.rx.borrow_and_update().clone();
            if status.is_some() {
                return status;
            }
        }
    }
}

/// Polls `/Health/connection` every `interval` and publishes each result.
#[derive(Clone)]
pub struct HealthMonitor {
    api: Rc<dyn DatabaseApi>,
    sleeper: Rc<dyn Sleeper>,
    interval: Duration,
    tx: Rc<RefCell<Option<HealthSender>>>,
    running: Rc<Cell<bool>>,
}

impl HealthMonitor {
    pub fn new(api: Rc<dyn DatabaseApi>, sleeper: Rc<dyn Sleeper>, interval: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            api,
            sleeper,
            interval,
            tx: Rc::new(RefCell::new(Some(tx))),
            running: Rc::new(Cell::new(false)),
        }
    }

    /// `None` after `stop()`
    pub fn subscribe(&self) -> Option<HealthSubscription> {
        self.tx.borrow().as_ref().map(|tx| HealthSubscription {
            rx: tx.subscribe(),
            replayed: false,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    fn is_stopped(&self) -> bool {
        self.tx.borrow().is_none()
    }

    fn publish(&self, status: HealthStatus) {
        if let Some(tx) = self.tx.borrow().as_ref() {
            // send_replace keeps the value even with no receivers yet
            tx.send_replace(Some(status));
        }
    }

    /// One health check; transport failures are published as unhealthy.
    pub async fn poll_once(&self) -> HealthStatus {
        let status = match self.api.check_health().await {
            Ok(status) => status,
            Err(e) => HealthStatus::unreachable(e),
        };
        if !status.is_healthy {
            log::info!(
                "Health check reports unhealthy backend: {}",
                status.error.as_deref().unwrap_or("no details")
            );
        }
        self.publish(status.clone());
        status
    }

    /// Poll loop: check, publish, wait. Returns once `stop()` has been called.
    pub async fn run(&self) {
        if self.is_stopped() {
            self.running.set(false);
            return;
        }
        self.running.set(true);
        while self.running.get() {
            self.poll_once().await;
            if !self.running.get() {
                break;
            }
            self.sleeper.sleep(self.interval).await;
        }
        log::debug!("Health monitor loop finished");
    }

    /// Spawns `run()` on the browser event loop; no-op if already running.
    pub fn start(&self) {
        if self.is_running() || self.is_stopped() {
            return;
        }
        self.running.set(true);
        let monitor = self.clone();
        leptos::task::spawn_local(async move {
            monitor.run().await;
        });
    }

    /// Ends the loop after the in-flight step and drops the sender.
    pub fn stop(&self) {
        self.running.set(false);
        self.tx.borrow_mut().take();
    }
}
