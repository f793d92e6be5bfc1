//! Async event loop that owns a [`SiteState`] for one page view.
//!
//! Intents and ticks are applied one at a time in arrival order. Every applied
//! event publishes a fresh snapshot on a watch channel.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::{SiteSnapshot, SiteState};
use crate::events::{Intent, SiteEvent};
use crate::facts::{spawn_ticker, TickerHandle};
use crate::likes::Notifier;
use crate::CoreError;

/// Capacity of the intent and tick channels.
const CHANNEL_CAPACITY: usize = 64;

struct Request {
    intent: Intent,
    reply: oneshot::Sender<Result<(), CoreError>>,
}

/// View-side handle. Cloneable; the runtime stops once every handle is dropped.
#[derive(Clone)]
pub struct SiteHandle {
    requests: mpsc::Sender<Request>,
    snapshots: watch::Receiver<SiteSnapshot>,
}

/// The event loop. Create with [`SiteRuntime::spawn`].
pub struct SiteRuntime {
    state: SiteState,
    notifier: Box<dyn Notifier + Send>,
    requests: mpsc::Receiver<Request>,
    ticks: mpsc::Receiver<SiteEvent>,
    ticker: TickerHandle,
    snapshots: watch::Sender<SiteSnapshot>,
}

impl SiteRuntime {
    /// Start the fact ticker and the event loop on the current tokio runtime.
    ///
    /// The join handle resolves to the final state after shutdown.
    pub fn spawn(
        state: SiteState,
        notifier: impl Notifier + Send + 'static,
    ) -> Result<(SiteHandle, JoinHandle<SiteState>), CoreError> {
        let (request_tx, request_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (tick_tx, tick_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot());

        let ticker = spawn_ticker(state.config().fact_interval(), tick_tx, SiteEvent::FactTick)?;

        let runtime = SiteRuntime {
            state,
            notifier: Box::new(notifier),
            requests: request_rx,
            ticks: tick_rx,
            ticker,
            snapshots: snapshot_tx,
        };

        let handle = SiteHandle {
            requests: request_tx,
            snapshots: snapshot_rx,
        };

        Ok((handle, tokio::spawn(runtime.run())))
    }

    async fn run(mut self) -> SiteState {
        info!("site runtime started");
        loop {
            tokio::select! {
                request = self.requests.recv() => match request {
                    Some(Request { intent, reply }) => {
                        let result = self.state.apply(SiteEvent::Intent(intent), &mut *self.notifier);
                        if result.is_ok() {
                            self.publish();
                        }
                        // The caller may have stopped waiting.
                        let _ = reply.send(result);
                    }
                    None => break,
                },
                Some(event) = self.ticks.recv() => {
                    if self.state.apply(event, &mut *self.notifier).is_ok() {
                        self.publish();
                    }
                }
            }
        }

        self.ticker.cancel();
        self.state.unmount();
        info!("site runtime stopped");
        self.state
    }

    fn publish(&self) {
        let snapshot = self.state.snapshot();
        self.snapshots.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
        debug!("snapshot published");
    }
}

impl SiteHandle {
    /// Forward an intent and wait until it has been applied.
    pub async fn send(&self, intent: Intent) -> Result<(), CoreError> {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(Request { intent, reply })
            .await
            .map_err(|_| CoreError::Closed)?;
        response.await.map_err(|_| CoreError::Closed)?
    }

    /// Receiver notified whenever the snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<SiteSnapshot> {
        self.snapshots.clone()
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> SiteSnapshot {
        self.snapshots.borrow().clone()
    }
}
