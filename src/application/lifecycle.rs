//! Model warm-up lifecycle
//!
//! The sentiment model is primed once, off the main control flow, with a
//! throwaway inference that forces lazy weight materialization. The
//! lifecycle is a two-state machine with a single one-way transition:
//! `Uninitialized -> Ready`, signaled exactly once. Classification entry
//! points must reject calls while `Uninitialized`.

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::domain::SentimentClassifier;

/// Input used by the warm-up priming call; its content is irrelevant
pub const WARMUP_INPUT: &str = "This is a dummy input.";

/// Lifecycle state of the shared sentiment model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    Uninitialized,
    Ready,
}

/// Handle observing and signaling the model lifecycle
#[derive(Clone)]
pub struct ModelLifecycle {
    tx: Arc<watch::Sender<ModelState>>,
    rx: watch::Receiver<ModelState>,
}

impl ModelLifecycle {
    /// Creates a lifecycle in the `Uninitialized` state
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(ModelState::Uninitialized);
        Self {
            tx: Arc::new(tx),
            rx,
        }
    }

    /// Synchronous readiness check used by classification entry points
    #[must_use]
    pub fn is_ready(&self) -> bool {
        *self.rx.borrow() == ModelState::Ready
    }

    /// Fires the single `Uninitialized -> Ready` transition
    pub fn mark_ready(&self) {
        let _ = self.tx.send_replace(ModelState::Ready);
    }

    /// Awaits the transition to `Ready`
    pub async fn wait_ready(&self) {
        let mut rx = self.rx.clone();
        // Sender lives inside self, so the channel cannot close early
        let _ = rx.wait_for(|state| *state == ModelState::Ready).await;
    }
}

impl Default for ModelLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawns the one-time warm-up task.
///
/// Runs a throwaway inference on a blocking worker, then fires the ready
/// transition. A warm-up failure is logged and leaves the lifecycle
/// `Uninitialized`; classification stays rejected.
pub fn spawn_warmup(
    lifecycle: ModelLifecycle,
    classifier: Arc<dyn SentimentClassifier>,
    warmup_seq_len: usize,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result =
            tokio::task::spawn_blocking(move || classifier.classify(WARMUP_INPUT, warmup_seq_len))
                .await;

        match result {
            Ok(Ok(_)) => {
                info!("Model warm-up completed, accepting analysis requests");
                lifecycle.mark_ready();
            }
            Ok(Err(e)) => {
                error!("Model warm-up failed: {}", e);
            }
            Err(e) => {
                error!("Model warm-up task panicked: {}", e);
            }
        }
    })
}
