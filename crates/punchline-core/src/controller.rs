//! Trigger handling for the joke surface.
//!
//! At most one request is in flight at a time. A trigger that arrives while a
//! request is running is ignored rather than queued, so an earlier response
//! can never overwrite a later one.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::board::JokeBoard;
use crate::domain::Joke;
use crate::pipeline::JokeRequest;
use crate::ports::{JokeResult, JokeSourcePort};

/// What happened to a trigger.
#[derive(Debug)]
pub enum Trigger {
    /// A request was spawned. The handle resolves with the outcome after the
    /// board has been updated.
    Started(JoinHandle<JokeResult<Joke>>),
    /// A request was already in flight; nothing was started.
    Ignored,
}

/// Owns the display state and serializes pipeline runs against it.
pub struct JokeController {
    source: Arc<dyn JokeSourcePort>,
    request: JokeRequest,
    board: Arc<Mutex<JokeBoard>>,
    in_flight: Arc<AtomicBool>,
}

impl JokeController {
    pub fn new(source: Arc<dyn JokeSourcePort>, request: JokeRequest) -> Self {
        Self {
            source,
            request,
            board: Arc::new(Mutex::new(JokeBoard::new())),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Start one pipeline run unless another is still running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger(&self) -> Trigger {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            info!("Joke request already in flight, ignoring trigger");
            return Trigger::Ignored;
        }

        let guard = InFlightGuard(Arc::clone(&self.in_flight));
        let task = self.request.clone().into_task(Arc::clone(&self.source));
        let board = Arc::clone(&self.board);

        Trigger::Started(tokio::spawn(async move {
            let outcome = task.await;
            board.lock().await.apply(&outcome);
            drop(guard);
            debug!(success = outcome.is_ok(), "Joke request settled");
            outcome
        }))
    }

    /// Current text for the display surface.
    pub async fn display_text(&self) -> String {
        self.board.lock().await.display_text()
    }

    /// Snapshot of the display state.
    pub async fn board(&self) -> JokeBoard {
        self.board.lock().await.clone()
    }
}

/// Clears the in-flight flag when the spawned run ends, including on panic.
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
