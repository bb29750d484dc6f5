//! Lazily constructed, process-wide model handle.
//!
//! The provider is owned by the composition root and passed by reference into
//! request handlers. The first acquisition runs the loader; every later one
//! reuses the stored outcome, including a failed one. Only
//! [`ModelProvider::invalidate`] clears it. That takes `&mut self`, so it is
//! for tests and for embedders that own the provider; the Lambda binary shares
//! it by reference and keeps the outcome until the process is recycled.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{error, info};

use super::engine::EngineLoader;

/// Stored outcome of the one construction attempt.
#[derive(Debug)]
pub enum ModelState<E> {
    Ready(Arc<E>),
    Unavailable { cause: String },
}

/// What a single action gets from the provider.
#[derive(Debug)]
pub struct Acquired<E> {
    /// `None` when the model could not be constructed.
    pub handle: Option<Arc<E>>,
    /// True only for the action whose call ran the loader.
    pub constructed: bool,
    /// Set only on the action whose call performed a failed construction.
    pub load_failure: Option<String>,
}

impl<E> Acquired<E> {
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.handle.is_some()
    }
}

pub struct ModelProvider<L: EngineLoader> {
    loader: L,
    state: OnceCell<ModelState<L::Engine>>,
}

impl<L: EngineLoader> ModelProvider<L> {
    #[must_use]
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            state: OnceCell::new(),
        }
    }

    /// Returns the cached handle, constructing it on first use.
    pub async fn acquire(&self) -> Acquired<L::Engine> {
        let mut constructed = false;
        let mut failure_slot: Option<String> = None;
        let ran_loader = &mut constructed;
        let failure = &mut failure_slot;
        let loader = &self.loader;

        let state = self
            .state
            .get_or_init(|| async move {
                *ran_loader = true;
                info!(model = %loader.model_id(), "Loading summarization model");
                match loader.load().await {
                    Ok(engine) => {
                        info!(model = %loader.model_id(), "Summarization model loaded");
                        ModelState::Ready(Arc::new(engine))
                    }
                    Err(e) => {
                        let cause = format!("{e:#}");
                        error!(model = %loader.model_id(), error = %cause, "Could not load summarization model");
                        *failure = Some(cause.clone());
                        ModelState::Unavailable { cause }
                    }
                }
            })
            .await;

        match state {
            ModelState::Ready(engine) => Acquired {
                handle: Some(Arc::clone(engine)),
                constructed,
                load_failure: None,
            },
            ModelState::Unavailable { .. } => Acquired {
                handle: None,
                constructed,
                load_failure: failure_slot,
            },
        }
    }

    #[must_use]
    pub fn model_id(&self) -> &str {
        self.loader.model_id()
    }

    /// The stored outcome, if construction has been attempted.
    pub fn state(&self) -> Option<&ModelState<L::Engine>> {
        self.state.get()
    }

    /// Drops the cached outcome so the next acquisition constructs again.
    ///
    /// Needs exclusive access, so it is not reachable while handlers hold the
    /// provider.
    pub fn invalidate(&mut self) {
        if self.state.take().is_some() {
            info!(model = %self.loader.model_id(), "Model cache cleared");
        }
    }
}
