//! Tracing for request transitions.
//!
//! `Traced` wraps a transition in a span and reports the record's phase
//! before and after it runs.

use std::fmt::Debug;

use reqstate_flow::{Phase, RequestState, Transition};
use tracing_subscriber::EnvFilter;

/// Initialize a simple stdout tracing subscriber for development.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_stdout_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reqstate_core=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Anything that can report its lifecycle phase.
pub trait Lifecycle {
    fn phase(&self) -> Phase;
}

impl<D, M, E> Lifecycle for RequestState<D, M, E> {
    fn phase(&self) -> Phase {
        RequestState::phase(self)
    }
}

/// A wrapper Transition that adds tracing to any inner Transition.
#[derive(Debug, Clone)]
pub struct Traced<T> {
    inner: T,
    name: String,
}

impl<T> Traced<T> {
    pub fn new(inner: T, name: &str) -> Self {
        Self {
            inner,
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

}

impl<T, From, To> Transition<From, To> for Traced<T>
where
    T: Transition<From, To>,
    T::Error: Debug,
    From: Lifecycle + Debug,
    To: Lifecycle,
{
    type Error = T::Error;
    type Context = T::Context;

    fn transition(&self, from: &From, ctx: &Self::Context) -> Result<To, Self::Error> {
        let span = tracing::info_span!("transition", reqstate.transition = %self.name);
        let _guard = span.enter();

        let before = from.phase();
        tracing::debug!(phase = %before, input = ?from, "Entering transition");
        let start = std::time::Instant::now();

        let result = self.inner.transition(from, ctx);

        let duration = start.elapsed();
        match &result {
            Ok(to) => {
                tracing::info!(from = %before, to = %to.phase(), ?duration, "Transition completed");
            }
            Err(e) => {
                tracing::error!(error = ?e, ?duration, "Transition failed");
            }
        }
        result
    }
}
