//! Transition - State Transition Contracts
//!
//! Transitions define how one state moves to another.
//! A `RequestEvent` is the value form of the three request transitions,
//! so a caller can hold a pending change, log it, or hand it to a decorator
//! before applying it.

use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::state::RequestState;

/// The core trait for state transitions.
///
/// A `Transition<From, To>` computes a `To` from a borrowed `From`.
/// The source value is never modified.
///
/// # Example
/// ```rust
/// use reqstate_flow::{RequestEvent, RequestState, Transition};
///
/// let idle = RequestState::<String>::default();
/// let event = RequestEvent::<String>::request(None);
/// let pending: RequestState<String> = event.transition(&idle, &()).unwrap();
/// assert!(pending.pending);
/// ```
pub trait Transition<From, To> {
    /// Error type for this transition
    type Error;

    /// Context type for resource access
    type Context;

    /// Perform the state transition
    fn transition(&self, from: &From, ctx: &Self::Context) -> Result<To, Self::Error>;
}

/// Which of the three request transitions an event performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    Request,
    Succeeded,
    Failed,
}

impl TransitionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionKind::Request => "request",
            TransitionKind::Succeeded => "succeeded",
            TransitionKind::Failed => "failed",
        }
    }
}

impl std::fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request transition together with its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RequestEvent<D, M = (), E = serde_json::Value> {
    Request { meta: Option<M> },
    Succeeded { data: D, meta: Option<M> },
    Failed { error: E, meta: Option<M> },
}

impl<D, M, E> RequestEvent<D, M, E> {
    pub fn request(meta: Option<M>) -> Self {
        RequestEvent::Request { meta }
    }

    pub fn succeeded(data: D, meta: Option<M>) -> Self {
        RequestEvent::Succeeded { data, meta }
    }

    pub fn failed(error: E, meta: Option<M>) -> Self {
        RequestEvent::Failed { error, meta }
    }

    pub fn kind(&self) -> TransitionKind {
        match self {
            RequestEvent::Request { .. } => TransitionKind::Request,
            RequestEvent::Succeeded { .. } => TransitionKind::Succeeded,
            RequestEvent::Failed { .. } => TransitionKind::Failed,
        }
    }
}

impl<D: Clone, M: Clone, E: Clone> RequestState<D, M, E> {
    /// Apply an event, producing the next record.
    pub fn apply(&self, event: RequestEvent<D, M, E>) -> Self {
        match event {
            RequestEvent::Request { meta } => self.request(meta),
            RequestEvent::Succeeded { data, meta } => self.succeeded(data, meta),
            RequestEvent::Failed { error, meta } => self.failed(error, meta),
        }
    }
}

impl<D: Clone, M: Clone, E: Clone> Transition<RequestState<D, M, E>, RequestState<D, M, E>>
    for RequestEvent<D, M, E>
{
    type Error = Infallible;
    type Context = ();

    fn transition(
        &self,
        from: &RequestState<D, M, E>,
        _ctx: &Self::Context,
    ) -> Result<RequestState<D, M, E>, Self::Error> {
        Ok(from.apply(self.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Phase;

    type Record = RequestState<String, u32, String>;
    type Event = RequestEvent<String, u32, String>;

    #[test]
    fn test_apply_matches_methods() {
        let state = Record::default();

        assert_eq!(state.apply(Event::request(Some(7))), state.request(Some(7)));
        assert_eq!(
            state.apply(Event::succeeded("data".into(), None)),
            state.succeeded("data".into(), None)
        );
        assert_eq!(
            state.apply(Event::failed("error".into(), Some(1))),
            state.failed("error".into(), Some(1))
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(Event::request(None).kind(), TransitionKind::Request);
        assert_eq!(Event::succeeded("d".into(), None).kind(), TransitionKind::Succeeded);
        assert_eq!(Event::failed("e".into(), None).kind(), TransitionKind::Failed);
    }

    #[test]
    fn test_transition_walks_lifecycle() {
        let events = [
            Event::request(Some(1)),
            Event::failed("timeout".into(), None),
            Event::request(Some(2)),
            Event::succeeded("payload".into(), None),
        ];

        let mut state = Record::default();
        let mut phases = vec![state.phase()];
        for event in &events {
            state = event.transition(&state, &()).unwrap();
            phases.push(state.phase());
        }

        assert_eq!(
            phases,
            vec![
                Phase::Idle,
                Phase::Pending,
                Phase::Failed,
                Phase::Pending,
                Phase::Succeeded
            ]
        );
        assert_eq!(state.meta, Some(2));
        assert_eq!(state.data.as_deref(), Some("payload"));
    }

    #[test]
    fn test_event_serialization() {
        let json = serde_json::to_value(Event::failed("boom".into(), Some(3))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "failed", "error": "boom", "meta": 3 })
        );
    }
}
