use chrono::{DateTime, Utc};
use reqstate_flow::{Phase, RequestEvent, RequestState, TransitionKind};
use serde::{Deserialize, Serialize};

/// A single applied transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub kind: TransitionKind,
    pub from: Phase,
    pub to: Phase,
    pub at: DateTime<Utc>,
}

/// A sequential record of the transitions applied to one request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Timeline {
    pub events: Vec<TimelineEvent>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: TimelineEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&TimelineEvent> {
        self.events.last()
    }

    /// Sort events by timestamp
    pub fn sort(&mut self) {
        self.events.sort_by_key(|e| e.at);
    }

    /// Apply `event` to `state` and record the phase change.
    pub fn apply<D: Clone, M: Clone, E: Clone>(
        &mut self,
        state: &RequestState<D, M, E>,
        event: RequestEvent<D, M, E>,
    ) -> RequestState<D, M, E> {
        let kind = event.kind();
        let from = state.phase();
        let next = state.apply(event);
        let to = next.phase();

        tracing::trace!(%kind, %from, %to, "Recorded transition");
        self.push(TimelineEvent {
            kind,
            from,
            to,
            at: Utc::now(),
        });
        next
    }
}
