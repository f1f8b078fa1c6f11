//! RequestState - The Request Lifecycle Record
//!
//! A request moves `Idle -> Pending -> Succeeded | Failed` and back to
//! `Pending` whenever it is requested again. The record does not enforce
//! that order: every transition is total and can be applied from any phase.
//!
//! # Example
//! ```rust
//! use reqstate_flow::{Phase, RequestConfig, RequestState};
//!
//! let idle: RequestState<String, u32> =
//!     RequestState::new(RequestConfig::new().initial_data(String::new()));
//! let pending = idle.request(Some(1));
//! let done = pending.succeeded("payload".to_string(), None);
//!
//! assert_eq!(done.phase(), Phase::Succeeded);
//! assert_eq!(done.meta, Some(1));
//! ```

use serde::{Deserialize, Serialize};

use crate::config::RequestConfig;
use crate::serde_helpers::deserialize_present;

/// The state of a single asynchronous fetch.
///
/// - `D` is the payload type.
/// - `M` is caller-defined metadata attached to the latest transition.
/// - `E` is the error slot; any data shape fits the default `serde_json::Value`.
///
/// Fields are public so a state container can adjust them between
/// transitions. Transitions borrow the record and return a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "D: Deserialize<'de>, M: Deserialize<'de>, E: Deserialize<'de>"))]
pub struct RequestState<D, M = (), E = serde_json::Value> {
    pub config: RequestConfig<D>,
    /// Set by the first transition and never cleared
    pub initialized: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub data: Option<D>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub error: Option<E>,
    /// True exactly while an operation is in flight
    pub pending: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub meta: Option<M>,
}

/// Logical phase derived from the record's flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Pending => "pending",
            Phase::Succeeded => "succeeded",
            Phase::Failed => "failed",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<D: Clone, M, E> RequestState<D, M, E> {
    /// Create an idle record, with `data` starting at `config.initial_data`.
    pub fn new(config: RequestConfig<D>) -> Self {
        RequestState {
            data: config.initial_data.clone(),
            config,
            initialized: false,
            error: None,
            pending: false,
            meta: None,
        }
    }
}

impl<D: Clone, M, E> Default for RequestState<D, M, E> {
    fn default() -> Self {
        Self::new(RequestConfig::default())
    }
}

impl<D, M, E> RequestState<D, M, E> {
    pub fn phase(&self) -> Phase {
        if !self.initialized {
            Phase::Idle
        } else if self.pending {
            Phase::Pending
        } else if self.error.is_some() {
            Phase::Failed
        } else {
            Phase::Succeeded
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase() == Phase::Idle
    }

    pub fn is_pending(&self) -> bool {
        self.phase() == Phase::Pending
    }

    pub fn has_succeeded(&self) -> bool {
        self.phase() == Phase::Succeeded
    }

    pub fn has_failed(&self) -> bool {
        self.phase() == Phase::Failed
    }
}

impl<D: Clone, M: Clone, E: Clone> RequestState<D, M, E> {
    /// Mark an operation as in flight.
    ///
    /// `meta` replaces the current metadata when given; `None` keeps it.
    pub fn request(&self, meta: Option<M>) -> Self {
        RequestState {
            config: self.config.clone(),
            initialized: true,
            data: self.data_after_reset(),
            error: if self.config.clear_error {
                None
            } else {
                self.error.clone()
            },
            pending: true,
            meta: meta.or_else(|| self.meta.clone()),
        }
    }

    /// Store the payload of a finished operation and clear any error.
    pub fn succeeded(&self, data: D, meta: Option<M>) -> Self {
        RequestState {
            config: self.config.clone(),
            initialized: true,
            data: Some(data),
            error: None,
            pending: false,
            meta: meta.or_else(|| self.meta.clone()),
        }
    }

    /// Store the error of a finished operation.
    pub fn failed(&self, error: E, meta: Option<M>) -> Self {
        RequestState {
            config: self.config.clone(),
            initialized: true,
            data: self.data_after_reset(),
            error: Some(error),
            pending: false,
            meta: meta.or_else(|| self.meta.clone()),
        }
    }

    fn data_after_reset(&self) -> Option<D> {
        if self.config.clear_data {
            self.config.initial_data.clone()
        } else {
            self.data.clone()
        }
    }
}
