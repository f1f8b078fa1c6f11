//! Reqstate Flow - Request Lifecycle Layer
//!
//! This crate defines the **structural** aspects of reqstate:
//! - `RequestState`: the lifecycle record and its transitions
//! - `RequestConfig`: construction-time options
//! - `Transition`: the transition contract, implemented by `RequestEvent`
//!
//! **IMPORTANT**: This layer is Pure Rust - no IO, no Async.

pub mod config;
mod serde_helpers;
pub mod state;
pub mod transition;

pub use config::RequestConfig;
pub use state::{Phase, RequestState};
pub use transition::{RequestEvent, Transition, TransitionKind};

/// The four request-state operations as free functions.
///
/// ```rust
/// use reqstate_flow::{RequestConfig, request_state};
///
/// let idle = request_state::create::<String, (), String>(RequestConfig::new());
/// let pending = request_state::request(&idle, None);
/// let failed = request_state::failed(&pending, "timeout".to_string(), None);
/// assert!(failed.has_failed());
/// ```
pub mod request_state {
    use crate::{RequestConfig, RequestState};

    pub fn create<D: Clone, M, E>(config: RequestConfig<D>) -> RequestState<D, M, E> {
        RequestState::new(config)
    }

    pub fn request<D: Clone, M: Clone, E: Clone>(
        state: &RequestState<D, M, E>,
        meta: Option<M>,
    ) -> RequestState<D, M, E> {
        state.request(meta)
    }

    pub fn succeeded<D: Clone, M: Clone, E: Clone>(
        state: &RequestState<D, M, E>,
        data: D,
        meta: Option<M>,
    ) -> RequestState<D, M, E> {
        state.succeeded(data, meta)
    }

    pub fn failed<D: Clone, M: Clone, E: Clone>(
        state: &RequestState<D, M, E>,
        error: E,
        meta: Option<M>,
    ) -> RequestState<D, M, E> {
        state.failed(error, meta)
    }

}
