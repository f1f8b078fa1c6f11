//! Reqstate Core
//!
//! Ambient support around the pure `reqstate-flow` layer: config loading,
//! tracing decorators for transitions, and a lifecycle timeline.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod timeline;

pub use config::{config_schema, from_json_str, from_toml_str, load_config};
pub use error::{ConfigError, ConfigResult};
pub use telemetry::{Lifecycle, Traced, init_stdout_tracing};
pub use timeline::{Timeline, TimelineEvent};

pub mod prelude {
    pub use crate::config::load_config;
    pub use crate::error::{ConfigError, ConfigResult};
    pub use crate::telemetry::{Lifecycle, Traced};
    pub use crate::timeline::{Timeline, TimelineEvent};

    pub use reqstate_flow::{
        Phase, RequestConfig, RequestEvent, RequestState, Transition, TransitionKind,
        request_state,
    };
}
