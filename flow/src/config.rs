//! RequestConfig - Construction-Time Options
//!
//! A config is captured once when a record is created and carried forward
//! unchanged by every transition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::serde_helpers::deserialize_present;

/// Options controlling which fields a transition resets.
///
/// Every field is optional when deserialized: omitted flags are `false`
/// and an omitted `initial_data` is `None`. An explicit `null` is kept as
/// `Some`, so `RequestConfig<()>` can start a record at a null payload.
///
/// # Example
/// ```rust
/// use reqstate_flow::RequestConfig;
///
/// let config = RequestConfig::new()
///     .clear_data(true)
///     .initial_data(Vec::<u32>::new());
///
/// assert!(config.clear_data);
/// assert!(!config.clear_error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(bound(deserialize = "D: Deserialize<'de>"))]
pub struct RequestConfig<D> {
    /// Reset `data` to `initial_data` on `request` and `failed`
    #[serde(default, alias = "clearData")]
    pub clear_data: bool,
    /// Reset `error` on `request`
    #[serde(default, alias = "clearError")]
    pub clear_error: bool,
    /// Value `data` starts at and is reset to
    #[serde(
        default,
        alias = "initialData",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    #[schemars(with = "Option<D>")]
    pub initial_data: Option<D>,
}

impl<D> RequestConfig<D> {
    /// Config with every option at its default
    pub fn new() -> Self {
        RequestConfig {
            clear_data: false,
            clear_error: false,
            initial_data: None,
        }
    }

    pub fn clear_data(mut self, clear: bool) -> Self {
        self.clear_data = clear;
        self
    }

    pub fn clear_error(mut self, clear: bool) -> Self {
        self.clear_error = clear;
        self
    }

    pub fn initial_data(mut self, data: D) -> Self {
        self.initial_data = Some(data);
        self
    }
}

impl<D> Default for RequestConfig<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RequestConfig::<String>::default();
        assert!(!config.clear_data);
        assert!(!config.clear_error);
        assert_eq!(config.initial_data, None);
    }

    #[test]
    fn test_partial_deserialize() {
        let config: RequestConfig<Vec<u32>> =
            serde_json::from_str(r#"{ "clearData": true, "initial_data": [] }"#).unwrap();

        assert!(config.clear_data);
        assert!(!config.clear_error);
        assert_eq!(config.initial_data, Some(vec![]));
    }

    #[test]
    fn test_null_initial_data_is_present() {
        let config: RequestConfig<()> =
            serde_json::from_str(r#"{ "initialData": null }"#).unwrap();
        assert_eq!(config.initial_data, Some(()));

        let json = serde_json::to_string(&RequestConfig::<()>::new()).unwrap();
        let back: RequestConfig<()> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.initial_data, None);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config: RequestConfig<String> = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RequestConfig::default());
    }
}
