use serde::{Deserialize, Deserializer};

/// Deserialize a field that is present as `Some`, even when its value is `null`.
///
/// Paired with `#[serde(default, skip_serializing_if = "Option::is_none")]`,
/// an absent key reads as `None` while `Some(())` or `Some(Value::Null)`
/// survive a round trip.
pub fn deserialize_present<'de, De, T>(deserializer: De) -> Result<Option<T>, De::Error>
where
    De: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
