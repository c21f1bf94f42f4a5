//! Custom serde helpers for backend wire formats.

/// Deserializes an epoch-millis timestamp sent either as an integer or as a
/// JSON float (the backend's JavaScript side does not distinguish them).
pub mod epoch_ms {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Millis {
        Int(i64),
        Float(f64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Millis::deserialize(deserializer)? {
            Millis::Int(ms) => Ok(ms),
            Millis::Float(ms) if ms.is_finite() => Ok(ms.trunc() as i64),
            Millis::Float(ms) => Err(serde::de::Error::custom(format!(
                "Invalid timestamp: {}",
                ms
            ))),
        }
    }
}
