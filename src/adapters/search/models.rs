//! Structured search API models
//!
//! Only the envelope is typed. Result items stay as raw JSON because their
//! schema is undocumented; field extraction happens in
//! [`crate::core::transform`].

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Top-level response of the Google Maps structured search
///
/// The body must be a JSON object. Any other top-level shape, including an
/// array, is rejected rather than read as an empty or partial result list.
#[derive(Debug)]
pub struct SearchResponse {
    /// Listing items; absent and `null` both mean "no results"
    pub results: Vec<Value>,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<'de> Deserialize<'de> for SearchResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut envelope = Map::<String, Value>::deserialize(deserializer)?;

        let results = match envelope.remove("results") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(D::Error::custom(
                    "invalid type for `results`: expected an array",
                ))
            }
        };

        Ok(Self { results })
    }
}
