//! Data Transfer Objects for API

pub use crumpler_core::{Abbreviated, Abbreviation};

#[cfg(feature = "serde")]
pub use self::values::{Comparison, ValueAbbreviation};

#[cfg(feature = "serde")]
mod values {
    use crate::error::Result;
    use serde_json::Value;

    /// A pair of values to compare, as read from JSON
    #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
    pub struct Comparison {
        /// Actual value
        pub subject: Value,
        /// Expected value
        pub model: Value,
    }

    impl Comparison {
        /// Create a comparison
        pub fn new(subject: impl Into<Value>, model: impl Into<Value>) -> Self {
            Self {
                subject: subject.into(),
                model: model.into(),
            }
        }

        /// Parse a `{"subject": ..., "model": ...}` document
        pub fn from_json(json: &str) -> Result<Self> {
            Ok(serde_json::from_str(json)?)
        }
    }

    /// Abbreviated comparison values
    ///
    /// A subject that is not a string is carried through unchanged.
    #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ValueAbbreviation {
        /// Abbreviated actual value
        pub subject: Value,
        /// Abbreviated expected text
        pub model: String,
        /// Delimiter following line numbers, present only when lines were numbered
        pub line_number_delim: Option<String>,
    }

    impl ValueAbbreviation {
        /// Serialize to a JSON string
        pub fn to_json(&self) -> Result<String> {
            Ok(serde_json::to_string(self)?)
        }
    }
}
