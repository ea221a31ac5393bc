//! Public API for Crumpler text abbreviation
//!
//! This crate wraps the abbreviation engine with user-facing configuration,
//! a `similar`-backed line differ and comparison of dynamic values.
//!
//! ```rust
//! use crumpler_api::{Config, Crumpler};
//!
//! let config = Config::builder().bracket_size(1).min_numbered_lines(0).build()?;
//! let crumpler = Crumpler::with_config(config)?;
//!
//! let model = "a\nb\nc\nd\ne\nf";
//! let subject = "a\nb\nc\nd\ne\nF";
//! let result = crumpler.shorten_diff(subject, model);
//! assert_eq!(result.model, "a\n ...\ne\nf");
//! assert_eq!(result.subject, "a\n ...\ne\nF");
//! # Ok::<(), crumpler_api::ApiError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod differ;
pub mod dto;
pub mod error;

use crumpler_core::{Abbreviator, LineDiffer};
use error::Result;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use differ::SimilarDiffer;
pub use dto::{Abbreviated, Abbreviation};
pub use error::ApiError;

#[cfg(feature = "serde")]
pub use dto::{Comparison, ValueAbbreviation};

/// Main entry point for abbreviating texts
///
/// Instances are immutable after construction and may be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct Crumpler<D = SimilarDiffer> {
    abbreviator: Abbreviator,
    differ: D,
    config: Config,
}

impl Crumpler {
    /// Create a crumpler with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a crumpler with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Self::with_differ(config, SimilarDiffer::default())
    }
}

impl<D: LineDiffer> Crumpler<D> {
    /// Create a crumpler computing delta groups with `differ`
    pub fn with_differ(config: Config, differ: D) -> Result<Self> {
        let abbreviator = Abbreviator::new(config.to_collapse_config()?)?;
        Ok(Self {
            abbreviator,
            differ,
            config,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Abbreviate `subject` and `model` so that only their differences and
    /// some surrounding context remain
    pub fn shorten_diff(&self, subject: &str, model: &str) -> Abbreviation {
        self.abbreviator.abbreviate_diff(subject, model, &self.differ)
    }

    /// Collapse, crop and number a lone text
    pub fn shorten_text(&self, text: &str) -> Abbreviated {
        self.abbreviator.abbreviate_text(text, None)
    }

    /// Shorten a lone text with a line length limit other than the configured one
    pub fn shorten_text_with(&self, text: &str, max_line_length: usize) -> Abbreviated {
        self.abbreviator.abbreviate_text(text, Some(max_line_length))
    }

    /// Crop and number a lone text without collapsing lines
    pub fn shorten_lines(&self, text: &str) -> Abbreviated {
        self.abbreviator.abbreviate_lines(text, None)
    }

    /// Crop and number lines with a line length limit other than the configured one
    pub fn shorten_lines_with(&self, text: &str, max_line_length: usize) -> Abbreviated {
        self.abbreviator.abbreviate_lines(text, Some(max_line_length))
    }

    /// Abbreviate dynamic comparison values.
    ///
    /// The model must be a string. A subject that is not a string is
    /// returned unchanged and the model is shortened on its own.
    #[cfg(feature = "serde")]
    pub fn shorten_values(
        &self,
        subject: &serde_json::Value,
        model: &serde_json::Value,
    ) -> Result<ValueAbbreviation> {
        use serde_json::Value;

        let Value::String(model) = model else {
            let message = "model value must be a string".to_string();
            return Err(crumpler_core::CoreError::InvalidInput(message).into());
        };
        match subject {
            Value::String(subject) => {
                let abbreviation = self.shorten_diff(subject, model);
                Ok(ValueAbbreviation {
                    subject: Value::String(abbreviation.subject),
                    model: abbreviation.model,
                    line_number_delim: abbreviation.line_number_delim,
                })
            }
            other => {
                tracing::debug!("subject is not a string, shortening model only");
                let shortened = self.shorten_text(model);
                Ok(ValueAbbreviation {
                    subject: other.clone(),
                    model: shortened.text,
                    line_number_delim: shortened.line_number_delim,
                })
            }
        }
    }

    /// Abbreviate a parsed [`Comparison`]
    #[cfg(feature = "serde")]
    pub fn shorten_comparison(&self, comparison: &Comparison) -> Result<ValueAbbreviation> {
        self.shorten_values(&comparison.subject, &comparison.model)
    }
}

// Convenience functions

/// Abbreviate two texts with default configuration
pub fn shorten_diff(subject: &str, model: &str) -> Result<Abbreviation> {
    let crumpler = Crumpler::new()?;
    Ok(crumpler.shorten_diff(subject, model))
}

/// Abbreviate a lone text with default configuration
pub fn shorten_text(text: &str) -> Result<Abbreviated> {
    let crumpler = Crumpler::new()?;
    Ok(crumpler.shorten_text(text))
}
