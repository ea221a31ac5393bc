//! Abbreviation engine for comparing long texts
//!
//! Two texts, a subject (actual) and a model (expected), are shortened so
//! that only their differences and a little surrounding context remain:
//! unchanged runs of lines collapse into boundary brackets around an
//! ellipsis, long lines are cropped around their in-line differences, and
//! retained lines may be prefixed with their original line numbers. A line
//! differ comparing the abbreviated texts reports the same differences as it
//! would for the originals.
//!
//! # Architecture
//!
//! - [`ellipsis`], [`numbering`], [`text`]: leaf formatting helpers
//! - [`crop`]: single-line cropping with self-referential budgets
//! - [`collapse`]: per-role collapsing of line runs
//! - [`abbreviator`]: the orchestrator walking delta groups
//!
//! Computing the delta groups is left to a [`LineDiffer`].
//!
//! # Example
//!
//! ```rust
//! use crumpler_core::{Abbreviator, CollapseConfig, DeltaGroup};
//!
//! let abbreviator = Abbreviator::new(CollapseConfig::default()).unwrap();
//! let groups = vec![
//!     DeltaGroup::common(vec!["same"]),
//!     DeltaGroup::removed(vec!["old"]),
//!     DeltaGroup::added(vec!["new"]),
//! ];
//! let result = abbreviator.abbreviate_groups("same\nnew", "same\nold", &groups);
//! assert_eq!(result.subject, "1:same\n2:new");
//! assert_eq!(result.model, "1:same\n2:old");
//! assert_eq!(result.line_number_delim.as_deref(), Some(":"));
//! ```

#![warn(missing_docs)]

pub mod abbreviator;
pub mod collapse;
pub mod config;
pub mod crop;
pub mod delta;
pub mod ellipsis;
pub mod error;
pub mod numbering;
pub mod text;

pub use abbreviator::{Abbreviated, Abbreviation, Abbreviator};
pub use collapse::{LineRenderer, RunCollapser};
pub use config::{defaults, CollapseConfig, NumberingConfig, Role, RoleConfig};
pub use crop::{crop_tail, CropLimits, LineCropper};
pub use delta::{line_pair_hints, DeltaGroup, DeltaTag, DiffHint, LineDiffer, LinePairHints};
pub use ellipsis::{digit_count, EllipsisSpec};
pub use error::{CoreError, Result};
pub use numbering::NumberingPolicy;
