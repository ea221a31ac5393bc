//! Engine configuration
//!
//! Each role (common, subject-only, model-only lines) carries its own
//! bracket size and collapse ellipsis; cropping and numbering settings are
//! shared by all roles.

use crate::crop::CropLimits;
use crate::ellipsis::EllipsisSpec;
use crate::error::{CoreError, Result};

/// Default configuration constants
pub mod defaults {
    /// Lines kept on each side of a collapse
    pub const BRACKET_SIZE: usize = 2;
    /// Fewest lines a collapse may remove
    pub const MIN_COLLAPSED_LINES: usize = 2;
    /// Collapse ellipsis for common lines
    pub const COMMON_COLLAPSE_ELLIPSIS: &str = " ...";
    /// Collapse ellipsis for model-only lines
    pub const MODEL_COLLAPSE_ELLIPSIS: &str = "  ...";
    /// Collapse ellipsis for subject-only lines
    pub const SUBJECT_COLLAPSE_ELLIPSIS: &str = "   ...";
    /// Replaces chars cropped from the start of a line
    pub const HEAD_CROP_ELLIPSIS: &str = "[{n} chars...]";
    /// Replaces chars cropped from the end of a line
    pub const TAIL_CROP_ELLIPSIS: &str = "[...{n} chars]";
    /// Fewest lines a text needs before its lines are numbered
    pub const MIN_NUMBERED_LINES: usize = 2;
    /// Text following each line number
    pub const LINE_NUMBER_DELIM: &str = ":";
}

/// Which text a run of lines belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Role {
    /// Lines shared by both texts, or a lone text
    Common,
    /// Lines found only in the subject
    SubjectOnly,
    /// Lines found only in the model
    ModelOnly,
}

/// Collapse settings for one role
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoleConfig {
    /// Lines retained before and after a collapse; 0 disables collapsing
    pub bracket_size: usize,
    /// Fewest interior lines a collapse must remove
    pub min_collapsed_lines: usize,
    /// Replacement for the collapsed lines
    pub ellipsis: EllipsisSpec,
    /// Longest line, including number and ellipses; 0 = unlimited
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_line_length: usize,
}

impl RoleConfig {
    /// Create role settings without a line length limit
    pub fn new(
        bracket_size: usize,
        min_collapsed_lines: usize,
        ellipsis: impl Into<EllipsisSpec>,
    ) -> Self {
        Self {
            bracket_size,
            min_collapsed_lines,
            ellipsis: ellipsis.into(),
            max_line_length: 0,
        }
    }

    /// Limit the length of this role's lines
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }
}

/// Line numbering settings
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberingConfig {
    /// Fewest lines a text needs to be numbered; 0 disables numbering
    pub min_numbered_lines: usize,
    /// Left-padding character for numbers
    pub padding: Option<char>,
    /// Text following each number
    pub delimiter: String,
    /// Indent collapse ellipses under the number column
    pub indent_ellipsis: bool,
}

impl Default for NumberingConfig {
    fn default() -> Self {
        Self {
            min_numbered_lines: defaults::MIN_NUMBERED_LINES,
            padding: None,
            delimiter: defaults::LINE_NUMBER_DELIM.to_string(),
            indent_ellipsis: false,
        }
    }
}

impl NumberingConfig {
    /// Whether a comparison whose texts have these line counts is numbered
    pub fn applies_to(&self, line_counts: &[usize]) -> bool {
        self.min_numbered_lines > 0
            && line_counts
                .iter()
                .any(|&count| count >= self.min_numbered_lines)
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollapseConfig {
    /// Settings for common lines
    pub common: RoleConfig,
    /// Settings for subject-only lines
    pub subject_only: RoleConfig,
    /// Settings for model-only lines
    pub model_only: RoleConfig,
    /// Replaces chars cropped from the start of a line
    pub head_crop_ellipsis: EllipsisSpec,
    /// Replaces chars cropped from the end of a line
    pub tail_crop_ellipsis: EllipsisSpec,
    /// Cropping around in-line differences
    pub limits: CropLimits,
    /// Line numbering
    pub numbering: NumberingConfig,
}

impl Default for CollapseConfig {
    fn default() -> Self {
        Self {
            common: RoleConfig::new(
                defaults::BRACKET_SIZE,
                defaults::MIN_COLLAPSED_LINES,
                defaults::COMMON_COLLAPSE_ELLIPSIS,
            ),
            subject_only: RoleConfig::new(
                defaults::BRACKET_SIZE,
                defaults::MIN_COLLAPSED_LINES,
                defaults::SUBJECT_COLLAPSE_ELLIPSIS,
            ),
            model_only: RoleConfig::new(
                defaults::BRACKET_SIZE,
                defaults::MIN_COLLAPSED_LINES,
                defaults::MODEL_COLLAPSE_ELLIPSIS,
            ),
            head_crop_ellipsis: EllipsisSpec::from_template(defaults::HEAD_CROP_ELLIPSIS),
            tail_crop_ellipsis: EllipsisSpec::from_template(defaults::TAIL_CROP_ELLIPSIS),
            limits: CropLimits::default(),
            numbering: NumberingConfig::default(),
        }
    }
}

impl CollapseConfig {
    /// Settings for `role`
    pub fn role(&self, role: Role) -> &RoleConfig {
        match role {
            Role::Common => &self.common,
            Role::SubjectOnly => &self.subject_only,
            Role::ModelOnly => &self.model_only,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (name, role) in [
            ("common", &self.common),
            ("subject_only", &self.subject_only),
            ("model_only", &self.model_only),
        ] {
            if role.min_collapsed_lines < 1 {
                return Err(CoreError::Configuration(format!(
                    "{name}: min_collapsed_lines must be >= 1"
                )));
            }
        }

        let templates = [
            self.common.ellipsis.template(),
            self.subject_only.ellipsis.template(),
            self.model_only.ellipsis.template(),
        ];
        if templates[0] == templates[1]
            || templates[0] == templates[2]
            || templates[1] == templates[2]
        {
            tracing::warn!(
                "collapse ellipses are not distinct; diffs of abbreviated text may hide collapses"
            );
        }

        Ok(())
    }
}
