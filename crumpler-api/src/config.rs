//! High-level configuration API
//!
//! [`Config`] exposes the abbreviation options under their user-facing
//! names, with unlimited same-limits written as `-1`. It converts into the
//! engine's [`CollapseConfig`].

use crate::error::{ApiError, Result};
use crumpler_core::{
    defaults, CollapseConfig, CropLimits, EllipsisSpec, NumberingConfig, RoleConfig,
};

/// Abbreviation options
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Config {
    /// Lines kept on each side of a collapse of common lines; 0 disables
    pub norm_bracket_size: usize,
    /// Lines kept on each side of a collapse of added or removed lines; 0 disables
    pub diff_bracket_size: usize,
    /// Fewest lines a collapse may remove; at least 1
    pub min_collapsed_lines: usize,
    /// Longest common or lone-text line, numbers included; 0 = unlimited
    pub max_norm_line_length: usize,
    /// Longest added or removed line, numbers included; 0 = unlimited
    pub max_line_diff_length: usize,
    /// Differing chars shown before the rest of a changed line is cropped; 0 = unlimited
    pub max_diff_length: usize,
    /// Common chars shown before an in-line difference; -1 centers it
    pub same_head_length_limit: i64,
    /// Common chars shown after an in-line difference; -1 = unlimited
    pub same_tail_length_limit: i64,
    /// Collapse ellipsis for common lines
    pub norm_collapse_ellipsis: String,
    /// Collapse ellipsis for lines only in the subject
    pub subject_collapse_ellipsis: String,
    /// Collapse ellipsis for lines only in the model
    pub model_collapse_ellipsis: String,
    /// Replaces chars cropped from the start of a line
    pub head_crop_ellipsis: String,
    /// Replaces chars cropped from the end of a line
    pub tail_crop_ellipsis: String,
    /// Indent collapse ellipses under the line number column
    pub indent_collapse_ellipses: bool,
    /// Fewest lines a text needs to be numbered; 0 disables numbering
    pub min_numbered_lines: usize,
    /// Single padding character for line numbers; empty or absent for none
    pub line_number_padding: Option<String>,
    /// Text following each line number
    pub line_number_delim: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            norm_bracket_size: defaults::BRACKET_SIZE,
            diff_bracket_size: defaults::BRACKET_SIZE,
            min_collapsed_lines: defaults::MIN_COLLAPSED_LINES,
            max_norm_line_length: 0,
            max_line_diff_length: 0,
            max_diff_length: 0,
            same_head_length_limit: -1,
            same_tail_length_limit: -1,
            norm_collapse_ellipsis: defaults::COMMON_COLLAPSE_ELLIPSIS.to_string(),
            subject_collapse_ellipsis: defaults::SUBJECT_COLLAPSE_ELLIPSIS.to_string(),
            model_collapse_ellipsis: defaults::MODEL_COLLAPSE_ELLIPSIS.to_string(),
            head_crop_ellipsis: defaults::HEAD_CROP_ELLIPSIS.to_string(),
            tail_crop_ellipsis: defaults::TAIL_CROP_ELLIPSIS.to_string(),
            indent_collapse_ellipses: false,
            min_numbered_lines: defaults::MIN_NUMBERED_LINES,
            line_number_padding: None,
            line_number_delim: defaults::LINE_NUMBER_DELIM.to_string(),
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a configuration from TOML; omitted options take their defaults
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    #[cfg(feature = "serde")]
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check the options without building an engine
    pub fn validate(&self) -> Result<()> {
        self.to_collapse_config()?.validate()?;
        Ok(())
    }

    /// Convert to the engine configuration
    pub fn to_collapse_config(&self) -> Result<CollapseConfig> {
        let diff_role = |ellipsis: &str| {
            RoleConfig::new(self.diff_bracket_size, self.min_collapsed_lines, ellipsis)
                .with_max_line_length(self.max_line_diff_length)
        };

        Ok(CollapseConfig {
            common: RoleConfig::new(
                self.norm_bracket_size,
                self.min_collapsed_lines,
                self.norm_collapse_ellipsis.as_str(),
            )
            .with_max_line_length(self.max_norm_line_length),
            subject_only: diff_role(self.subject_collapse_ellipsis.as_str()),
            model_only: diff_role(self.model_collapse_ellipsis.as_str()),
            head_crop_ellipsis: EllipsisSpec::from_template(self.head_crop_ellipsis.as_str()),
            tail_crop_ellipsis: EllipsisSpec::from_template(self.tail_crop_ellipsis.as_str()),
            limits: CropLimits {
                same_head_limit: usize::try_from(self.same_head_length_limit).ok(),
                same_tail_limit: usize::try_from(self.same_tail_length_limit).ok(),
                max_diff_line_length: self.max_diff_length,
            },
            numbering: NumberingConfig {
                min_numbered_lines: self.min_numbered_lines,
                padding: self.padding_char()?,
                delimiter: self.line_number_delim.clone(),
                indent_ellipsis: self.indent_collapse_ellipses,
            },
        })
    }

    fn padding_char(&self) -> Result<Option<char>> {
        let Some(padding) = self.line_number_padding.as_deref() else {
            return Ok(None);
        };
        let mut chars = padding.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(None),
            (Some(pad), None) => Ok(Some(pad)),
            _ => Err(ApiError::Config(format!(
                "line_number_padding must be a single character, got {padding:?}"
            ))),
        }
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the bracket size for every role
    pub fn bracket_size(mut self, size: usize) -> Self {
        self.config.norm_bracket_size = size;
        self.config.diff_bracket_size = size;
        self
    }

    /// Set the bracket size for common lines
    pub fn norm_bracket_size(mut self, size: usize) -> Self {
        self.config.norm_bracket_size = size;
        self
    }

    /// Set the bracket size for added and removed lines
    pub fn diff_bracket_size(mut self, size: usize) -> Self {
        self.config.diff_bracket_size = size;
        self
    }

    /// Set the fewest lines a collapse may remove
    pub fn min_collapsed_lines(mut self, lines: usize) -> Self {
        self.config.min_collapsed_lines = lines;
        self
    }

    /// Set the line length limit for every role
    pub fn max_line_length(mut self, length: usize) -> Self {
        self.config.max_norm_line_length = length;
        self.config.max_line_diff_length = length;
        self
    }

    /// Set the line length limit for common lines and lone texts
    pub fn max_norm_line_length(mut self, length: usize) -> Self {
        self.config.max_norm_line_length = length;
        self
    }

    /// Set the line length limit for added and removed lines
    pub fn max_line_diff_length(mut self, length: usize) -> Self {
        self.config.max_line_diff_length = length;
        self
    }

    /// Set the differing chars shown before a changed line is cropped
    pub fn max_diff_length(mut self, length: usize) -> Self {
        self.config.max_diff_length = length;
        self
    }

    /// Set the common chars shown before a difference; `None` centers it
    pub fn same_head_length_limit(mut self, limit: Option<usize>) -> Self {
        self.config.same_head_length_limit = limit_value(limit);
        self
    }

    /// Set the common chars shown after a difference; `None` keeps them all
    pub fn same_tail_length_limit(mut self, limit: Option<usize>) -> Self {
        self.config.same_tail_length_limit = limit_value(limit);
        self
    }

    /// Set the collapse ellipsis for common lines
    pub fn norm_collapse_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.config.norm_collapse_ellipsis = ellipsis.into();
        self
    }

    /// Set the collapse ellipsis for subject-only lines
    pub fn subject_collapse_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.config.subject_collapse_ellipsis = ellipsis.into();
        self
    }

    /// Set the collapse ellipsis for model-only lines
    pub fn model_collapse_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.config.model_collapse_ellipsis = ellipsis.into();
        self
    }

    /// Set the ellipsis for chars cropped from the start of a line
    pub fn head_crop_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.config.head_crop_ellipsis = ellipsis.into();
        self
    }

    /// Set the ellipsis for chars cropped from the end of a line
    pub fn tail_crop_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.config.tail_crop_ellipsis = ellipsis.into();
        self
    }

    /// Indent collapse ellipses under the number column
    pub fn indent_collapse_ellipses(mut self, indent: bool) -> Self {
        self.config.indent_collapse_ellipses = indent;
        self
    }

    /// Set the fewest lines a text needs to be numbered
    pub fn min_numbered_lines(mut self, lines: usize) -> Self {
        self.config.min_numbered_lines = lines;
        self
    }

    /// Pad line numbers with `pad`
    pub fn line_number_padding(mut self, pad: char) -> Self {
        self.config.line_number_padding = Some(pad.to_string());
        self
    }

    /// Set the text following each line number
    pub fn line_number_delim(mut self, delim: impl Into<String>) -> Self {
        self.config.line_number_delim = delim.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

fn limit_value(limit: Option<usize>) -> i64 {
    limit.map_or(-1, |limit| i64::try_from(limit).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crumpler_core::CoreError;

    #[test]
    fn test_default_matches_engine_defaults() {
        let collapse = Config::default().to_collapse_config().unwrap();
        assert_eq!(collapse, CollapseConfig::default());
    }

    #[test]
    fn test_unlimited_same_limits() {
        let collapse = Config::builder()
            .same_head_length_limit(Some(5))
            .build()
            .unwrap()
            .to_collapse_config()
            .unwrap();
        assert_eq!(collapse.limits.same_head_limit, Some(5));
        assert_eq!(collapse.limits.same_tail_limit, None);

        let config = Config {
            same_tail_length_limit: -7,
            ..Default::default()
        };
        assert_eq!(config.to_collapse_config().unwrap().limits.same_tail_limit, None);
    }

    #[test]
    fn test_role_specific_settings() {
        let collapse = Config::builder()
            .norm_bracket_size(3)
            .diff_bracket_size(1)
            .max_norm_line_length(80)
            .max_line_diff_length(120)
            .build()
            .unwrap()
            .to_collapse_config()
            .unwrap();
        assert_eq!(collapse.common.bracket_size, 3);
        assert_eq!(collapse.common.max_line_length, 80);
        assert_eq!(collapse.subject_only.bracket_size, 1);
        assert_eq!(collapse.model_only.max_line_length, 120);
        assert_eq!(collapse.subject_only.ellipsis.template(), "   ...");
    }

    #[test]
    fn test_build_rejects_zero_min_collapsed_lines() {
        match Config::builder().min_collapsed_lines(0).build() {
            Err(ApiError::Core(CoreError::Configuration(msg))) => {
                assert!(msg.contains("min_collapsed_lines"));
            }
            other => panic!("Expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_padding_must_be_single_char() {
        let empty = Config {
            line_number_padding: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(empty.to_collapse_config().unwrap().numbering.padding, None);

        let zero = Config::builder().line_number_padding('0').build().unwrap();
        assert_eq!(zero.to_collapse_config().unwrap().numbering.padding, Some('0'));

        let wide = Config {
            line_number_padding: Some("00".to_string()),
            ..Default::default()
        };
        match wide.validate() {
            Err(ApiError::Config(msg)) => assert!(msg.contains("single character")),
            other => panic!("Expected configuration error, got {other:?}"),
        }
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_from_toml_str_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            diff_bracket_size = 1
            same_head_length_limit = 10
            line_number_padding = " "
            line_number_delim = ". "
            "#,
        )
        .unwrap();
        assert_eq!(config.diff_bracket_size, 1);
        assert_eq!(config.norm_bracket_size, 2);
        assert_eq!(config.same_head_length_limit, 10);
        assert_eq!(config.same_tail_length_limit, -1);
        assert_eq!(config.line_number_delim, ". ");
        assert_eq!(config.head_crop_ellipsis, "[{n} chars...]");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_from_toml_str_rejects_unknown_option() {
        match Config::from_toml_str("bracket_sise = 2") {
            Err(ApiError::Toml(_)) => {}
            other => panic!("Expected TOML error, got {other:?}"),
        }
    }
}
