//! Ellipsis templates
//!
//! An ellipsis is the text that stands in for removed lines or removed
//! characters. A template may embed one `{n}` placeholder, which is replaced
//! by the number of lines or characters removed.

use std::fmt;

/// Placeholder substituted with the removed count
pub const COUNT_PLACEHOLDER: &str = "{n}";

/// Number of decimal digits needed to print `value`
pub fn digit_count(value: usize) -> usize {
    if value < 100 {
        return if value < 10 { 1 } else { 2 };
    }
    if value < 10_000 {
        return if value < 1_000 { 3 } else { 4 };
    }
    let mut digits = 5;
    let mut rest = value / 100_000;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }
    digits
}

/// A parsed ellipsis template
///
/// The fixed length (template length without the placeholder) and whether
/// a count is embedded are computed once, so the rendered length for any
/// count is known without rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct EllipsisSpec {
    template: String,
    fixed_length: usize,
    has_count: bool,
}

impl EllipsisSpec {
    /// Parse a template
    pub fn from_template(template: impl Into<String>) -> Self {
        let template = template.into();
        let has_count = template.contains(COUNT_PLACEHOLDER);
        let fixed_length = if has_count {
            template.chars().count() - COUNT_PLACEHOLDER.len()
        } else {
            template.chars().count()
        };
        Self {
            template,
            fixed_length,
            has_count,
        }
    }

    /// The raw template
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Length of the template with the placeholder removed
    pub fn fixed_length(&self) -> usize {
        self.fixed_length
    }

    /// Whether the template reports a count
    pub fn has_count(&self) -> bool {
        self.has_count
    }

    /// Render the template for `count` removed units
    pub fn render(&self, count: usize) -> String {
        render_template(&self.template, self.has_count, count)
    }

    /// Length in chars of `render(count)`
    pub fn rendered_len(&self, count: usize) -> usize {
        if self.has_count {
            self.fixed_length + digit_count(count)
        } else {
            self.fixed_length
        }
    }

    /// Whether removing `removed` chars in favor of this ellipsis shortens
    /// the text. A crop must remove strictly more than it inserts.
    pub fn pays_for(&self, removed: usize) -> bool {
        removed > self.rendered_len(removed)
    }

    /// Solve for the skip length `s` satisfying `s - rendered_len(s) == exposed`.
    ///
    /// `exposed` is the net number of columns a head crop must free. The
    /// digit width of `s` feeds back into the ellipsis length, so the first
    /// estimate is corrected when its digit count grows; the loop is bounded
    /// because each pass can only add digits the estimate lacked.
    pub fn skip_freeing(&self, exposed: usize) -> usize {
        let base = exposed + self.fixed_length;
        if !self.has_count {
            return base;
        }
        let mut digits = digit_count(base + 1);
        let mut skip = base + digits;
        for _ in 0..2 {
            let actual = digit_count(skip);
            if actual <= digits {
                break;
            }
            skip += actual - digits;
            digits = actual;
        }
        skip
    }
}

impl From<String> for EllipsisSpec {
    fn from(template: String) -> Self {
        Self::from_template(template)
    }
}

impl From<&str> for EllipsisSpec {
    fn from(template: &str) -> Self {
        Self::from_template(template)
    }
}

impl From<EllipsisSpec> for String {
    fn from(spec: EllipsisSpec) -> Self {
        spec.template
    }
}

impl fmt::Display for EllipsisSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

/// Substitute the first placeholder of `template` with `count`
pub(crate) fn render_template(template: &str, has_count: bool, count: usize) -> String {
    if has_count {
        template.replacen(COUNT_PLACEHOLDER, &count.to_string(), 1)
    } else {
        template.to_string()
    }
}
