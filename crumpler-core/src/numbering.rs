//! Line numbering
//!
//! Retained lines may be prefixed with their line number in the original
//! text. When two texts are compared, both share a single field width so
//! that their numbered lines stay aligned.

use crate::ellipsis::digit_count;

/// Active numbering for one abbreviation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberingPolicy {
    /// Left-padding character, or `None` for unpadded numbers
    pub pad_char: Option<char>,
    /// Text following each line number
    pub delimiter: String,
    /// Digit width of the largest line number across the compared texts
    pub field_width: usize,
    /// Whether collapse ellipses are indented under the number column
    pub indent_ellipsis: bool,
}

impl NumberingPolicy {
    /// Policy for texts whose largest line count is `max_line_count`
    pub fn for_line_count(
        pad_char: Option<char>,
        delimiter: impl Into<String>,
        indent_ellipsis: bool,
        max_line_count: usize,
    ) -> Self {
        Self {
            pad_char,
            delimiter: delimiter.into(),
            field_width: digit_count(max_line_count),
            indent_ellipsis,
        }
    }

    /// The prefix to place before line `line_number`
    pub fn prefix_for(&self, line_number: usize) -> String {
        let number = line_number.to_string();
        let mut prefix = String::with_capacity(self.field_width + self.delimiter.len());
        if let Some(pad) = self.pad_char {
            prefix.push_str(&padding(pad, self.field_width.saturating_sub(number.len())));
        }
        prefix.push_str(&number);
        prefix.push_str(&self.delimiter);
        prefix
    }

    /// Width in chars of the prefix for `line_number`
    pub fn prefix_width(&self, line_number: usize) -> usize {
        let digits = digit_count(line_number);
        let number_width = match self.pad_char {
            Some(_) => digits.max(self.field_width),
            None => digits,
        };
        number_width + self.delimiter.chars().count()
    }

    /// Indentation for ellipsis lines following line `preceding_line_number`
    ///
    /// Empty unless `indent_ellipsis` is set, in which case the indent spans
    /// the prefix width of the last line of the preceding bracket.
    pub fn ellipsis_indent(&self, preceding_line_number: usize) -> String {
        if !self.indent_ellipsis {
            return String::new();
        }
        padding(' ', self.prefix_width(preceding_line_number))
    }
}

/// A run of `width` copies of `pad`
pub fn padding(pad: char, width: usize) -> String {
    std::iter::repeat(pad).take(width).collect()
}
