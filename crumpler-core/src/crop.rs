//! Single-line cropping
//!
//! A line that exceeds its budget loses characters from its tail, or, when
//! the position of a difference within the line is known, from its head,
//! its tail or both, keeping the difference visible. Removed characters are
//! replaced by an ellipsis that may report how many were removed, and that
//! report is itself part of the budget.

use crate::delta::DiffHint;
use crate::ellipsis::{digit_count, EllipsisSpec};
use crate::text::{char_len, char_slice};
use std::borrow::Cow;

/// Limits governing the cropping of differing lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropLimits {
    /// Common chars shown before a difference; `None` centers the difference
    pub same_head_limit: Option<usize>,
    /// Common chars shown after a difference; `None` keeps the whole tail
    pub same_tail_limit: Option<usize>,
    /// Differing chars shown before the tail is cropped; 0 = unlimited
    pub max_diff_line_length: usize,
}

/// Leading chars to keep when tail-cropping a line of `length` chars so that
/// the kept chars plus the ellipsis fit `max_length`.
///
/// Returns `None` when the line already fits or when cropping would not
/// remove more than the ellipsis adds. When even the bare ellipsis exceeds
/// `max_length`, the result is 0 and the caller shows the ellipsis alone:
/// its count tells the reader the budget is too small.
pub fn tail_keep_length(length: usize, max_length: usize, ellipsis: &EllipsisSpec) -> Option<usize> {
    if length <= max_length {
        return None;
    }
    let mut keep = max_length.saturating_sub(ellipsis.fixed_length());
    if ellipsis.has_count() {
        let mut digits = digit_count(length - max_length);
        keep = keep.saturating_sub(digits);
        for _ in 0..2 {
            let actual = digit_count(length - keep);
            if actual <= digits {
                break;
            }
            keep = keep.saturating_sub(actual - digits);
            digits = actual;
        }
    }
    if !ellipsis.pays_for(length - keep) {
        return None;
    }
    Some(keep)
}

/// Crop the tail of `line` to fit `max_length` chars including the ellipsis
pub fn crop_tail<'a>(line: &'a str, max_length: usize, ellipsis: &EllipsisSpec) -> Cow<'a, str> {
    let length = char_len(line);
    match tail_keep_length(length, max_length, ellipsis) {
        Some(keep) => {
            let mut cropped = char_slice(line, 0, keep).to_string();
            cropped.push_str(&ellipsis.render(length - keep));
            Cow::Owned(cropped)
        }
        None => Cow::Borrowed(line),
    }
}

/// Crops lines with a fixed pair of head and tail ellipses
#[derive(Debug, Clone, Copy)]
pub struct LineCropper<'a> {
    head: &'a EllipsisSpec,
    tail: &'a EllipsisSpec,
    limits: CropLimits,
}

impl<'a> LineCropper<'a> {
    /// Create a cropper
    pub fn new(head: &'a EllipsisSpec, tail: &'a EllipsisSpec, limits: CropLimits) -> Self {
        Self { head, tail, limits }
    }

    /// Tail-crop `line` to `max_length`
    pub fn crop_tail<'l>(&self, line: &'l str, max_length: usize) -> Cow<'l, str> {
        crop_tail(line, max_length, self.tail)
    }

    /// Crop `line` around the difference described by `hint`.
    ///
    /// The head and tail boundaries are first chosen from the same-limits
    /// and the maximum difference length, each applied only if its ellipsis
    /// pays for itself. If `budget` is set and the result is still too long,
    /// the tail is cut further so the whole line fits.
    pub fn crop_around_diff<'l>(
        &self,
        line: &'l str,
        hint: DiffHint,
        budget: Option<usize>,
    ) -> Cow<'l, str> {
        let length = char_len(line);
        let offset = hint.offset.min(length);

        let mut skip = self.head_skip(length, offset, budget);
        let limit_end = self.tail_boundary(length, offset, hint.length);
        let mut end = limit_end;

        if let Some(max_length) = budget {
            let head_len = if skip > 0 { self.head.rendered_len(skip) } else { 0 };
            let tail_len = if end < length {
                self.tail.rendered_len(length - end)
            } else {
                0
            };
            if head_len + (end - skip) + tail_len > max_length {
                // Treat the head ellipsis as part of the line and tail-crop that.
                let virtual_len = head_len + length - skip;
                if let Some(keep) = tail_keep_length(virtual_len, max_length, self.tail) {
                    let budget_end = (skip + keep).saturating_sub(head_len);
                    end = end.min(budget_end);
                    if skip > end {
                        skip = end;
                        // A clamped head that no longer pays for itself gives
                        // way to a plain tail crop from the start of the line.
                        if !self.head.pays_for(skip) {
                            skip = 0;
                            end = tail_keep_length(length, max_length, self.tail)
                                .map_or(limit_end, |keep| limit_end.min(keep));
                        }
                    }
                }
            }
        }

        if skip == 0 && end >= length {
            return Cow::Borrowed(line);
        }
        let mut cropped = String::new();
        if skip > 0 {
            cropped.push_str(&self.head.render(skip));
        }
        cropped.push_str(char_slice(line, skip, end));
        if end < length {
            cropped.push_str(&self.tail.render(length - end));
        }
        Cow::Owned(cropped)
    }

    /// Chars to remove from the head of a hinted line
    fn head_skip(&self, length: usize, offset: usize, budget: Option<usize>) -> usize {
        let skip = match self.limits.same_head_limit {
            Some(limit) => offset.saturating_sub(limit),
            None => match budget {
                // Center the difference, counting the head ellipsis as shown text.
                Some(max_length) if length > max_length => {
                    let before_center = offset.saturating_sub(max_length / 2);
                    if before_center == 0 {
                        return 0;
                    }
                    // Never skip more than needed to make the line fit.
                    let exposed = before_center.min(length - max_length);
                    self.head.skip_freeing(exposed).min(offset)
                }
                _ => 0,
            },
        };
        if self.head.pays_for(skip) {
            skip
        } else {
            0
        }
    }

    /// Index of the first char removed from the tail, `length` for none
    fn tail_boundary(&self, length: usize, offset: usize, diff_length: usize) -> usize {
        let max_diff = self.limits.max_diff_line_length;
        let end = if max_diff > 0 && diff_length > max_diff {
            offset.saturating_add(max_diff)
        } else if let Some(limit) = self.limits.same_tail_limit {
            offset.saturating_add(diff_length).saturating_add(limit)
        } else {
            length
        };
        if end >= length || !self.tail.pays_for(length - end) {
            length
        } else {
            end
        }
    }
}
