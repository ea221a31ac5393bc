//! Run collapsing
//!
//! A run of lines belonging to one delta group is either rendered line by
//! line or, when long enough, reduced to its leading and trailing brackets
//! around a single ellipsis block reporting how many lines were removed.

use crate::config::RoleConfig;
use crate::crop::LineCropper;
use crate::delta::DiffHint;
use crate::ellipsis::render_template;
use crate::numbering::NumberingPolicy;
use crate::text::char_len;
use std::borrow::Cow;

/// Crops and numbers individual lines
#[derive(Debug, Clone, Copy)]
pub struct LineRenderer<'a> {
    cropper: LineCropper<'a>,
    numbering: Option<&'a NumberingPolicy>,
    max_line_length: usize,
}

impl<'a> LineRenderer<'a> {
    /// Create a renderer; `max_line_length` of 0 disables tail cropping
    pub fn new(
        cropper: LineCropper<'a>,
        numbering: Option<&'a NumberingPolicy>,
        max_line_length: usize,
    ) -> Self {
        Self {
            cropper,
            numbering,
            max_line_length,
        }
    }

    /// The active numbering policy, if lines are numbered
    pub fn numbering(&self) -> Option<&'a NumberingPolicy> {
        self.numbering
    }

    /// Render one line as line `line_number` of its text
    ///
    /// The number prefix counts against the line budget, so it is computed
    /// before the line is cropped.
    pub fn render(&self, line: &str, line_number: usize, hint: Option<DiffHint>) -> String {
        let prefix = self
            .numbering
            .map(|numbering| numbering.prefix_for(line_number))
            .unwrap_or_default();
        let budget =
            (self.max_line_length > 0).then(|| self.max_line_length.saturating_sub(char_len(&prefix)));

        let body = match (hint, budget) {
            (Some(hint), budget) => self.cropper.crop_around_diff(line, hint, budget),
            (None, Some(max_length)) => self.cropper.crop_tail(line, max_length),
            (None, None) => Cow::Borrowed(line),
        };

        if prefix.is_empty() {
            return body.into_owned();
        }
        let mut rendered = prefix;
        rendered.push_str(&body);
        rendered
    }
}

/// Collapses runs of lines for one role
#[derive(Debug, Clone, Copy)]
pub struct RunCollapser<'a> {
    role: &'a RoleConfig,
    renderer: LineRenderer<'a>,
}

impl<'a> RunCollapser<'a> {
    /// Create a collapser for `role`
    pub fn new(role: &'a RoleConfig, renderer: LineRenderer<'a>) -> Self {
        Self { role, renderer }
    }

    /// Whether a run of `line_count` lines collapses
    pub fn collapses(&self, line_count: usize) -> bool {
        let bracket = self.role.bracket_size;
        bracket > 0 && line_count >= 2 * bracket + self.role.min_collapsed_lines
    }

    /// Abbreviate a run starting at line `start_number` of its text.
    ///
    /// `hint` describes the first line of the run only.
    pub fn collapse(
        &self,
        lines: &[&str],
        start_number: usize,
        hint: Option<DiffHint>,
    ) -> Vec<String> {
        if !self.collapses(lines.len()) {
            return self.shorten_lines(lines, start_number, hint);
        }

        let bracket = self.role.bracket_size;
        let removed = lines.len() - 2 * bracket;
        let tail_start = lines.len() - bracket;
        tracing::trace!(
            lines = lines.len(),
            removed,
            start_number,
            "collapsing run"
        );

        let mut output = Vec::with_capacity(2 * bracket + 1);
        output.extend(self.shorten_lines(&lines[..bracket], start_number, hint));
        output.push(self.ellipsis_block(start_number + bracket - 1, removed));
        output.extend(self.shorten_lines(&lines[tail_start..], start_number + tail_start, None));
        output
    }

    /// Crop and number every line without collapsing
    pub fn shorten_lines(
        &self,
        lines: &[&str],
        start_number: usize,
        hint: Option<DiffHint>,
    ) -> Vec<String> {
        lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let line_hint = if index == 0 { hint } else { None };
                self.renderer.render(line, start_number + index, line_hint)
            })
            .collect()
    }

    /// The ellipsis replacing `removed` lines after line `preceding_number`
    fn ellipsis_block(&self, preceding_number: usize, removed: usize) -> String {
        let ellipsis = &self.role.ellipsis;
        let indent = self
            .renderer
            .numbering()
            .map(|numbering| numbering.ellipsis_indent(preceding_number))
            .unwrap_or_default();

        if indent.is_empty() {
            return ellipsis.render(removed);
        }
        let indented = ellipsis
            .template()
            .split('\n')
            .map(|line| {
                if line.is_empty() {
                    Cow::Borrowed(line)
                } else {
                    Cow::Owned(format!("{indent}{line}"))
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        render_template(&indented, ellipsis.has_count(), removed)
    }
}
