//! Abbreviation orchestrator
//!
//! Walks the delta groups of a comparison, keeping a running line number
//! for each text, and hands every group to the [`RunCollapser`] of its
//! role. The abbreviated subject and model differ exactly where the
//! original texts do.

use crate::collapse::{LineRenderer, RunCollapser};
use crate::config::{CollapseConfig, Role};
use crate::crop::LineCropper;
use crate::delta::{line_pair_hints, DeltaGroup, DeltaTag, DiffHint, LineDiffer};
use crate::error::Result;
use crate::numbering::NumberingPolicy;
use crate::text::{join_lines_like, line_count, split_lines};

/// Abbreviated pair of compared texts
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Abbreviation {
    /// Abbreviated actual text
    pub subject: String,
    /// Abbreviated expected text
    pub model: String,
    /// Delimiter following line numbers, present only when lines were numbered
    pub line_number_delim: Option<String>,
}

/// One abbreviated text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Abbreviated {
    /// Abbreviated text
    pub text: String,
    /// Delimiter following line numbers, present only when lines were numbered
    pub line_number_delim: Option<String>,
}

/// Stateless abbreviation engine
///
/// Holds a validated [`CollapseConfig`]; every call is independent, so one
/// instance may be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Abbreviator {
    config: CollapseConfig,
}

impl Abbreviator {
    /// Create an abbreviator, validating `config`
    pub fn new(config: CollapseConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use
    pub fn config(&self) -> &CollapseConfig {
        &self.config
    }

    /// Collapse, crop and number a lone text.
    ///
    /// `max_line_length` overrides the common role's maximum when given.
    pub fn abbreviate_text(&self, text: &str, max_line_length: Option<usize>) -> Abbreviated {
        self.abbreviate_single(text, max_line_length, true)
    }

    /// Crop and number a lone text without collapsing any lines
    pub fn abbreviate_lines(&self, text: &str, max_line_length: Option<usize>) -> Abbreviated {
        self.abbreviate_single(text, max_line_length, false)
    }

    /// Abbreviate `subject` and `model` using the groups of `differ`.
    ///
    /// Identical texts are abbreviated once without diffing.
    pub fn abbreviate_diff<D: LineDiffer>(
        &self,
        subject: &str,
        model: &str,
        differ: &D,
    ) -> Abbreviation {
        if subject == model {
            tracing::debug!("identical texts, abbreviating once");
            let Abbreviated {
                text,
                line_number_delim,
            } = self.abbreviate_text(subject, None);
            return Abbreviation {
                subject: text.clone(),
                model: text,
                line_number_delim,
            };
        }
        let groups = differ.diff_lines(model, subject);
        self.abbreviate_groups(subject, model, &groups)
    }

    /// Abbreviate `subject` and `model` given their delta groups.
    ///
    /// The groups must cover every line of both texts in order, as the edit
    /// script turning the model into the subject.
    pub fn abbreviate_groups(
        &self,
        subject: &str,
        model: &str,
        groups: &[DeltaGroup<'_>],
    ) -> Abbreviation {
        let subject_count = line_count(subject);
        let model_count = line_count(model);
        let numbering = self.numbering_for(&[subject_count, model_count]);
        tracing::debug!(
            groups = groups.len(),
            subject_lines = subject_count,
            model_lines = model_count,
            field_width = numbering.as_ref().map(|n| n.field_width),
            "abbreviating comparison"
        );

        let cropper = self.cropper();
        let collapser = |role: Role| {
            let role = self.config.role(role);
            let renderer = LineRenderer::new(cropper, numbering.as_ref(), role.max_line_length);
            RunCollapser::new(role, renderer)
        };

        let mut subject_lines = Vec::with_capacity(subject_count);
        let mut model_lines = Vec::with_capacity(model_count);
        let mut subject_number = 1;
        let mut model_number = 1;
        let mut subject_hint: Option<DiffHint> = None;

        for (index, group) in groups.iter().enumerate() {
            if group.lines.is_empty() {
                continue;
            }
            match group.tag {
                DeltaTag::Common => {
                    let common = collapser(Role::Common);
                    let rendered = common.collapse(&group.lines, subject_number, None);
                    if numbering.is_none() || subject_number == model_number {
                        model_lines.extend(rendered.iter().cloned());
                    } else {
                        model_lines.extend(common.collapse(&group.lines, model_number, None));
                    }
                    subject_lines.extend(rendered);
                    subject_number += group.count();
                    model_number += group.count();
                    subject_hint = None;
                }
                DeltaTag::Removed => {
                    let model_hint = match groups.get(index + 1) {
                        Some(next) if next.tag == DeltaTag::Added && !next.lines.is_empty() => {
                            let hints = line_pair_hints(group.lines[0], next.lines[0]);
                            subject_hint = Some(hints.subject);
                            Some(hints.model)
                        }
                        _ => None,
                    };
                    model_lines.extend(collapser(Role::ModelOnly).collapse(
                        &group.lines,
                        model_number,
                        model_hint,
                    ));
                    model_number += group.count();
                }
                DeltaTag::Added => {
                    subject_lines.extend(collapser(Role::SubjectOnly).collapse(
                        &group.lines,
                        subject_number,
                        subject_hint.take(),
                    ));
                    subject_number += group.count();
                }
            }
        }

        Abbreviation {
            subject: join_lines_like(&subject_lines, subject),
            model: join_lines_like(&model_lines, model),
            line_number_delim: numbering.map(|n| n.delimiter),
        }
    }

    fn abbreviate_single(
        &self,
        text: &str,
        max_line_length: Option<usize>,
        collapse: bool,
    ) -> Abbreviated {
        let lines = split_lines(text);
        let numbering = self.numbering_for(&[lines.len()]);
        let role = self.config.role(Role::Common);
        let max_line_length = max_line_length.unwrap_or(role.max_line_length);
        let renderer = LineRenderer::new(self.cropper(), numbering.as_ref(), max_line_length);
        let collapser = RunCollapser::new(role, renderer);

        let shortened = if collapse {
            collapser.collapse(&lines, 1, None)
        } else {
            collapser.shorten_lines(&lines, 1, None)
        };
        Abbreviated {
            text: join_lines_like(&shortened, text),
            line_number_delim: numbering.map(|n| n.delimiter),
        }
    }

    fn cropper(&self) -> LineCropper<'_> {
        LineCropper::new(
            &self.config.head_crop_ellipsis,
            &self.config.tail_crop_ellipsis,
            self.config.limits,
        )
    }

    /// Numbering shared by texts with these line counts, if any applies
    fn numbering_for(&self, line_counts: &[usize]) -> Option<NumberingPolicy> {
        let numbering = &self.config.numbering;
        if !numbering.applies_to(line_counts) {
            return None;
        }
        let max_count = line_counts.iter().copied().max().unwrap_or(0);
        Some(NumberingPolicy::for_line_count(
            numbering.padding,
            numbering.delimiter.clone(),
            numbering.indent_ellipsis,
            max_count,
        ))
    }
}
