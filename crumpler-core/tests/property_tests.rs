//! Property tests for cropping, collapsing and numbering

use crumpler_core::crop::tail_keep_length;
use crumpler_core::{
    crop_tail, digit_count, Abbreviator, CollapseConfig, CropLimits, DeltaGroup, DiffHint,
    EllipsisSpec, LineCropper, LineRenderer, NumberingConfig, RoleConfig, RunCollapser,
};
use proptest::prelude::*;

fn tail_template() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("[...{n} chars]"),
        Just("..."),
        Just("…"),
        Just("<{n}>"),
        Just("{n}"),
        Just(" (and {n} more chars)"),
    ]
}

/// Parse the count out of an ellipsis rendered from `template`
fn rendered_count(template: &str, rendered: &str) -> Option<usize> {
    let (before, after) = template.split_once("{n}")?;
    rendered
        .strip_prefix(before)?
        .strip_suffix(after)?
        .parse()
        .ok()
}

proptest! {
    #[test]
    fn prop_tail_crop_removes_more_than_its_ellipsis(
        length in 0usize..400,
        max_length in 0usize..200,
        template in tail_template(),
    ) {
        let ellipsis = EllipsisSpec::from_template(template);
        if let Some(keep) = tail_keep_length(length, max_length, &ellipsis) {
            let removed = length - keep;
            prop_assert!(removed > ellipsis.rendered_len(removed));
            if keep > 0 {
                prop_assert_eq!(keep + ellipsis.rendered_len(removed), max_length);
            }
        }
    }

    #[test]
    fn prop_tail_crop_reports_exact_count(
        length in 1usize..400,
        max_length in 1usize..200,
        template in tail_template(),
    ) {
        let ellipsis = EllipsisSpec::from_template(template);
        let line = "z".repeat(length);
        let cropped = crop_tail(&line, max_length, &ellipsis);
        let kept = cropped.chars().take_while(|&c| c == 'z').count();
        if kept < length && ellipsis.has_count() {
            let tail: String = cropped.chars().skip(kept).collect();
            prop_assert_eq!(rendered_count(template, &tail), Some(length - kept));
        }
    }

    #[test]
    fn prop_skip_freeing_frees_exactly(exposed in 0usize..5000) {
        let head = EllipsisSpec::from_template("[{n} chars...]");
        let skip = head.skip_freeing(exposed);
        prop_assert!(skip >= exposed);
        if skip > 0 {
            prop_assert_eq!(skip - head.rendered_len(skip), exposed);
        }
    }

    #[test]
    fn prop_diff_crop_keeps_difference_visible(
        before in 0usize..120,
        after in 0usize..120,
        head_limit in proptest::option::of(0usize..20),
        tail_limit in proptest::option::of(0usize..20),
    ) {
        let head = EllipsisSpec::from_template("[{n} chars...]");
        let tail = EllipsisSpec::from_template("[...{n} chars]");
        let limits = CropLimits {
            same_head_limit: head_limit,
            same_tail_limit: tail_limit,
            max_diff_line_length: 0,
        };
        let cropper = LineCropper::new(&head, &tail, limits);
        let line = format!("{}#{}", "a".repeat(before), "b".repeat(after));
        let hint = DiffHint { offset: before, length: 1 };
        let cropped = cropper.crop_around_diff(&line, hint, None);
        prop_assert!(cropped.contains('#'));
        prop_assert!(cropped.chars().count() <= line.chars().count());
    }

    #[test]
    fn prop_budgeted_diff_crop_accounts_for_every_char(
        before in 0usize..150,
        diff_length in 1usize..20,
        after in 0usize..150,
        head_limit in proptest::option::of(0usize..30),
        tail_limit in proptest::option::of(0usize..30),
        max_diff in 0usize..10,
        budget in 0usize..120,
    ) {
        const HEAD: &str = "[{n} chars...]";
        const TAIL: &str = "[...{n} chars]";
        let head = EllipsisSpec::from_template(HEAD);
        let tail = EllipsisSpec::from_template(TAIL);
        let limits = CropLimits {
            same_head_limit: head_limit,
            same_tail_limit: tail_limit,
            max_diff_line_length: max_diff,
        };
        let cropper = LineCropper::new(&head, &tail, limits);
        let line = format!("{}{}{}", "a".repeat(before), "#".repeat(diff_length), "b".repeat(after));
        let hint = DiffHint { offset: before, length: diff_length };
        let cropped = cropper.crop_around_diff(&line, hint, Some(budget));

        let mut rest: &str = &cropped;
        let mut head_count = 0;
        if let Some(close) = rest.find(']') {
            if let Some(n) = rendered_count(HEAD, &rest[..=close]) {
                prop_assert!(n > close + 1, "head ellipsis does not pay: {:?}", cropped);
                head_count = n;
                rest = &rest[close + 1..];
            }
        }
        let mut tail_count = 0;
        if let Some(open) = rest.rfind('[') {
            let n = rendered_count(TAIL, &rest[open..]);
            prop_assert!(n.is_some(), "unexpected text: {:?}", cropped);
            let n = n.unwrap_or_default();
            prop_assert!(n > rest.len() - open, "tail ellipsis does not pay: {:?}", cropped);
            tail_count = n;
            rest = &rest[..open];
        }

        prop_assert_eq!(head_count + rest.len() + tail_count, line.len());
        prop_assert_eq!(rest, &line[head_count..head_count + rest.len()]);
        prop_assert!(cropped.len() <= line.len());
    }

    #[test]
    fn prop_short_runs_are_not_collapsed(
        bracket_size in 0usize..4,
        min_collapsed_lines in 1usize..4,
        extra in 0usize..12,
    ) {
        let head = EllipsisSpec::from_template("[{n} chars...]");
        let tail = EllipsisSpec::from_template("[...{n} chars]");
        let role = RoleConfig::new(bracket_size, min_collapsed_lines, " ...");
        let renderer = LineRenderer::new(LineCropper::new(&head, &tail, CropLimits::default()), None, 0);
        let collapser = RunCollapser::new(&role, renderer);

        let threshold = 2 * bracket_size + min_collapsed_lines;
        let len = if bracket_size == 0 { extra } else { extra % threshold };
        let lines: Vec<String> = (0..len).map(|i| format!("l{i}")).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        prop_assert_eq!(collapser.collapse(&refs, 1, None), collapser.shorten_lines(&refs, 1, None));
    }

    #[test]
    fn prop_collapse_reports_removed_lines(
        bracket_size in 1usize..4,
        len in 0usize..40,
    ) {
        let head = EllipsisSpec::from_template("[{n} chars...]");
        let tail = EllipsisSpec::from_template("[...{n} chars]");
        let role = RoleConfig::new(bracket_size, 1, "<{n}>");
        let renderer = LineRenderer::new(LineCropper::new(&head, &tail, CropLimits::default()), None, 0);
        let collapser = RunCollapser::new(&role, renderer);

        let lines: Vec<String> = (0..len).map(|i| format!("l{i}")).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let output = collapser.collapse(&refs, 1, None);
        if len > 2 * bracket_size {
            prop_assert_eq!(output.len(), 2 * bracket_size + 1);
            prop_assert_eq!(
                rendered_count("<{n}>", &output[bracket_size]),
                Some(len - 2 * bracket_size)
            );
        } else {
            prop_assert_eq!(output.len(), len);
        }
    }

    #[test]
    fn prop_numbering_width_spans_both_texts(
        subject_count in 0usize..150,
        model_count in 0usize..150,
    ) {
        let config = CollapseConfig {
            numbering: NumberingConfig {
                min_numbered_lines: 1,
                padding: Some('0'),
                ..Default::default()
            },
            ..Default::default()
        };
        let abbreviator = Abbreviator::new(config).unwrap();

        let subject_lines: Vec<String> = (0..subject_count).map(|i| format!("s{i}")).collect();
        let model_lines: Vec<String> = (0..model_count).map(|i| format!("m{i}")).collect();
        let subject = subject_lines.join("\n");
        let model = model_lines.join("\n");
        let groups = vec![
            DeltaGroup::removed(model_lines.iter().map(String::as_str).collect()),
            DeltaGroup::added(subject_lines.iter().map(String::as_str).collect()),
        ];

        let result = abbreviator.abbreviate_groups(&subject, &model, &groups);
        let width = digit_count(subject_count.max(model_count));
        for line in result.subject.lines().chain(result.model.lines()) {
            if line.starts_with(' ') {
                continue;
            }
            let number = line.split(':').next().unwrap_or_default();
            prop_assert_eq!(number.len(), width, "line {:?}", line);
        }
        prop_assert_eq!(
            result.line_number_delim.is_some(),
            subject_count > 0 || model_count > 0
        );
    }
}
