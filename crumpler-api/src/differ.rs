//! Line differ backed by `similar`

use crumpler_core::text::split_lines;
use crumpler_core::{DeltaGroup, DeltaTag, LineDiffer};
use similar::{capture_diff_slices, Algorithm, DiffTag};
use std::ops::Range;

/// Myers line diff producing maximal delta groups
///
/// Replacements are reported as removed lines followed by added lines, so
/// the first line of each side can be hinted for in-line cropping.
#[derive(Debug, Clone, Copy)]
pub struct SimilarDiffer {
    algorithm: Algorithm,
}

impl Default for SimilarDiffer {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Myers,
        }
    }
}

impl SimilarDiffer {
    /// Create a differ using `algorithm`
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }
}

impl LineDiffer for SimilarDiffer {
    fn diff_lines<'a>(&self, model: &'a str, subject: &'a str) -> Vec<DeltaGroup<'a>> {
        let old = split_lines(model);
        let new = split_lines(subject);
        let ops = capture_diff_slices(self.algorithm, &old, &new);

        let mut groups: Vec<DeltaGroup<'a>> = Vec::with_capacity(ops.len() + 1);
        for op in &ops {
            let (tag, old_range, new_range) = op.as_tag_tuple();
            match tag {
                DiffTag::Equal => push_lines(&mut groups, DeltaTag::Common, &old, old_range),
                DiffTag::Delete => push_lines(&mut groups, DeltaTag::Removed, &old, old_range),
                DiffTag::Insert => push_lines(&mut groups, DeltaTag::Added, &new, new_range),
                DiffTag::Replace => {
                    push_lines(&mut groups, DeltaTag::Removed, &old, old_range);
                    push_lines(&mut groups, DeltaTag::Added, &new, new_range);
                }
            }
        }
        tracing::trace!(ops = ops.len(), groups = groups.len(), "diffed lines");
        groups
    }
}

/// Append lines, extending the last group when it has the same tag
fn push_lines<'a>(
    groups: &mut Vec<DeltaGroup<'a>>,
    tag: DeltaTag,
    lines: &[&'a str],
    range: Range<usize>,
) {
    if range.is_empty() {
        return;
    }
    match groups.last_mut() {
        Some(last) if last.tag == tag => last.lines.extend_from_slice(&lines[range]),
        _ => groups.push(DeltaGroup::new(tag, lines[range].to_vec())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(groups: &[DeltaGroup<'_>]) -> Vec<(DeltaTag, usize)> {
        groups.iter().map(|g| (g.tag, g.count())).collect()
    }

    #[test]
    fn test_identical_texts_are_one_common_group() {
        let groups = SimilarDiffer::default().diff_lines("a\nb\nc\n", "a\nb\nc\n");
        assert_eq!(tags(&groups), vec![(DeltaTag::Common, 3)]);
    }

    #[test]
    fn test_replacement_is_removed_then_added() {
        let groups = SimilarDiffer::default().diff_lines("a\nold\nz", "a\nnew\nnewer\nz");
        assert_eq!(
            tags(&groups),
            vec![
                (DeltaTag::Common, 1),
                (DeltaTag::Removed, 1),
                (DeltaTag::Added, 2),
                (DeltaTag::Common, 1),
            ]
        );
        assert_eq!(groups[1].lines, vec!["old"]);
        assert_eq!(groups[2].lines, vec!["new", "newer"]);
    }

    #[test]
    fn test_empty_side() {
        let groups = SimilarDiffer::default().diff_lines("x", "");
        assert_eq!(tags(&groups), vec![(DeltaTag::Removed, 1)]);

        let groups = SimilarDiffer::default().diff_lines("", "x\ny");
        assert_eq!(tags(&groups), vec![(DeltaTag::Added, 2)]);
    }

    #[test]
    fn test_groups_cover_both_texts() {
        let model = "1\n2\n3\n4\n5\n6";
        let subject = "0\n2\n3\nx\n5\n6\n7";
        let groups = SimilarDiffer::new(Algorithm::Patience).diff_lines(model, subject);
        let model_lines: usize = groups
            .iter()
            .filter(|g| g.tag != DeltaTag::Added)
            .map(DeltaGroup::count)
            .sum();
        let subject_lines: usize = groups
            .iter()
            .filter(|g| g.tag != DeltaTag::Removed)
            .map(DeltaGroup::count)
            .sum();
        assert_eq!(model_lines, 6);
        assert_eq!(subject_lines, 7);
    }
}
