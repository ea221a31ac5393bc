//! Delta groups produced by a line differ
//!
//! The engine does not compute differences itself. A [`LineDiffer`] turns
//! the model and subject texts into an edit script of maximal groups of
//! common, removed (model-only) and added (subject-only) lines.

/// Kind of lines in a delta group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum DeltaTag {
    /// Lines present in both texts
    Common,
    /// Lines present only in the model
    Removed,
    /// Lines present only in the subject
    Added,
}

/// A maximal run of lines sharing one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeltaGroup<'a> {
    /// What the lines are
    pub tag: DeltaTag,
    /// The lines, without terminators
    pub lines: Vec<&'a str>,
}

impl<'a> DeltaGroup<'a> {
    /// Create a group
    pub fn new(tag: DeltaTag, lines: Vec<&'a str>) -> Self {
        Self { tag, lines }
    }

    /// Common lines
    pub fn common(lines: Vec<&'a str>) -> Self {
        Self::new(DeltaTag::Common, lines)
    }

    /// Model-only lines
    pub fn removed(lines: Vec<&'a str>) -> Self {
        Self::new(DeltaTag::Removed, lines)
    }

    /// Subject-only lines
    pub fn added(lines: Vec<&'a str>) -> Self {
        Self::new(DeltaTag::Added, lines)
    }

    /// Number of lines in the group
    pub fn count(&self) -> usize {
        self.lines.len()
    }
}

/// Produces the edit script turning the model into the subject
///
/// Groups must cover every model line and every subject line in order.
/// Implementations are expected to split both texts with
/// [`split_lines`](crate::text::split_lines).
pub trait LineDiffer {
    /// Diff `model` against `subject`
    fn diff_lines<'a>(&self, model: &'a str, subject: &'a str) -> Vec<DeltaGroup<'a>>;
}

impl<D: LineDiffer + ?Sized> LineDiffer for &D {
    fn diff_lines<'a>(&self, model: &'a str, subject: &'a str) -> Vec<DeltaGroup<'a>> {
        (**self).diff_lines(model, subject)
    }
}

/// Where a line differs from its counterpart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffHint {
    /// Char index of the first differing char
    pub offset: usize,
    /// Number of differing chars on this line's side
    pub length: usize,
}

/// Hints for the first lines of a removed group and the added group after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePairHints {
    /// Hint for the model line
    pub model: DiffHint,
    /// Hint for the subject line
    pub subject: DiffHint,
}

/// Locate the difference between a model line and a subject line.
///
/// The offset is the length of the common prefix. Each side's difference
/// length excludes the common suffix, which never overlaps the prefix.
pub fn line_pair_hints(model_line: &str, subject_line: &str) -> LinePairHints {
    let model: Vec<char> = model_line.chars().collect();
    let subject: Vec<char> = subject_line.chars().collect();

    let offset = model
        .iter()
        .zip(subject.iter())
        .take_while(|(m, s)| m == s)
        .count();
    let max_suffix = model.len().min(subject.len()) - offset;
    let suffix = model
        .iter()
        .rev()
        .zip(subject.iter().rev())
        .take(max_suffix)
        .take_while(|(m, s)| m == s)
        .count();

    LinePairHints {
        model: DiffHint {
            offset,
            length: model.len() - offset - suffix,
        },
        subject: DiffHint {
            offset,
            length: subject.len() - offset - suffix,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_for_insertion() {
        let hints = line_pair_hints("abcdef", "abc123def");
        assert_eq!(hints.model, DiffHint { offset: 3, length: 0 });
        assert_eq!(hints.subject, DiffHint { offset: 3, length: 3 });
    }

    #[test]
    fn test_hints_for_replacement() {
        let hints = line_pair_hints("abTTT", "1234TTT");
        assert_eq!(hints.model, DiffHint { offset: 0, length: 2 });
        assert_eq!(hints.subject, DiffHint { offset: 0, length: 4 });
    }

    #[test]
    fn test_suffix_does_not_overlap_prefix() {
        let hints = line_pair_hints("aaa", "aaaa");
        assert_eq!(hints.model, DiffHint { offset: 3, length: 0 });
        assert_eq!(hints.subject, DiffHint { offset: 3, length: 1 });
    }

    #[test]
    fn test_hints_count_chars() {
        let hints = line_pair_hints("日本語", "日本人語");
        assert_eq!(hints.subject, DiffHint { offset: 2, length: 1 });
        assert_eq!(hints.model, DiffHint { offset: 2, length: 0 });
    }

    #[test]
    fn test_group_constructors() {
        let group = DeltaGroup::removed(vec!["a", "b"]);
        assert_eq!(group.tag, DeltaTag::Removed);
        assert_eq!(group.count(), 2);
        assert_eq!(DeltaGroup::added(vec![]).count(), 0);
        assert_eq!(DeltaGroup::common(vec!["x"]).tag, DeltaTag::Common);
    }
}
