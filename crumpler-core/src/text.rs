//! Line and character helpers
//!
//! Lines are delimited by LF. A trailing LF terminates the last line rather
//! than opening an empty one, so `"a\n"` and `"a"` both hold one line and
//! the empty string holds none. All lengths are counted in `char`s.

/// Split text into lines, treating a trailing LF as part of the last line
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n').collect()
}

/// Number of lines `split_lines` would produce
pub fn line_count(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.bytes().filter(|&b| b == b'\n').count() + 1
}

/// Join lines, ending with LF exactly when `original` did
pub fn join_lines_like<S: AsRef<str>>(lines: &[S], original: &str) -> String {
    let mut text = String::with_capacity(lines.iter().map(|l| l.as_ref().len() + 1).sum());
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            text.push('\n');
        }
        text.push_str(line.as_ref());
    }
    if original.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// Length of `s` in chars
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the char at `char_index`, or `s.len()` past the end
fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map_or(s.len(), |(offset, _)| offset)
}

/// Slice `s` by char positions `[start, end)`
pub fn char_slice(s: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let from = byte_offset(s, start);
    let to = from + byte_offset(&s[from..], end - start);
    &s[from..to]
}
