//! Field splitting and cleanup.

/// Strips surrounding whitespace, quote characters and tabs from a field.
pub fn clean_field(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\'' || c == '"')
}

/// Strips a UTF-8 byte order mark and line terminators from a raw line.
pub(crate) fn strip_line(line: &str) -> &str {
    line.strip_prefix('\u{feff}')
        .unwrap_or(line)
        .trim_end_matches(['\r', '\n'])
}

pub(crate) fn count_columns(line: &str, separator: char) -> usize {
    line.split(separator).count()
}
