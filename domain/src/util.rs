//! Shared utility functions.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Returns a sub-slice of the original string. If the string is shorter than
/// `max_bytes`, the entire string is returned unchanged.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Build a download file name from the first `max_chars` characters of a prompt.
///
/// Whitespace becomes `_`; characters that are unsafe in file names are dropped.
pub fn download_file_name(
    prompt: &str,
    max_chars: usize,
    index: Option<usize>,
    extension: &str,
) -> String {
    let stem: String = prompt
        .chars()
        .take(max_chars)
        .filter_map(|c| {
            if c.is_whitespace() {
                Some('_')
            } else if c.is_alphanumeric() || c == '-' || c == '_' {
                Some(c)
            } else {
                None
            }
        })
        .collect();

    match index {
        Some(i) => format!("ai_generated_{}_{}.{}", stem, i, extension),
        None => format!("ai_generated_{}.{}", stem, extension),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_str("hello world", 5), "hello");
    }

    #[test]
    fn truncate_no_op_when_short() {
        assert_eq!(truncate_str("hi", 10), "hi");
    }

    #[test]
    fn truncate_multibyte_boundary() {
        let s = "あのね"; // 9 bytes: 3+3+3
        assert_eq!(truncate_str(s, 4), "あ");
        assert_eq!(truncate_str(s, 6), "あの");
    }

    #[test]
    fn file_name_replaces_spaces() {
        assert_eq!(
            download_file_name("a serene lake", 30, None, "png"),
            "ai_generated_a_serene_lake.png"
        );
    }

    #[test]
    fn file_name_drops_path_separators() {
        assert_eq!(
            download_file_name("../etc/passwd", 30, None, "png"),
            "ai_generated_etcpasswd.png"
        );
    }

    #[test]
    fn file_name_counts_chars_not_bytes() {
        assert_eq!(
            download_file_name("猫と犬", 2, Some(0), "jpg"),
            "ai_generated_猫と_0.jpg"
        );
    }
}
