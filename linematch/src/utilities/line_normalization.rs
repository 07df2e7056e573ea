const BOM: char = '\u{feff}';

/// Removes a single leading UTF-8 byte-order mark, if present.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

/// Splits text into lines. `\n`, `\r\n` and a lone `\r` all end a line.
///
/// Only the line terminator is removed: leading and trailing spaces and tabs are kept. A final
/// terminator does not yield an empty last line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(pos) => {
                lines.push(rest[..pos].to_string());
                let width = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + width..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_crlf_and_lf() {
        assert_eq!(split_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_lone_carriage_return_ends_a_line() {
        assert_eq!(split_lines("a\rb\r\nc"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\r"), vec!["a"]);
        assert_eq!(split_lines("\r\r\n"), vec!["", ""]);
    }

    #[test]
    fn test_split_empty_text() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_single_newline_is_one_empty_line() {
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_whitespace_is_significant() {
        assert_eq!(split_lines("  indented\t\n"), vec!["  indented\t"]);
    }

    #[test]
    fn test_strip_bom_only_once() {
        assert_eq!(strip_bom("\u{feff}\u{feff}x"), "\u{feff}x");
        assert_eq!(strip_bom("x"), "x");
    }
}
