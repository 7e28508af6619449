// src/format.rs
use once_cell::sync::Lazy;
use regex::Regex;

static SECTION_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\w+:)").expect("section label pattern"));

// Turns one raw field value into a multi-line display string. Three
// stages, in order: unescape literal backslash sequences, then either
// break a bracketed list onto one line per entry or push "word:" labels
// onto their own indented lines.
pub fn format_field(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let unescaped = unescape(raw);
    let trimmed = unescaped.trim();

    if let Some(inner) = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        split_list(inner)
    } else {
        indent_sections(&unescaped)
    }
}

// Escape sequences arrive from CSV cells as two literal characters.
// Replacement order is fixed, with the backslash collapse last.
fn unescape(text: &str) -> String {
    text.replace("\\n", "\n")
        .replace("\\t", "    ")
        .replace("\\'", "'")
        .replace("\\\"", "\"")
        .replace("\\\\", "\\")
}

// One list entry per line. Quote parity keeps commas inside quoted
// substrings intact.
fn split_list(inner: &str) -> String {
    let mut out = String::with_capacity(inner.len() + 8);
    let mut in_quotes = false;
    for ch in inner.chars() {
        out.push(ch);
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => out.push('\n'),
            _ => {}
        }
    }
    out
}

fn indent_sections(text: &str) -> String {
    SECTION_LABEL.replace_all(text, "\n\n    $1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(format_field(""), "");
    }

    #[test]
    fn plain_text_passes_through_unchanged() {
        assert_eq!(format_field("strong finish"), "strong finish");
    }

    #[test]
    fn literal_newline_escape_becomes_a_line_break() {
        assert_eq!(format_field(r"a\nb"), "a\nb");
    }

    #[test]
    fn literal_tab_escape_becomes_four_spaces() {
        assert_eq!(unescape(r"a\tb"), "a    b");
    }

    #[test]
    fn quote_escapes_unwrap() {
        assert_eq!(unescape(r#"it\'s \"fast\""#), r#"it's "fast""#);
    }

    #[test]
    fn backslash_collapse_runs_last() {
        // the \n pass consumes the second backslash before the collapse
        assert_eq!(unescape(r"a\\nb"), "a\\\nb");
        assert_eq!(unescape(r"a\\b"), r"a\b");
    }

    #[test]
    fn bracketed_list_breaks_on_unquoted_commas() {
        assert_eq!(
            format_field(r#"[a, "b,c", d]"#),
            "a,\n \"b,c\",\n d"
        );
    }

    #[test]
    fn bracket_detection_ignores_surrounding_whitespace() {
        assert_eq!(format_field("  [x, y]  "), "x,\n y");
    }

    #[test]
    fn list_branch_wins_over_section_labels() {
        assert_eq!(format_field("[a:1, b:2]"), "a:1,\n b:2");
    }

    #[test]
    fn unclosed_bracket_is_not_a_list() {
        assert_eq!(format_field("[a, b"), "[a, b");
    }

    #[test]
    fn section_labels_start_indented_paragraphs() {
        assert_eq!(
            format_field("Coach: Virtanen Remarks: strong finish"),
            "\n\n    Coach: Virtanen \n\n    Remarks: strong finish"
        );
    }

    #[test]
    fn escaped_newline_then_section_labels_compose() {
        assert_eq!(
            format_field(r"Day1: ok\nDay2: better"),
            "\n\n    Day1: ok\n\n\n    Day2: better"
        );
    }
}
