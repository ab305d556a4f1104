//! Minimal markdown renderer.
//!
//! Recognizes four constructs and nothing else, applied as successive global
//! substitutions in a fixed order:
//!
//! 1. bold `**x**`
//! 2. italic `*x*`
//! 3. link `[text](url)`
//! 4. line break `\n`
//!
//! Each step sees the output of the previous one. There is no nesting
//! awareness and no escaping, so malformed input renders literally. The order
//! is observable: `**x**` must be consumed before the italic pass sees its
//! asterisks.

use regex::Regex;
use std::sync::LazyLock;

static BOLD: LazyLock<Regex> = LazyLock::new(|| compile(r"\*\*(.*?)\*\*"));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| compile(r"\*(.*?)\*"));
static LINK: LazyLock<Regex> = LazyLock::new(|| compile(r"\[(.*?)\]\((.*?)\)"));

fn compile(pattern: &str) -> Regex {
    // Patterns are compile-time constants covered by the tests below.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid markdown pattern {pattern}: {e}"))
}

/// Replacement templates for one output flavour.
///
/// `${1}` is the inner text; for links `${1}` is the label and `${2}` the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupStyle {
    pub bold: &'static str,
    pub italic: &'static str,
    pub link: &'static str,
    pub line_break: &'static str,
}

impl MarkupStyle {
    /// HTML fragment output.
    pub const HTML: MarkupStyle = MarkupStyle {
        bold: "<strong>${1}</strong>",
        italic: "<em>${1}</em>",
        link: "<a href=\"${2}\" target=\"_blank\">${1}</a>",
        line_break: "<br>",
    };

    /// ANSI terminal output; links show their URL in parentheses.
    pub const TERMINAL: MarkupStyle = MarkupStyle {
        bold: "\x1b[1m${1}\x1b[22m",
        italic: "\x1b[3m${1}\x1b[23m",
        link: "\x1b[4m${1}\x1b[24m (${2})",
        line_break: "\n",
    };

    /// Markers stripped, no escape codes.
    pub const PLAIN: MarkupStyle = MarkupStyle {
        bold: "${1}",
        italic: "${1}",
        link: "${1} (${2})",
        line_break: "\n",
    };
}

/// Render `text` with the given style.
pub fn render(text: &str, style: &MarkupStyle) -> String {
    let text = BOLD.replace_all(text, style.bold);
    let text = ITALIC.replace_all(&text, style.italic);
    let text = LINK.replace_all(&text, style.link);
    text.replace('\n', style.line_break)
}

/// Render `text` to an HTML fragment.
pub fn to_html(text: &str) -> String {
    render(text, &MarkupStyle::HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_four_constructs_in_order() {
        assert_eq!(
            to_html("**a** *b* [c](d)\ne"),
            r#"<strong>a</strong> <em>b</em> <a href="d" target="_blank">c</a><br>e"#
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(to_html("just words"), "just words");
        assert_eq!(to_html(""), "");
    }

    #[test]
    fn test_non_greedy_matching() {
        assert_eq!(
            to_html("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
        assert_eq!(to_html("*a* *b*"), "<em>a</em> <em>b</em>");
    }

    #[test]
    fn test_bold_runs_before_italic() {
        // Italic first would produce "<em></em>a<em></em>".
        assert_eq!(to_html("**a**"), "<strong>a</strong>");
    }

    #[test]
    fn test_triple_asterisk_follows_pass_order() {
        // Bold consumes "***x**"; italic then pairs the two leftover asterisks
        // across the closing tag.
        assert_eq!(to_html("***x***"), "<strong><em>x</strong></em>");
    }

    #[test]
    fn test_markers_do_not_span_lines() {
        // `.` does not match a newline, so the pair is left alone.
        assert_eq!(to_html("*a\nb*"), "*a<br>b*");
    }

    #[test]
    fn test_link_label_formatted_before_link_pass() {
        assert_eq!(
            to_html("[**docs**](https://example.com)"),
            r#"<a href="https://example.com" target="_blank"><strong>docs</strong></a>"#
        );
    }

    #[test]
    fn test_malformed_renders_literally() {
        assert_eq!(to_html("**open"), "**open");
        assert_eq!(to_html("[label](no-close"), "[label](no-close");
    }

    #[test]
    fn test_no_html_escaping() {
        assert_eq!(to_html("<b>x</b>"), "<b>x</b>");
    }

    #[test]
    fn test_multiple_line_breaks() {
        assert_eq!(to_html("a\n\nb"), "a<br><br>b");
    }

    #[test]
    fn test_plain_style() {
        assert_eq!(
            render("**a** *b* [c](d)\ne", &MarkupStyle::PLAIN),
            "a b c (d)\ne"
        );
    }

    #[test]
    fn test_terminal_style() {
        assert_eq!(
            render("**a**", &MarkupStyle::TERMINAL),
            "\x1b[1ma\x1b[22m"
        );
        assert_eq!(
            render("[c](d)", &MarkupStyle::TERMINAL),
            "\x1b[4mc\x1b[24m (d)"
        );
    }
}
