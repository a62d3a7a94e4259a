//! Doc-comment text to HTML fragments.
//!
//! Supports a deliberately narrow syntax: triple-backtick fences, inline
//! backticks, blank-line paragraphs and `{@link}` directives. Output uses
//! only `<p>`, `<code>`, `<pre>` and `<a>`; angle brackets are escaped only
//! inside code.

pub mod indent;
pub mod links;
pub mod paragraphs;
pub mod ticks;
pub mod tokenize;

pub use indent::normalize_tabs;
pub use links::parse_links;
pub use paragraphs::parse_new_lines;
pub use ticks::{parse_ticks, wrap_code};
pub use tokenize::{tokenize, tokenize_with, Token, FENCE};

use serde::Deserialize;

/// Options shared by the converters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Leave single-paragraph prose unwrapped (no `<p>`).
    pub keep_if_single: bool,
    /// `target` attribute for generated anchors, e.g. `_blank`.
    pub target: Option<String>,
}

/// Full conversion: trim leading markers, paragraphs, backticks, links.
pub fn parse(input: &str, options: &ParseOptions) -> String {
    let text = trim_left(input);
    let text = parse_new_lines(text, options);
    let text = parse_ticks(&text);
    parse_links(&text, options)
}

/// Strip leading whitespace and dash markers (`- desc`, `— desc`), as
/// left behind by `@param name - desc` style tags. A dash only counts as a
/// marker when whitespace or the end of input follows it, so `-1` is kept.
pub fn trim_left(input: &str) -> &str {
    let mut text = input.trim_start();
    loop {
        let rest = text.trim_start_matches(|c: char| c == '-' || c == '\u{2014}');
        let is_marker = rest.len() < text.len()
            && (rest.is_empty() || rest.starts_with(char::is_whitespace));
        if !is_marker {
            return text;
        }
        text = rest.trim_start();
    }
}

/// Strip leading and trailing line breaks only.
pub fn trim_new_lines(input: &str) -> &str {
    input.trim_matches(|c| c == '\n' || c == '\r')
}
