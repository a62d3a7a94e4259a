//! Blank-line separated prose to `<p>` paragraphs.

use super::tokenize::tokenize_with;
use super::ParseOptions;
use regex::Regex;
use std::sync::LazyLock;

static RE_PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r?\n){2,}").unwrap());

/// Wrap prose paragraphs in `<p>` tags, leaving fenced code untouched.
///
/// With `keep_if_single`, a prose token that has no paragraph break is left
/// as-is. Whitespace-only pieces are passed through unwrapped.
pub fn parse_new_lines(input: &str, options: &ParseOptions) -> String {
    tokenize_with(input, |content, is_code| {
        if is_code {
            return content.to_string();
        }
        let pieces: Vec<&str> = RE_PARAGRAPH_BREAK.split(content).collect();
        if pieces.len() <= 1 && options.keep_if_single {
            return content.to_string();
        }
        pieces
            .into_iter()
            .map(|piece| {
                if piece.trim().is_empty() {
                    piece.to_string()
                } else {
                    format!("<p>{}</p>", piece)
                }
            })
            .collect()
    })
    .concat()
}
