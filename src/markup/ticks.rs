//! Backtick conversion: fenced blocks to `<pre><code>`, inline spans to
//! `<code>`.

use super::indent::normalize_tabs;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// A fenced block. The optional language tag must sit alone on the
/// opening line, otherwise it is treated as code. A fence left open runs to
/// the end of the input.
static RE_FENCED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:[ \t]*([\w+#.-]+)[ \t]*\r?\n)?\s*(.*?)\s*(?:```|\z)").unwrap()
});

static RE_INLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());

/// Convert fenced blocks and then inline backtick spans.
///
/// Backticks inside a fenced block are emitted as `&#x60;` so the inline
/// pass does not pick them up.
pub fn parse_ticks(input: &str) -> String {
    let blocks = RE_FENCED.replace_all(input, |caps: &Captures| {
        let body = normalize_tabs(&caps[2]).replace('`', "&#x60;");
        wrap_code(&body, true)
    });
    RE_INLINE
        .replace_all(&blocks, |caps: &Captures| wrap_code(&caps[1], false))
        .into_owned()
}

/// Escape angle brackets and wrap in `<code>`, plus `<pre>` for blocks.
pub fn wrap_code(code: &str, pre: bool) -> String {
    let escaped = code.replace('<', "&lt;").replace('>', "&gt;");
    if pre {
        format!("<pre><code>{}</code></pre>", escaped)
    } else {
        format!("<code>{}</code>", escaped)
    }
}
