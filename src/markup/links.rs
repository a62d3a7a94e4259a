//! `{@link ...}` directives to anchors.

use super::ticks::{parse_ticks, wrap_code};
use super::ParseOptions;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// [label]{@link target} | {@link target|label} | {@link target label}
// The `code`/`plain` suffixes select how the label is rendered.
static RE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\[([^\]\r\n]*)\])?\{@link(code|plain)?\s+([^}]*?)\s*\}").unwrap()
});

/// Replace link directives with `<a href>` anchors, then run the backtick
/// conversion over the result.
pub fn parse_links(input: &str, options: &ParseOptions) -> String {
    let linked = RE_LINK.replace_all(input, |caps: &Captures| {
        let (target, inline_label) = split_target(&caps[3]);
        let label = caps
            .get(1)
            .map(|m| m.as_str().trim())
            .filter(|l| !l.is_empty())
            .or(inline_label)
            .unwrap_or(target);
        let label = match caps.get(2).map(|m| m.as_str()) {
            Some("code") => wrap_code(label, false),
            _ => label.to_string(),
        };
        anchor(target, &label, options.target.as_deref())
    });
    parse_ticks(&linked)
}

/// Split a directive body into target and optional label. A `|` wins over
/// whitespace as the separator.
fn split_target(body: &str) -> (&str, Option<&str>) {
    let body = body.trim();
    let split = body
        .split_once('|')
        .or_else(|| body.split_once(char::is_whitespace));
    match split {
        Some((target, label)) => {
            let label = label.trim();
            (target.trim(), (!label.is_empty()).then_some(label))
        }
        None => (body, None),
    }
}

fn anchor(href: &str, label: &str, target: Option<&str>) -> String {
    let href = escape_attr(href);
    match target {
        Some(t) => format!(
            "<a href=\"{}\" target=\"{}\">{}</a>",
            href,
            escape_attr(t),
            label
        ),
        None => format!("<a href=\"{}\">{}</a>", href, label),
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
