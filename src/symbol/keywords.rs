//! Search keywords for a symbol.

use super::classify::{is_constructor, is_method, is_property};
use super::name::get_long_name;
use crate::model::{Scope, Symbol};
use regex::Regex;
use std::sync::LazyLock;

static RE_STRIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[<>"'`\r\n]"#).unwrap());

static RE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Lowercase, single-space separated keywords: the symbol's names, owner,
/// kind, scope and descriptions, followed by role markers.
pub fn get_keywords(symbol: &Symbol) -> String {
    let mut parts: Vec<&str> = Vec::new();
    let long_name = get_long_name(symbol);
    parts.push(&long_name);
    parts.push(&symbol.longname);
    parts.push(&symbol.name);
    parts.extend(symbol.alias.as_deref());
    parts.extend(symbol.memberof.as_deref());
    parts.extend(symbol.kind.as_ref().map(|k| k.as_str()));
    parts.extend(symbol.scope.map(Scope::as_str));
    parts.extend(symbol.classdesc.as_deref());
    parts.extend(symbol.description.as_deref());

    if symbol.readonly {
        parts.push("readonly");
    }
    if symbol.is_enum {
        parts.push("enum");
    }
    if is_constructor(symbol) {
        parts.push("constructor");
    }
    if is_method(symbol) {
        parts.push("method");
    }
    if is_property(symbol) {
        parts.push("property");
    }

    let joined = parts.join(" ");
    let stripped = RE_STRIP.replace_all(&joined, " ");
    RE_SPACES
        .replace_all(stripped.trim(), " ")
        .to_lowercase()
}
