//! Name lookup over a forest of symbols nested via `$members`.

use super::name::{get_long_name, SCOPE_SEPARATORS};
use crate::model::Symbol;

/// Depth-first search for the first symbol whose `name`, `longname` or
/// resolved long name equals `name`. A symbol is checked before its members.
pub fn get_symbol_by_name<'a>(symbols: &'a [Symbol], name: &str) -> Option<&'a Symbol> {
    let found = find(symbols, name);
    if found.is_none() {
        tracing::trace!(name, "symbol not found");
    }
    found
}

fn find<'a>(symbols: &'a [Symbol], name: &str) -> Option<&'a Symbol> {
    for symbol in symbols {
        if symbol.name == name || symbol.longname == name || get_long_name(symbol) == name {
            return Some(symbol);
        }
        if let Some(found) = find(&symbol.members, name) {
            return Some(found);
        }
    }
    None
}

/// Namepath prefixes whose `:` is part of the segment (`module:foo`).
const NAMEPATH_PREFIXES: [&str; 3] = ["module:", "event:", "external:"];

/// Number of segments in the long name (`Foo#bar` → 2, `module:foo~bar`
/// → 2). Zero for an empty name.
pub fn get_levels(symbol: &Symbol) -> usize {
    let long_name = get_long_name(symbol);
    if long_name.is_empty() {
        return 0;
    }
    separator_indices(&long_name).count() + 1
}

/// Long name without its last segment (`Foo#bar` → `Foo`); `None` for
/// top-level names, including a bare `module:foo`.
pub fn get_parent_name(symbol: &Symbol) -> Option<String> {
    let long_name = get_long_name(symbol);
    let idx = separator_indices(&long_name).last()?;
    let parent = &long_name[..idx];
    (!parent.is_empty()).then(|| parent.to_string())
}

fn separator_indices(long_name: &str) -> impl Iterator<Item = usize> + '_ {
    long_name
        .match_indices(&SCOPE_SEPARATORS[..])
        .map(|(idx, _)| idx)
        .filter(move |&idx| !closes_prefix(long_name, idx))
}

/// The `:` at `idx` ends a namepath prefix that starts a segment.
fn closes_prefix(long_name: &str, idx: usize) -> bool {
    let head = &long_name[..=idx];
    NAMEPATH_PREFIXES.iter().any(|prefix| {
        head.ends_with(prefix)
            && long_name[..head.len() - prefix.len()]
                .chars()
                .next_back()
                .map_or(true, |c| SCOPE_SEPARATORS.contains(&c))
    })
}

/// The symbol named by [`get_parent_name`], looked up in `symbols`.
pub fn get_parent<'a>(symbols: &'a [Symbol], symbol: &Symbol) -> Option<&'a Symbol> {
    let parent = get_parent_name(symbol)?;
    get_symbol_by_name(symbols, &parent)
}
