//! Declared and return types as `|`-joined strings.

use crate::model::{Kind, Symbol};

/// Declared types, e.g. `String|Array<Number>`.
///
/// Classes report `class`; enums are wrapped as `enum<...>`. A symbol with no
/// `type.names` yields an empty string.
pub fn get_types(symbol: &Symbol) -> String {
    if symbol.kind == Some(Kind::Class) {
        return "class".to_string();
    }
    let names = symbol
        .type_names
        .as_ref()
        .map(|t| t.names.as_slice())
        .unwrap_or_default();
    let types = join_types(names.iter());
    if symbol.is_enum {
        format!("enum<{}>", types)
    } else {
        types
    }
}

/// Return types across all `@returns` entries, or `void` when there are none.
pub fn get_return_types(symbol: &Symbol) -> String {
    let Some(returns) = symbol.returns.as_ref() else {
        return "void".to_string();
    };
    let names = returns
        .iter()
        .filter_map(|r| r.type_names.as_ref())
        .flat_map(|t| t.names.iter());
    let types = join_types(names);
    if types.is_empty() {
        "void".to_string()
    } else {
        types
    }
}

/// `Array.<T>` is spelled `Array<T>`.
fn join_types<'a>(names: impl Iterator<Item = &'a String>) -> String {
    names
        .map(|n| n.replace(".<", "<"))
        .collect::<Vec<_>>()
        .join("|")
}
