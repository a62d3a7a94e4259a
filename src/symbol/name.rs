//! Canonical short/long/code names for symbols.
//!
//! Extractors overwrite `name` and `longname` with the alias target when a
//! symbol is aliased. The declaration-site identifier only survives in
//! `meta.code.name`, so aliased names are rebuilt from there.

use crate::model::{Scope, Symbol};
use regex::Regex;
use std::sync::LazyLock;

/// Characters that separate name segments (`Foo#bar`, `ns.fn`, `mod~inner`,
/// `module:x`).
pub const SCOPE_SEPARATORS: [char; 4] = ['#', '.', '~', ':'];

/// Enclosing-scope marker such as `<anonymous>~`.
static RE_SCOPE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[^>]+>)?~?").unwrap());

/// Quoted module path such as `"./lib/index.js"~`.
static RE_MODULE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"[^"]+"\.?~?"#).unwrap());

/// Normalise a raw name: drop scope markers and quoted module paths, and
/// spell prototype members as instance members (`Foo.prototype.bar` →
/// `Foo#bar`).
pub fn clean_name(name: &str) -> String {
    let name = RE_SCOPE_MARKER.replace(name, "");
    let name = RE_MODULE_PATH.replace(&name, "");
    name.replace(".prototype.", "#").trim().to_string()
}

/// The cleaned source identifier, falling back to the long name when the
/// symbol carries no usable `meta.code.name`.
pub fn get_code_name(symbol: &Symbol) -> String {
    let code = symbol.code_name().map(clean_name).unwrap_or_default();
    if code.is_empty() {
        get_long_name(symbol)
    } else {
        code
    }
}

/// Short name. For aliased symbols this is the last segment of the code
/// name; otherwise `name` verbatim.
pub fn get_name(symbol: &Symbol) -> String {
    if !has_alias(symbol) {
        return symbol.name.clone();
    }
    let code = symbol.code_name().map(clean_name).unwrap_or_default();
    match code.rsplit(&SCOPE_SEPARATORS[..]).next() {
        Some(last) if !last.is_empty() => last.to_string(),
        _ => symbol.name.clone(),
    }
}

/// Fully-qualified name, reconstructed from the code name for aliased
/// symbols.
pub fn get_long_name(symbol: &Symbol) -> String {
    let longname = clean_name(&symbol.longname);
    if !has_alias(symbol) {
        return longname;
    }

    let code = symbol.code_name().map(clean_name).unwrap_or_default();
    if code.is_empty() {
        return longname;
    }

    let memberof = clean_name(symbol.memberof.as_deref().unwrap_or_default());
    if memberof.is_empty() {
        return code;
    }

    if is_qualified_by(&code, &memberof) {
        return code;
    }

    let separator = if symbol.scope == Some(Scope::Instance) {
        '#'
    } else {
        '.'
    };
    format!("{}{}{}", memberof, separator, code)
}

pub use self::get_long_name as get_full_name;

fn has_alias(symbol: &Symbol) -> bool {
    symbol.alias.as_deref().is_some_and(|a| !a.is_empty())
}

/// `code` starts with `parent` immediately followed by a scope separator.
fn is_qualified_by(code: &str, parent: &str) -> bool {
    code.strip_prefix(parent)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| SCOPE_SEPARATORS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CodeMeta, Meta};

    fn aliased(code_name: &str, memberof: Option<&str>, scope: Option<Scope>) -> Symbol {
        Symbol {
            name: "aliasName".to_string(),
            longname: "Alias.aliasName".to_string(),
            alias: Some("Alias.aliasName".to_string()),
            memberof: memberof.map(str::to_string),
            scope,
            meta: Some(Meta {
                code: Some(CodeMeta {
                    name: Some(code_name.to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn clean_strips_scope_marker() {
        assert_eq!(clean_name("<anonymous>~obj.doStuff"), "obj.doStuff");
        assert_eq!(clean_name("~inner"), "inner");
    }

    #[test]
    fn clean_strips_module_path() {
        assert_eq!(
            clean_name("\"./node_modules/eventemitter3/index.js\"~EventEmitter"),
            "EventEmitter"
        );
        assert_eq!(clean_name("\"lib/x.js\".Thing"), "Thing");
    }

    #[test]
    fn clean_rewrites_prototype() {
        assert_eq!(clean_name("Foo.prototype.bar"), "Foo#bar");
        assert_eq!(clean_name("  Foo.bar  "), "Foo.bar");
    }

    #[test]
    fn long_name_without_alias() {
        let symbol = Symbol {
            name: "bar".to_string(),
            longname: "Foo#bar".to_string(),
            ..Default::default()
        };
        assert_eq!(get_long_name(&symbol), "Foo#bar");
        assert_eq!(get_name(&symbol), "bar");
    }

    #[test]
    fn long_name_prototype_alias() {
        let symbol = Symbol {
            name: "bar".to_string(),
            longname: "Foo.bar".to_string(),
            alias: Some("Foo.bar".to_string()),
            memberof: Some("Foo".to_string()),
            scope: Some(Scope::Instance),
            meta: Some(Meta {
                code: Some(CodeMeta {
                    name: Some("Foo.prototype.bar".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(get_long_name(&symbol), "Foo#bar");
        assert_eq!(get_full_name(&symbol), "Foo#bar");
        assert_eq!(get_name(&symbol), "bar");
    }

    #[test]
    fn long_name_requalifies_with_instance_separator() {
        let symbol = aliased("render", Some("Widget"), Some(Scope::Instance));
        assert_eq!(get_long_name(&symbol), "Widget#render");
    }

    #[test]
    fn long_name_requalifies_with_static_separator() {
        let symbol = aliased("create", Some("Widget"), Some(Scope::Static));
        assert_eq!(get_long_name(&symbol), "Widget.create");
    }

    #[test]
    fn long_name_already_qualified() {
        let symbol = aliased("Widget~helper", Some("Widget"), Some(Scope::Inner));
        assert_eq!(get_long_name(&symbol), "Widget~helper");
    }

    #[test]
    fn long_name_prefix_without_separator_is_not_qualified() {
        let symbol = aliased("WidgetFactory", Some("Widget"), Some(Scope::Static));
        assert_eq!(get_long_name(&symbol), "Widget.WidgetFactory");
    }

    #[test]
    fn long_name_without_memberof_is_code_name() {
        let symbol = aliased("<anonymous>~obj.doStuff", None, None);
        assert_eq!(get_long_name(&symbol), "obj.doStuff");
        assert_eq!(get_name(&symbol), "doStuff");
    }

    #[test]
    fn long_name_blank_code_name_falls_back() {
        let symbol = aliased("   ", Some("Widget"), Some(Scope::Static));
        assert_eq!(get_long_name(&symbol), "Alias.aliasName");
        assert_eq!(get_name(&symbol), "aliasName");
    }

    #[test]
    fn empty_alias_counts_as_unset() {
        let mut symbol = aliased("render", Some("Widget"), Some(Scope::Instance));
        symbol.alias = Some(String::new());
        assert_eq!(get_long_name(&symbol), "Alias.aliasName");
        assert_eq!(get_name(&symbol), "aliasName");
    }

    #[test]
    fn code_name_prefers_meta() {
        let symbol = aliased("<anonymous>~obj.doStuff", None, None);
        assert_eq!(get_code_name(&symbol), "obj.doStuff");
    }

    #[test]
    fn code_name_falls_back_to_long_name() {
        let symbol = Symbol {
            name: "x".to_string(),
            longname: "module:a~x".to_string(),
            ..Default::default()
        };
        assert_eq!(get_code_name(&symbol), "module:a~x");
    }

    #[test]
    fn name_uses_last_segment_for_every_separator() {
        for (code, expected) in [
            ("a.b", "b"),
            ("a#b", "b"),
            ("a~b", "b"),
            ("module:b", "b"),
        ] {
            let symbol = aliased(code, None, None);
            assert_eq!(get_name(&symbol), expected, "code name {}", code);
        }
    }
}
