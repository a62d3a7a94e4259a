//! Boolean classification of symbols.
//!
//! Most checks read a single field. The class/constructor/method checks
//! also consult `meta.code.type`, which depends on how the extractor's
//! parser tags syntax nodes: a class constructor is emitted with
//! `kind: class`, and only its `MethodDefinition` node tag tells it apart
//! from the class itself.

use crate::model::{truthy, Access, Kind, NodeKind, Scope, Symbol};

pub fn is_deprecated(symbol: &Symbol) -> bool {
    symbol.deprecated.as_ref().is_some_and(truthy)
}

pub fn is_global(symbol: &Symbol) -> bool {
    symbol.scope == Some(Scope::Global)
}

pub fn is_namespace(symbol: &Symbol) -> bool {
    symbol.kind == Some(Kind::Namespace)
}

pub fn is_module(symbol: &Symbol) -> bool {
    symbol.kind == Some(Kind::Module)
}

/// A class symbol that is not its constructor entry, or anything declared
/// with a class declaration.
pub fn is_class(symbol: &Symbol) -> bool {
    (symbol.kind == Some(Kind::Class) && !is_constructor(symbol))
        || symbol.node_kind() == NodeKind::ClassDeclaration
}

/// The constructor entry of a class (`kind: class` on a method node).
pub fn is_constructor(symbol: &Symbol) -> bool {
    symbol.kind == Some(Kind::Class) && symbol.node_kind() == NodeKind::MethodDefinition
}

pub fn is_static_member(symbol: &Symbol) -> bool {
    symbol.scope == Some(Scope::Static)
}

pub use self::is_static_member as is_static;

pub fn is_inner(symbol: &Symbol) -> bool {
    symbol.scope == Some(Scope::Inner)
}

pub fn is_instance_member(symbol: &Symbol) -> bool {
    symbol.scope == Some(Scope::Instance)
}

pub fn is_method(symbol: &Symbol) -> bool {
    symbol.kind == Some(Kind::Function)
        || matches!(
            symbol.node_kind(),
            NodeKind::MethodDefinition | NodeKind::FunctionExpression
        )
}

pub fn is_instance_method(symbol: &Symbol) -> bool {
    is_instance_member(symbol) && is_method(symbol)
}

pub fn is_static_method(symbol: &Symbol) -> bool {
    is_static_member(symbol) && is_method(symbol)
}

pub fn is_property(symbol: &Symbol) -> bool {
    symbol.kind == Some(Kind::Member)
}

pub fn is_instance_property(symbol: &Symbol) -> bool {
    is_instance_member(symbol) && is_property(symbol)
}

pub fn is_static_property(symbol: &Symbol) -> bool {
    is_static_member(symbol) && is_property(symbol)
}

pub fn is_type_def(symbol: &Symbol) -> bool {
    symbol.kind == Some(Kind::Typedef)
}

pub use self::is_type_def as is_custom_type;

pub fn is_constant(symbol: &Symbol) -> bool {
    symbol.kind == Some(Kind::Constant)
}

pub fn is_event(symbol: &Symbol) -> bool {
    symbol.kind == Some(Kind::Event)
}

pub fn is_enum(symbol: &Symbol) -> bool {
    symbol.is_enum
}

pub fn is_read_only(symbol: &Symbol) -> bool {
    symbol.readonly
}

/// No `access` field, or `access: public`.
pub fn is_public(symbol: &Symbol) -> bool {
    matches!(symbol.access, None | Some(Access::Public))
}

pub fn is_private(symbol: &Symbol) -> bool {
    symbol.access == Some(Access::Private)
}

pub fn is_protected(symbol: &Symbol) -> bool {
    symbol.access == Some(Access::Protected)
}

pub fn is_package_private(symbol: &Symbol) -> bool {
    symbol.access == Some(Access::Package)
}

pub fn is_undocumented(symbol: &Symbol) -> bool {
    symbol.comments.as_deref().map_or(true, str::is_empty)
}

/// Either the class description or the plain description has text.
pub fn has_description(symbol: &Symbol) -> bool {
    [&symbol.classdesc, &symbol.description]
        .into_iter()
        .flatten()
        .any(|d| !d.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::load_symbols;
    use serde_json::json;

    fn symbol(value: serde_json::Value) -> Symbol {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn class_and_constructor_are_distinguished() {
        let class = symbol(json!({
            "name": "Widget", "kind": "class",
            "meta": {"code": {"type": "ClassDeclaration"}}
        }));
        let ctor = symbol(json!({
            "name": "Widget", "kind": "class",
            "meta": {"code": {"type": "MethodDefinition"}}
        }));
        assert!(is_class(&class));
        assert!(!is_constructor(&class));
        assert!(is_constructor(&ctor));
        assert!(!is_class(&ctor));
    }

    #[test]
    fn class_declaration_node_without_class_kind() {
        let s = symbol(json!({"name": "X", "kind": "member", "meta": {"code": {"type": "ClassDeclaration"}}}));
        assert!(is_class(&s));
    }

    #[test]
    fn instance_method() {
        let by_kind = symbol(json!({"name": "a", "kind": "function", "scope": "instance"}));
        let by_node = symbol(json!({
            "name": "b", "kind": "member", "scope": "instance",
            "meta": {"code": {"type": "FunctionExpression"}}
        }));
        let static_fn = symbol(json!({"name": "c", "kind": "function", "scope": "static"}));
        let field = symbol(json!({"name": "d", "kind": "member", "scope": "instance"}));
        assert!(is_instance_method(&by_kind));
        assert!(is_instance_method(&by_node));
        assert!(!is_instance_method(&static_fn));
        assert!(is_static_method(&static_fn));
        assert!(!is_instance_method(&field));
        assert!(is_instance_property(&field));
    }

    #[test]
    fn static_aliases() {
        let s = symbol(json!({"name": "x", "kind": "member", "scope": "static"}));
        assert!(is_static(&s));
        assert!(is_static_member(&s));
        assert!(is_static_property(&s));
        assert!(!is_inner(&s));
        assert!(!is_global(&s));
    }

    #[test]
    fn typedef_aliases() {
        let s = symbol(json!({"name": "Opts", "kind": "typedef"}));
        assert!(is_type_def(&s));
        assert!(is_custom_type(&s));
    }

    #[test]
    fn access_levels() {
        let public = symbol(json!({"name": "a"}));
        let explicit = symbol(json!({"name": "a", "access": "public"}));
        let private = symbol(json!({"name": "a", "access": "private"}));
        let protected = symbol(json!({"name": "a", "access": "protected"}));
        let package = symbol(json!({"name": "a", "access": "package"}));
        assert!(is_public(&public));
        assert!(is_public(&explicit));
        assert!(is_private(&private) && !is_public(&private));
        assert!(is_protected(&protected));
        assert!(is_package_private(&package) && !is_public(&package));
    }

    #[test]
    fn deprecated_flag_or_message() {
        assert!(is_deprecated(&symbol(json!({"deprecated": true}))));
        assert!(is_deprecated(&symbol(json!({"deprecated": "use y"}))));
        assert!(!is_deprecated(&symbol(json!({"deprecated": false}))));
        assert!(!is_deprecated(&symbol(json!({}))));
    }

    #[test]
    fn documentation_checks() {
        let undocumented = symbol(json!({"name": "a"}));
        let documented = symbol(json!({"name": "a", "comment": "/** a */", "description": "  "}));
        let classdesc = symbol(json!({"name": "a", "classdesc": "A thing"}));
        assert!(is_undocumented(&undocumented));
        assert!(!is_undocumented(&documented));
        assert!(!has_description(&documented));
        assert!(has_description(&classdesc));
    }

    #[test]
    fn kind_checks() {
        let symbols = load_symbols(
            r#"[{"kind": "namespace"}, {"kind": "module"}, {"kind": "constant"},
                {"kind": "event"}, {"kind": "member", "isEnum": true, "readonly": true}]"#,
        )
        .unwrap();
        assert!(is_namespace(&symbols[0]));
        assert!(is_module(&symbols[1]));
        assert!(is_constant(&symbols[2]));
        assert!(is_event(&symbols[3]));
        assert!(is_enum(&symbols[4]) && is_read_only(&symbols[4]));
        assert!(!is_method(&symbols[4]));
    }
}
