//! Data model for documented symbols: the records a JSDoc-style extractor
//! emits, one per documented code entity.
//!
//! Only the fields the library inspects are typed. Everything else is kept
//! in a flattened `extra` map so a symbol can be re-serialised and queried
//! by dotted path.

use crate::error::{Error, Result};
use crate::notate::{notate, NotatePath};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single documented code entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub longname: String,
    /// Set by the extractor when `name`/`longname` were overwritten by an
    /// alias target.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub memberof: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub kind: Option<Kind>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Declared types (`type.names`).
    #[serde(
        default,
        rename = "type",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub type_names: Option<TypeNames>,
    /// `None` when the field is missing or is not an array.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub returns: Option<Vec<ReturnEntry>>,
    /// `true` or a deprecation message.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Value>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "is_false")]
    pub readonly: bool,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub access: Option<Access>,
    /// Raw doc comment; absent for undocumented symbols.
    #[serde(
        default,
        alias = "comment",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub comments: Option<String>,
    #[serde(
        default,
        rename = "isEnum",
        deserialize_with = "lenient",
        skip_serializing_if = "is_false"
    )]
    pub is_enum: bool,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub classdesc: Option<String>,
    /// Child symbols, when the dump is nested.
    #[serde(
        default,
        rename = "$members",
        deserialize_with = "lenient",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub members: Vec<Symbol>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Symbol {
    /// Resolve a dotted path against the serialised form of this symbol.
    ///
    /// Unlike the typed accessors this sees every field the extractor
    /// emitted, including ones the model does not know about.
    pub fn notate<'p>(&self, path: impl Into<NotatePath<'p>>) -> Option<Value> {
        let value = serde_json::to_value(self).ok()?;
        notate(&value, path).cloned()
    }

    /// `meta.code.name`, if present.
    pub fn code_name(&self) -> Option<&str> {
        self.meta.as_ref()?.code.as_ref()?.name.as_deref()
    }

    /// Syntax-node tag of `meta.code.type`.
    pub fn node_kind(&self) -> NodeKind {
        self.meta
            .as_ref()
            .and_then(|m| m.code.as_ref())
            .and_then(|c| c.node_type.as_deref())
            .map(NodeKind::from)
            .unwrap_or(NodeKind::Unknown)
    }
}

/// Binding context of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Global,
    Static,
    Instance,
    Inner,
}

impl Scope {
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Global => "global",
            Scope::Static => "static",
            Scope::Instance => "instance",
            Scope::Inner => "inner",
        }
    }
}

/// Symbol kind. Kinds this library does not inspect are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Kind {
    Class,
    Constant,
    Event,
    External,
    File,
    Function,
    Member,
    Mixin,
    Module,
    Namespace,
    Package,
    Typedef,
    Other(String),
}

impl Kind {
    pub fn as_str(&self) -> &str {
        match self {
            Kind::Class => "class",
            Kind::Constant => "constant",
            Kind::Event => "event",
            Kind::External => "external",
            Kind::File => "file",
            Kind::Function => "function",
            Kind::Member => "member",
            Kind::Mixin => "mixin",
            Kind::Module => "module",
            Kind::Namespace => "namespace",
            Kind::Package => "package",
            Kind::Typedef => "typedef",
            Kind::Other(s) => s,
        }
    }
}

impl From<String> for Kind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "class" => Kind::Class,
            "constant" => Kind::Constant,
            "event" => Kind::Event,
            "external" => Kind::External,
            "file" => Kind::File,
            "function" => Kind::Function,
            "member" => Kind::Member,
            "mixin" => Kind::Mixin,
            "module" => Kind::Module,
            "namespace" => Kind::Namespace,
            "package" => Kind::Package,
            "typedef" => Kind::Typedef,
            _ => Kind::Other(s),
        }
    }
}

impl From<Kind> for String {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Other(s) => s,
            k => k.as_str().to_string(),
        }
    }
}

/// Access level. A missing `access` field means public.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Access {
    Public,
    Private,
    Protected,
    Package,
    Other(String),
}

impl Access {
    pub fn as_str(&self) -> &str {
        match self {
            Access::Public => "public",
            Access::Private => "private",
            Access::Protected => "protected",
            Access::Package => "package",
            Access::Other(s) => s,
        }
    }
}

impl From<String> for Access {
    fn from(s: String) -> Self {
        match s.as_str() {
            "public" => Access::Public,
            "private" => Access::Private,
            "protected" => Access::Protected,
            "package" => Access::Package,
            _ => Access::Other(s),
        }
    }
}

impl From<Access> for String {
    fn from(access: Access) -> Self {
        match access {
            Access::Other(s) => s,
            a => a.as_str().to_string(),
        }
    }
}

/// Source-location metadata attached by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeMeta>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub lineno: Option<u64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeMeta {
    /// Raw source identifier, e.g. `Foo.prototype.bar`.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Syntax node kind, e.g. `MethodDefinition`.
    #[serde(
        default,
        rename = "type",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub node_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Syntax-node tags the classifier cares about.
///
/// This is a heuristic over the extractor's parser output, not a structural
/// guarantee: a different parser may tag the same construct differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    MethodDefinition,
    FunctionExpression,
    ClassDeclaration,
    /// Any other tag.
    Other,
    /// No `meta.code.type` at all.
    Unknown,
}

impl From<&str> for NodeKind {
    fn from(s: &str) -> Self {
        match s {
            "MethodDefinition" => NodeKind::MethodDefinition,
            "FunctionExpression" => NodeKind::FunctionExpression,
            "ClassDeclaration" => NodeKind::ClassDeclaration,
            _ => NodeKind::Other,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeNames {
    #[serde(default, deserialize_with = "lenient")]
    pub names: Vec<String>,
}

/// One `@returns` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnEntry {
    #[serde(
        default,
        rename = "type",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub type_names: Option<TypeNames>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Load a symbol dump: a JSON array of symbols, or a single symbol object.
///
/// Only invalid JSON and non-container roots are errors. Array entries that
/// are not objects are skipped, and typed fields holding a value of the
/// wrong shape fall back to their defaults.
pub fn load_symbols(json: &str) -> Result<Vec<Symbol>> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Array(items) => {
            let mut symbols = Vec::with_capacity(items.len());
            for item in items {
                if !item.is_object() {
                    tracing::debug!(
                        found = json_type_name(&item),
                        "skipping non-object symbol entry"
                    );
                    continue;
                }
                symbols.push(serde_json::from_value(item)?);
            }
            Ok(symbols)
        }
        Value::Object(_) => Ok(vec![serde_json::from_value(value)?]),
        other => Err(Error::InvalidSymbols {
            found: json_type_name(&other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// JavaScript-style truthiness, for fields the extractor emits as either a
/// flag or a message.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Deserialize a field, falling back to its default when the value has the
/// wrong shape (`"name": null`, `"readonly": "yes"`, `"type": "String"`).
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_array_of_symbols() {
        let json = r#"[
            {"name": "Foo", "longname": "Foo", "kind": "class", "scope": "global"},
            {"name": "bar", "longname": "Foo#bar", "kind": "function", "scope": "instance",
             "meta": {"code": {"name": "Foo#bar", "type": "MethodDefinition"}}}
        ]"#;
        let symbols = load_symbols(json).unwrap();
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].kind, Some(Kind::Class));
        assert_eq!(symbols[1].scope, Some(Scope::Instance));
        assert_eq!(symbols[1].code_name(), Some("Foo#bar"));
        assert_eq!(symbols[1].node_kind(), NodeKind::MethodDefinition);
    }

    #[test]
    fn load_single_object() {
        let symbols = load_symbols(r#"{"name": "x", "longname": "x"}"#).unwrap();
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].node_kind(), NodeKind::Unknown);
    }

    #[test]
    fn load_rejects_scalars() {
        let err = load_symbols("42").unwrap_err();
        assert!(matches!(err, Error::InvalidSymbols { found: "a number" }));
    }

    #[test]
    fn unknown_kind_is_preserved() {
        let symbols = load_symbols(r#"{"name": "x", "kind": "interface"}"#).unwrap();
        assert_eq!(symbols[0].kind, Some(Kind::Other("interface".to_string())));
        let back = serde_json::to_value(&symbols[0]).unwrap();
        assert_eq!(back["kind"], "interface");
    }

    #[test]
    fn non_array_returns_is_none() {
        let symbols = load_symbols(r#"{"name": "f", "returns": "nope"}"#).unwrap();
        assert!(symbols[0].returns.is_none());
    }

    #[test]
    fn malformed_scalar_fields_fall_back_to_defaults() {
        let json = r#"{"name": null, "longname": 7, "readonly": "yes", "isEnum": 1,
            "scope": "galactic", "kind": ["class"], "alias": false, "comment": {}}"#;
        let symbols = load_symbols(json).unwrap();
        let symbol = &symbols[0];
        assert_eq!(symbol.name, "");
        assert_eq!(symbol.longname, "");
        assert!(!symbol.readonly);
        assert!(!symbol.is_enum);
        assert_eq!(symbol.scope, None);
        assert_eq!(symbol.kind, None);
        assert_eq!(symbol.alias, None);
        assert_eq!(symbol.comments, None);
    }

    #[test]
    fn malformed_type_fields_fall_back_to_defaults() {
        let symbols = load_symbols(r#"{"name": "x", "type": "String"}"#).unwrap();
        assert_eq!(symbols[0].type_names, None);

        let symbols = load_symbols(r#"{"name": "x", "type": {"names": "String"}}"#).unwrap();
        assert_eq!(symbols[0].type_names, Some(TypeNames::default()));

        let json = r#"{"name": "f", "returns": [{"type": {"names": "x"}, "description": 3}]}"#;
        let symbols = load_symbols(json).unwrap();
        let returns = symbols[0].returns.as_ref().unwrap();
        assert_eq!(returns[0].type_names, Some(TypeNames::default()));
        assert_eq!(returns[0].description, None);
    }

    #[test]
    fn malformed_meta_and_members_fall_back_to_defaults() {
        let json = r#"{"name": "x", "meta": {"lineno": "twelve", "code": {"name": 5, "type": "MethodDefinition"}},
            "$members": {"name": "child"}}"#;
        let symbols = load_symbols(json).unwrap();
        let meta = symbols[0].meta.as_ref().unwrap();
        assert_eq!(meta.lineno, None);
        assert_eq!(symbols[0].code_name(), None);
        assert_eq!(symbols[0].node_kind(), NodeKind::MethodDefinition);
        assert!(symbols[0].members.is_empty());
    }

    #[test]
    fn malformed_field_keeps_rest_of_dump() {
        let json = r#"[
            {"name": "good", "longname": "good"},
            {"name": null, "longname": "Foo#bad", "readonly": "yes"},
            42,
            {"name": "last", "longname": "last"}
        ]"#;
        let symbols = load_symbols(json).unwrap();
        let longnames: Vec<_> = symbols.iter().map(|s| s.longname.as_str()).collect();
        assert_eq!(longnames, vec!["good", "Foo#bad", "last"]);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(load_symbols("[{").unwrap_err(), Error::Json(_)));
    }

    #[test]
    fn comment_alias_and_members() {
        let json = r#"{"name": "ns", "comment": "/** ns */",
            "$members": [{"name": "child", "longname": "ns.child"}]}"#;
        let symbols = load_symbols(json).unwrap();
        assert_eq!(symbols[0].comments.as_deref(), Some("/** ns */"));
        assert_eq!(symbols[0].members[0].longname, "ns.child");
    }

    #[test]
    fn notate_sees_unknown_fields() {
        let json = r#"{"name": "f", "meta": {"lineno": 12, "range": [3, 9]}, "since": "1.2"}"#;
        let symbols = load_symbols(json).unwrap();
        assert_eq!(symbols[0].notate("since"), Some(Value::from("1.2")));
        assert_eq!(symbols[0].notate("meta.lineno"), Some(Value::from(12)));
        assert_eq!(symbols[0].notate("meta.missing.deeper"), None);
    }

    #[test]
    fn truthiness() {
        assert!(truthy(&Value::from(true)));
        assert!(truthy(&Value::from("since 2.0")));
        assert!(!truthy(&Value::from("")));
        assert!(!truthy(&Value::Null));
        assert!(!truthy(&Value::from(0)));
    }
}
