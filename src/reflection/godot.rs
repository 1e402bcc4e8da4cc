//! Godot reflection dump format.
//!
//! Mirrors the JSON written by the GDScript language server's reference
//! collector. Every field is optional on input; missing ones read as empty.
//!
//! Conversion rules:
//! - `tags:` and `category:` lines are lifted out of descriptions
//! - names starting with `_` are private and skipped, except virtual functions
//! - enums are the `Dictionary` constants, values in declaration order

use crate::model::*;
use serde::Deserialize;
use serde_json::Value;

const RESOURCE_SCHEME: &str = "res://";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectDump {
    pub name: String,
    pub version: String,
    pub description: String,
    pub classes: Vec<ClassDump>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClassDump {
    pub name: String,
    /// Script path, `res://...`
    pub path: String,
    /// Direct parent first
    pub extends_class: Vec<String>,
    pub description: String,
    pub members: Vec<MemberDump>,
    pub signals: Vec<SignalDump>,
    pub methods: Vec<MethodDump>,
    pub static_functions: Vec<MethodDump>,
    pub constants: Vec<ConstantDump>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MemberDump {
    pub name: String,
    pub data_type: String,
    pub default_value: Value,
    pub setter: String,
    pub getter: String,
    pub signature: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MethodDump {
    pub name: String,
    pub return_type: String,
    pub arguments: Vec<ArgumentDump>,
    pub signature: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ArgumentDump {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignalDump {
    pub name: String,
    pub arguments: Vec<String>,
    pub signature: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConstantDump {
    pub name: String,
    pub data_type: String,
    pub value: Value,
    pub signature: String,
    pub description: String,
}

/// Metadata lines found in a description.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    pub tags: Vec<String>,
    pub category: String,
}

/// Split `tags: a, b` and `category: Name` lines off a description.
///
/// Keys are matched case-insensitively after trimming; the remaining lines
/// are returned trimmed as a whole.
pub fn extract_metadata(description: &str) -> (String, Metadata) {
    let mut metadata = Metadata::default();
    let mut kept: Vec<&str> = Vec::new();

    for line in description.lines() {
        let key = line.trim_start().to_lowercase();
        let value = line.split_once(':').map(|(_, v)| v.trim()).unwrap_or("");
        if key.starts_with("tags:") {
            metadata.tags = value
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
        } else if key.starts_with("category:") {
            metadata.category = value.to_string();
        } else {
            kept.push(line);
        }
    }

    (kept.join("\n").trim().to_string(), metadata)
}

/// Navigation path of a script: `res://addons/rakugo/gui/button.gd` with
/// root `addons/rakugo` becomes `/gui/button`.
pub fn navigation_path(script_path: &str, nav_root: Option<&str>) -> String {
    let mut path = script_path
        .strip_prefix(RESOURCE_SCHEME)
        .unwrap_or(script_path)
        .trim_start_matches('/');

    if let Some(root) = nav_root.map(|r| r.trim_matches('/')).filter(|r| !r.is_empty()) {
        // Only strip whole segments
        if let Some(rest) = path.strip_prefix(root) {
            if rest.is_empty() || rest.starts_with('/') {
                path = rest.trim_start_matches('/');
            }
        }
    }

    let stem = match path.rsplit_once('.') {
        Some((stem, ext)) if !ext.contains('/') => stem,
        _ => path,
    };
    format!("/{}", stem.to_lowercase())
}

fn is_private(name: &str) -> bool {
    name.starts_with('_')
}

/// Public accessor name, if any.
fn accessor(name: String) -> Option<String> {
    Some(name).filter(|n| !n.is_empty() && !is_private(n))
}

/// Default values keep their JSON spelling, strings included: `"idle"`.
fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

impl ClassDump {
    pub fn into_class(self, nav_root: Option<&str>) -> GdClass {
        let (description, metadata) = extract_metadata(&self.description);
        let nav_path = navigation_path(&self.path, nav_root);

        let properties = self
            .members
            .into_iter()
            .filter(|m| !is_private(&m.name))
            .map(MemberDump::into_property)
            .collect();

        let methods = self
            .methods
            .into_iter()
            .map(|m| m.into_function(FunctionKind::Method));
        let statics = self
            .static_functions
            .into_iter()
            .map(|m| m.into_function(FunctionKind::Static));
        let functions = methods
            .chain(statics)
            .filter(|f| !is_private(&f.name) || f.kind == FunctionKind::Virtual)
            .collect();

        let signals = self
            .signals
            .into_iter()
            .map(|s| {
                let description = s.description.trim().to_string();
                Signal::new(s.name, s.arguments, &s.signature, description)
            })
            .collect();

        let enums = self
            .constants
            .into_iter()
            .filter(|c| c.data_type == "Dictionary" && !is_private(&c.name))
            .map(ConstantDump::into_enumeration)
            .collect();

        GdClass {
            name: self.name,
            extends: self.extends_class.into_iter().next().filter(|e| !e.is_empty()),
            category: metadata.category,
            properties,
            functions,
            signals,
            enums,
            description,
            tags: metadata.tags,
            nav_path,
        }
    }
}

impl MemberDump {
    fn into_property(self) -> Property {
        Property {
            default_value: render_value(&self.default_value),
            setter: accessor(self.setter),
            getter: accessor(self.getter),
            name: self.name,
            type_name: self.data_type,
            signature: self.signature,
            description: self.description.trim().to_string(),
        }
    }
}

impl MethodDump {
    /// `kind` is the declared kind; a `virtual` tag overrides a plain method.
    fn into_function(self, kind: FunctionKind) -> Function {
        let (description, metadata) = extract_metadata(&self.description);
        let kind = if kind == FunctionKind::Method && metadata.tags.iter().any(|t| t == "virtual") {
            FunctionKind::Virtual
        } else {
            kind
        };
        let arguments = self
            .arguments
            .into_iter()
            .map(|a| Argument {
                name: a.name,
                type_name: a.type_name,
            })
            .collect();
        Function::new(
            self.name,
            kind,
            &self.return_type,
            arguments,
            &self.signature,
            description,
        )
    }
}

impl ConstantDump {
    fn into_enumeration(self) -> Enumeration {
        let values = match self.value {
            Value::Object(map) => map
                .into_iter()
                .filter_map(|(key, value)| value.as_i64().map(|n| (key, n)))
                .collect(),
            _ => Vec::new(),
        };
        Enumeration {
            name: self.name,
            values,
            signature: self.signature,
            description: self.description.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_lines_removed() {
        let (desc, meta) =
            extract_metadata("Stores variables.\ncategory: Systems\nTags: abstract, singleton\n");
        assert_eq!(desc, "Stores variables.");
        assert_eq!(meta.category, "Systems");
        assert_eq!(meta.tags, vec!["abstract", "singleton"]);
    }

    #[test]
    fn metadata_absent() {
        let (desc, meta) = extract_metadata("  Just text.\nMore text.  ");
        assert_eq!(desc, "Just text.\nMore text.");
        assert_eq!(meta, Metadata::default());
    }

    #[test]
    fn nav_path_strips_scheme_root_and_extension() {
        assert_eq!(
            navigation_path("res://addons/Rakugo/gui/Button.gd", Some("addons/Rakugo")),
            "/gui/button"
        );
        assert_eq!(navigation_path("res://src/store.gd", None), "/src/store");
    }

    #[test]
    fn nav_root_matches_whole_segments() {
        assert_eq!(
            navigation_path("res://addons/rakugo_extra/x.gd", Some("addons/rakugo")),
            "/addons/rakugo_extra/x"
        );
    }

    #[test]
    fn nav_path_without_extension() {
        assert_eq!(navigation_path("res://v1.2/tool", None), "/v1.2/tool");
        assert_eq!(navigation_path("", None), "/");
    }

    #[test]
    fn class_conversion() {
        let dump: ClassDump = serde_json::from_str(
            r#"{
                "name": "Player",
                "path": "res://actors/player.gd",
                "extends_class": ["KinematicBody2D"],
                "description": "The player.\ncategory: Actors\ntags: abstract",
                "members": [
                    {"name": "speed", "data_type": "float", "default_value": 1.5,
                     "setter": "set_speed", "getter": "_get_speed",
                     "signature": "var speed: float = 1.5", "description": " Units. "},
                    {"name": "_cache", "data_type": "Dictionary", "signature": "var _cache"}
                ],
                "methods": [
                    {"name": "jump", "return_type": "null",
                     "arguments": [{"name": "height", "type": "float"}],
                     "signature": "func jump(height: float) -> null",
                     "description": "Jumps."},
                    {"name": "_helper", "return_type": "int",
                     "signature": "func _helper() -> int"},
                    {"name": "_on_hit", "return_type": "null",
                     "signature": "func _on_hit() -> null",
                     "description": "Override me.\ntags: virtual"}
                ],
                "static_functions": [
                    {"name": "create", "return_type": "Player",
                     "signature": "static func create() -> Player"}
                ],
                "signals": [
                    {"name": "died", "arguments": ["cause"], "signature": "signal died(cause)"},
                    {"name": "landed", "arguments": ["height", "surface"]}
                ],
                "constants": [
                    {"name": "State", "data_type": "Dictionary",
                     "value": {"IDLE": 0, "RUN": 1, "JUMP": 2},
                     "signature": "enum State {IDLE, RUN, JUMP}"},
                    {"name": "MAX_HP", "data_type": "int", "value": 10,
                     "signature": "const MAX_HP := 10"}
                ]
            }"#,
        )
        .unwrap();

        let class = dump.into_class(None);
        assert_eq!(class.name, "Player");
        assert_eq!(class.extends.as_deref(), Some("KinematicBody2D"));
        assert_eq!(class.category, "Actors");
        assert!(class.is_abstract());
        assert_eq!(class.description, "The player.");
        assert_eq!(class.nav_path, "/actors/player");

        assert_eq!(class.properties.len(), 1);
        let speed = &class.properties[0];
        assert_eq!(speed.default_value.as_deref(), Some("1.5"));
        assert_eq!(speed.setter.as_deref(), Some("set_speed"));
        assert_eq!(speed.getter, None);
        assert_eq!(speed.description, "Units.");

        let names: Vec<&str> = class.functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["jump", "_on_hit", "create"]);
        assert_eq!(class.functions[0].return_type, "void");
        assert_eq!(class.functions[0].arguments[0].type_name, "float");
        assert_eq!(class.functions[1].kind, FunctionKind::Virtual);
        assert_eq!(class.functions[1].description, "Override me.");
        assert_eq!(class.functions[2].kind, FunctionKind::Static);

        assert_eq!(class.signals[0].arguments, vec!["cause"]);
        assert_eq!(class.signals[1].signature, "signal landed(height, surface)");

        assert_eq!(class.enums.len(), 1);
        let keys: Vec<&str> = class.enums[0].values.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["IDLE", "RUN", "JUMP"]);
    }

    #[test]
    fn string_default_keeps_quotes() {
        assert_eq!(render_value(&Value::String("idle".to_string())).as_deref(), Some("\"idle\""));
        assert_eq!(render_value(&Value::Null), None);
    }
}
