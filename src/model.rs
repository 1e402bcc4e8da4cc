//! Format-agnostic data model for reflected GDScript classes.
//!
//! Built once from the reflection dump and only read afterwards. Every member
//! kind implements [`Symbol`], which is all the composer needs to render it.

use crate::render::markdown::small;
use std::collections::BTreeSet;

/// A named, documented unit of a class.
pub trait Symbol {
    fn name(&self) -> &str;

    /// Free text, may contain `[Class.symbol]` references.
    fn description(&self) -> &str;

    /// GDScript declaration shown in code blocks.
    fn signature(&self) -> &str;

    /// Text of the level-3 heading in the detailed sections.
    fn heading(&self) -> String {
        self.name().to_string()
    }

    /// Lines rendered between the signature block and the description.
    fn unique_attributes(&self) -> Vec<String> {
        Vec::new()
    }

    /// `[type, name]` cells of the summary tables.
    fn summary(&self) -> [String; 2] {
        [String::new(), self.name().to_string()]
    }
}

/// A member variable.
#[derive(Debug, Clone, Default)]
pub struct Property {
    pub name: String,
    pub type_name: String,
    pub default_value: Option<String>,
    /// Public setter, if any (private `_` accessors are dropped on load)
    pub setter: Option<String>,
    pub getter: Option<String>,
    pub signature: String,
    pub description: String,
}

impl Symbol for Property {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn signature(&self) -> &str {
        &self.signature
    }

    fn unique_attributes(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(ref value) = self.default_value {
            lines.push(format!("- Default: `{}`", value));
        }
        if let Some(ref setter) = self.setter {
            lines.push(format!("- Setter: `{}`", setter));
        }
        if let Some(ref getter) = self.getter {
            lines.push(format!("- Getter: `{}`", getter));
        }
        lines
    }

    fn summary(&self) -> [String; 2] {
        [self.type_name.clone(), self.name.clone()]
    }
}

/// How a function is dispatched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FunctionKind {
    #[default]
    Method,
    Virtual,
    Static,
}

impl FunctionKind {
    fn label(self) -> Option<&'static str> {
        match self {
            FunctionKind::Method => None,
            FunctionKind::Virtual => Some("virtual"),
            FunctionKind::Static => Some("static"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub type_name: String,
}

impl Argument {
    /// `name: Type`, or just `name` when untyped.
    fn declaration(&self) -> String {
        if self.type_name.is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.name, self.type_name)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Function {
    pub name: String,
    pub kind: FunctionKind,
    pub return_type: String,
    pub arguments: Vec<Argument>,
    pub signature: String,
    pub description: String,
}

impl Function {
    /// Build a function, displaying GDScript's `null` return type as `void`.
    ///
    /// An empty `signature` is declared from the name, kind, arguments and
    /// return type.
    pub fn new(
        name: String,
        kind: FunctionKind,
        return_type: &str,
        arguments: Vec<Argument>,
        signature: &str,
        description: String,
    ) -> Self {
        let return_type = return_type.replacen("null", "void", 1);
        let signature = if signature.is_empty() {
            declare_function(&name, kind, &arguments, &return_type)
        } else {
            signature.replacen("-> null", "-> void", 1)
        };
        Self {
            name,
            kind,
            return_type,
            arguments,
            signature,
            description,
        }
    }
}

fn declare_function(
    name: &str,
    kind: FunctionKind,
    arguments: &[Argument],
    return_type: &str,
) -> String {
    let keyword = match kind {
        FunctionKind::Static => "static func",
        FunctionKind::Method | FunctionKind::Virtual => "func",
    };
    let parameters: Vec<String> = arguments.iter().map(Argument::declaration).collect();
    let mut declaration = format!("{} {}({})", keyword, name, parameters.join(", "));
    if !return_type.is_empty() {
        declaration.push_str(" -> ");
        declaration.push_str(return_type);
    }
    declaration
}

impl Symbol for Function {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn signature(&self) -> &str {
        &self.signature
    }

    fn heading(&self) -> String {
        match self.kind.label() {
            Some(label) => format!("{} {}", self.name, small(label)),
            None => self.name.clone(),
        }
    }

    fn summary(&self) -> [String; 2] {
        [self.return_type.clone(), self.signature.clone()]
    }
}

#[derive(Debug, Clone, Default)]
pub struct Signal {
    pub name: String,
    pub arguments: Vec<String>,
    pub signature: String,
    pub description: String,
}

impl Signal {
    /// An empty `signature` is declared as `signal name(a, b)`.
    pub fn new(
        name: String,
        arguments: Vec<String>,
        signature: &str,
        description: String,
    ) -> Self {
        let signature = if signature.is_empty() {
            format!("signal {}({})", name, arguments.join(", "))
        } else {
            signature.to_string()
        };
        Self {
            name,
            arguments,
            signature,
            description,
        }
    }
}

impl Symbol for Signal {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn signature(&self) -> &str {
        &self.signature
    }
}

/// Named integer values, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Enumeration {
    pub name: String,
    pub values: Vec<(String, i64)>,
    pub signature: String,
    pub description: String,
}

impl Symbol for Enumeration {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn signature(&self) -> &str {
        &self.signature
    }

    fn unique_attributes(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|(key, value)| format!("- `{} = {}`", key, value))
            .collect()
    }
}

/// A reflected GDScript class.
#[derive(Debug, Clone, Default)]
pub struct GdClass {
    pub name: String,
    /// Direct parent class name
    pub extends: Option<String>,
    /// Table-of-contents group; empty when uncategorised
    pub category: String,
    pub properties: Vec<Property>,
    pub functions: Vec<Function>,
    pub signals: Vec<Signal>,
    pub enums: Vec<Enumeration>,
    pub description: String,
    /// `tags:` metadata, e.g. "abstract"
    pub tags: Vec<String>,
    /// Slash-delimited placement in the nested navigation, e.g. `/gui/button`
    pub nav_path: String,
}

impl GdClass {
    pub fn is_abstract(&self) -> bool {
        self.tags.iter().any(|t| t == "abstract")
    }

    /// Names a reference may point at: properties, functions, signals and enums.
    pub fn member_names(&self) -> BTreeSet<String> {
        let properties = self.properties.iter().map(|p| p.name.clone());
        let functions = self.functions.iter().map(|f| f.name.clone());
        let signals = self.signals.iter().map(|s| s.name.clone());
        let enums = self.enums.iter().map(|e| e.name.clone());
        properties
            .chain(functions)
            .chain(signals)
            .chain(enums)
            .collect()
    }
}

/// Project-wide metadata for the index page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_return_type_shown_as_void() {
        let func = Function::new(
            "reset".to_string(),
            FunctionKind::Method,
            "null",
            Vec::new(),
            "func reset() -> null",
            String::new(),
        );
        assert_eq!(func.return_type, "void");
        assert_eq!(func.signature, "func reset() -> void");
        assert_eq!(func.summary(), ["void".to_string(), "func reset() -> void".to_string()]);
    }

    #[test]
    fn static_function_heading() {
        let func = Function::new(
            "create".to_string(),
            FunctionKind::Static,
            "Node",
            Vec::new(),
            "static func create() -> Node",
            String::new(),
        );
        assert_eq!(func.heading(), "create <small>static</small>");
    }

    #[test]
    fn plain_method_heading() {
        let func = Function {
            name: "update".to_string(),
            ..Default::default()
        };
        assert_eq!(func.heading(), "update");
    }

    #[test]
    fn property_attributes() {
        let prop = Property {
            name: "health".to_string(),
            type_name: "int".to_string(),
            default_value: Some("100".to_string()),
            setter: Some("set_health".to_string()),
            ..Default::default()
        };
        assert_eq!(
            prop.unique_attributes(),
            vec!["- Default: `100`", "- Setter: `set_health`"]
        );
        assert_eq!(prop.summary(), ["int".to_string(), "health".to_string()]);
    }

    #[test]
    fn enum_values_in_order() {
        let e = Enumeration {
            name: "State".to_string(),
            values: vec![("IDLE".to_string(), 0), ("RUN".to_string(), 1)],
            ..Default::default()
        };
        assert_eq!(e.unique_attributes(), vec!["- `IDLE = 0`", "- `RUN = 1`"]);
    }

    #[test]
    fn member_names_cover_all_kinds() {
        let class = GdClass {
            name: "Foo".to_string(),
            properties: vec![Property {
                name: "health".to_string(),
                ..Default::default()
            }],
            functions: vec![Function {
                name: "heal".to_string(),
                ..Default::default()
            }],
            signals: vec![Signal {
                name: "died".to_string(),
                ..Default::default()
            }],
            enums: vec![Enumeration {
                name: "State".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let names: Vec<_> = class.member_names().into_iter().collect();
        assert_eq!(names, vec!["State", "died", "heal", "health"]);
        assert!(GdClass::default().member_names().is_empty());
    }

    #[test]
    fn missing_signature_declared_from_arguments() {
        let arguments = vec![
            Argument {
                name: "amount".to_string(),
                type_name: "int".to_string(),
            },
            Argument {
                name: "source".to_string(),
                type_name: String::new(),
            },
        ];
        let func = Function::new(
            "damage".to_string(),
            FunctionKind::Method,
            "null",
            arguments,
            "",
            String::new(),
        );
        assert_eq!(func.signature, "func damage(amount: int, source) -> void");

        let create = Function::new(
            "create".to_string(),
            FunctionKind::Static,
            "",
            Vec::new(),
            "",
            String::new(),
        );
        assert_eq!(create.signature, "static func create()");
    }

    #[test]
    fn missing_signal_signature() {
        let signal = Signal::new(
            "died".to_string(),
            vec!["cause".to_string(), "at".to_string()],
            "",
            String::new(),
        );
        assert_eq!(signal.signature, "signal died(cause, at)");

        let given = Signal::new("hit".to_string(), Vec::new(), "signal hit()", String::new());
        assert_eq!(given.signature, "signal hit()");
    }

    #[test]
    fn abstract_tag() {
        let class = GdClass {
            tags: vec!["abstract".to_string()],
            ..Default::default()
        };
        assert!(class.is_abstract());
        assert!(!GdClass::default().is_abstract());
    }
}
