//! Reflection dumps into the class model.

pub mod godot;
pub mod merge;

use crate::error::Result;
use crate::model::{GdClass, ProjectInfo};

/// Classes and project metadata read from one or more dumps.
#[derive(Debug, Default)]
pub struct Reflection {
    pub project: ProjectInfo,
    pub classes: Vec<GdClass>,
}

/// Parse one Godot reflection dump.
///
/// `nav_root` is stripped from script paths before navigation paths are
/// derived. Classes without a name are skipped.
pub fn parse(content: &str, nav_root: Option<&str>) -> Result<Reflection> {
    let dump: godot::ProjectDump = serde_json::from_str(content)?;

    let project = ProjectInfo {
        name: dump.name,
        version: dump.version,
        description: dump.description,
    };

    let mut classes = Vec::with_capacity(dump.classes.len());
    for class in dump.classes {
        if class.name.is_empty() {
            tracing::debug!("skipping unnamed class at {}", class.path);
            continue;
        }
        classes.push(class.into_class(nav_root));
    }

    Ok(Reflection { project, classes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_project() {
        let reflection = parse(
            r#"{"name": "Demo", "version": "1.0", "description": "A demo.",
                "classes": [
                    {"name": "Foo", "path": "res://foo.gd"},
                    {"name": "", "path": "res://anon.gd"}
                ]}"#,
            None,
        )
        .unwrap();
        assert_eq!(reflection.project.name, "Demo");
        assert_eq!(reflection.project.version, "1.0");
        assert_eq!(reflection.classes.len(), 1);
        assert_eq!(reflection.classes[0].nav_path, "/foo");
    }

    #[test]
    fn parse_rejects_invalid_json() {
        let err = parse("{not json", None).unwrap_err();
        assert!(err.to_string().starts_with("invalid reflection data"));
    }

    #[test]
    fn parse_empty_object() {
        let reflection = parse("{}", None).unwrap();
        assert!(reflection.classes.is_empty());
        assert_eq!(reflection.project, ProjectInfo::default());
    }
}
