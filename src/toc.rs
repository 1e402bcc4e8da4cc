//! Heading anchors and table-of-contents lines.

use crate::model::GdClass;
use crate::render::markdown::{bold, link};
use std::collections::BTreeSet;

/// Anchor of a member's heading: `take_damage` → `#take-damage`.
///
/// Static-site generators slug `### take_damage` with dashes, so only the
/// fragment is converted; link text keeps the underscores.
pub fn symbol_anchor(symbol: &str) -> String {
    format!("#{}", symbol.replace('_', "-"))
}

/// `- [Name](Name)`, indented under a category when there is one.
pub fn render_toc_item(class_name: &str, indent: &str) -> String {
    format!("{}- {}", indent, link(class_name, class_name))
}

/// Category-grouped table of contents.
///
/// Categorised classes are nested under a bold category bullet; the
/// uncategorised group is listed at the top level. `excluded` names are left
/// out, and a category left empty by them disappears.
pub fn render_toc(groups: &[(&str, Vec<&GdClass>)], excluded: &BTreeSet<String>) -> Vec<String> {
    let mut toc = Vec::new();
    for (category, classes) in groups {
        let listed: Vec<&&GdClass> = classes
            .iter()
            .filter(|c| !excluded.contains(&c.name))
            .collect();
        if listed.is_empty() {
            continue;
        }

        let mut indent = "";
        if !category.is_empty() {
            toc.push(format!("- {}", bold(category)));
            indent = "  ";
        }
        for class in listed {
            toc.push(render_toc_item(&class.name, indent));
        }
    }
    toc
}
