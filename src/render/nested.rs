//! Nested navigation layout: Jekyll pages whose front matter places each
//! class under its category in the site's navigation tree.

use crate::config::RootClass;
use crate::model::GdClass;
use crate::render::markdown::front_matter;
use crate::render::{category_label, Layout};

/// Navigation order of section pages; the root page takes 1.
pub const SECTION_NAV_ORDER: u32 = 2;

pub struct NavigationLayout<'a> {
    root: &'a RootClass,
}

impl<'a> NavigationLayout<'a> {
    pub fn new(root: &'a RootClass) -> Self {
        Self { root }
    }
}

impl Layout for NavigationLayout<'_> {
    fn preamble(&self, class: &GdClass) -> Vec<String> {
        if self.root.is_root(class) {
            return front_matter(&[
                format!("title: {}", self.root.display_name),
                format!("permalink: {}", self.root.permalink()),
                "nav_order: 1".to_string(),
            ]);
        }

        let mut entries = vec![
            format!("title: {}", class.name),
            format!("permalink: {}", class.nav_path),
        ];
        if let Some(parent) = parent_segment(&class.nav_path) {
            entries.push(format!("parent: {}", category_label(parent)));
        }
        front_matter(&entries)
    }

    fn has_index_document(&self) -> bool {
        false
    }

    fn has_navigation_groups(&self) -> bool {
        true
    }
}

/// Second-to-last segment of a navigation path, `/gui/button` → `gui`.
/// Top-level paths like `/button` have none.
fn parent_segment(nav_path: &str) -> Option<&str> {
    let segments: Vec<&str> = nav_path.split('/').collect();
    if segments.len() < 3 {
        return None;
    }
    Some(segments[segments.len() - 2]).filter(|s| !s.is_empty())
}

/// Intermediate segments across all navigation paths, in first-seen order.
///
/// The empty root segment, the root class segment and each path's own leaf
/// are skipped, so a segment only ever seen as a leaf never becomes a section.
pub fn section_segments<'c>(
    classes: impl IntoIterator<Item = &'c GdClass>,
    root: &RootClass,
) -> Vec<String> {
    let root_segment = root.segment();
    let mut sections: Vec<String> = Vec::new();
    for class in classes {
        let segments: Vec<&str> = class.nav_path.split('/').collect();
        let Some((_, intermediate)) = segments.split_last() else {
            continue;
        };
        for segment in intermediate {
            if segment.is_empty() || *segment == root_segment {
                continue;
            }
            if !sections.iter().any(|s| s == segment) {
                sections.push(segment.to_string());
            }
        }
    }
    sections
}
