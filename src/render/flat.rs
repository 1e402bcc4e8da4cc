//! Flat Markdown layout: one page per class plus an optional index page.

use crate::model::GdClass;
use crate::render::markdown::{heading, small};
use crate::render::Layout;

pub struct FlatLayout;

impl Layout for FlatLayout {
    fn preamble(&self, class: &GdClass) -> Vec<String> {
        let mut title = class.name.clone();
        if class.is_abstract() {
            title.push(' ');
            title.push_str(&small("(abstract)"));
        }
        heading(&title, 1)
    }

    fn has_index_document(&self) -> bool {
        true
    }

    fn has_navigation_groups(&self) -> bool {
        false
    }
}
