//! Output formats and their layout dispatch.
//!
//! The composer asks the active [`Layout`] for every format-dependent
//! decision; the format enum is matched in exactly one place, [`OutputFormat::layout`].

pub mod flat;
pub mod markdown;
pub mod nested;

use crate::config::RootClass;
use crate::error::Error;
use crate::model::GdClass;
use std::str::FromStr;

/// Categories whose display label is not plain title case.
pub const CATEGORY_LABELS: &[(&str, &str)] = &[("gui", "GUI")];

/// Format-specific parts of document composition.
pub trait Layout {
    /// Lines opening a class document: front matter or a title heading.
    fn preamble(&self, class: &GdClass) -> Vec<String>;

    /// Whether an index request yields the project index page.
    fn has_index_document(&self) -> bool;

    /// Whether an index request yields navigation section pages.
    fn has_navigation_groups(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One plain Markdown page per class
    #[default]
    Flat,
    /// Jekyll pages with front matter for a nested navigation tree
    NestedNavigation,
}

impl OutputFormat {
    pub fn layout<'a>(&self, root: &'a RootClass) -> Box<dyn Layout + 'a> {
        match self {
            OutputFormat::Flat => Box::new(flat::FlatLayout),
            OutputFormat::NestedNavigation => Box::new(nested::NavigationLayout::new(root)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(format: &str) -> Result<Self, Self::Err> {
        match format {
            "markdown" | "md" => Ok(OutputFormat::Flat),
            "jekyll" | "nested" => Ok(OutputFormat::NestedNavigation),
            _ => Err(Error::UnknownFormat(format.to_string())),
        }
    }
}

/// Display label of a category or navigation segment.
pub fn category_label(name: &str) -> String {
    CATEGORY_LABELS
        .iter()
        .find(|(raw, _)| *raw == name)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| title_case(name))
}

/// Uppercase the first letter of every word, lowercase the rest.
/// Any non-letter starts a new word: "sub_menu" → "Sub_Menu".
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_formats() {
        assert_eq!("markdown".parse::<OutputFormat>().unwrap(), OutputFormat::Flat);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Flat);
        assert_eq!(
            "jekyll".parse::<OutputFormat>().unwrap(),
            OutputFormat::NestedNavigation
        );
    }

    #[test]
    fn unknown_format() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("unknown format: xml"));
    }

    #[test]
    fn index_eligibility_per_format() {
        let root = RootClass::default();
        let flat = OutputFormat::Flat.layout(&root);
        assert!(flat.has_index_document());
        assert!(!flat.has_navigation_groups());

        let nested = OutputFormat::NestedNavigation.layout(&root);
        assert!(!nested.has_index_document());
        assert!(nested.has_navigation_groups());
    }

    #[test]
    fn labels() {
        assert_eq!(category_label("gui"), "GUI");
        assert_eq!(category_label("systems"), "Systems");
        assert_eq!(category_label("sub_menu"), "Sub_Menu");
        assert_eq!(category_label("dialogue system"), "Dialogue System");
        assert_eq!(category_label(""), "");
    }
}
