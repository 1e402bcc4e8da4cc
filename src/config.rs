//! Generation settings handed to the core by the CLI.

use crate::model::GdClass;
use crate::render::OutputFormat;
use std::collections::BTreeSet;

/// Script name of the project's entry class.
pub const ROOT_CLASS_SENTINEL: &str = "Main";

/// Product name the entry class is published under.
pub const ROOT_DISPLAY_NAME: &str = "Rakugo";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub format: OutputFormat,
    /// Emit the index page (flat) or navigation section pages (nested)
    pub make_index: bool,
    /// Class names left out of the index
    pub skip: BTreeSet<String>,
    pub root: RootClass,
}

/// The entry class, documented under the product name and pinned to the top
/// of the navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootClass {
    pub sentinel: String,
    pub display_name: String,
}

impl Default for RootClass {
    fn default() -> Self {
        Self {
            sentinel: ROOT_CLASS_SENTINEL.to_string(),
            display_name: ROOT_DISPLAY_NAME.to_string(),
        }
    }
}

impl RootClass {
    /// Rename the sentinel class to the display name. Runs once, before the
    /// class index is built, so references and file names agree.
    pub fn apply(&self, classes: Vec<GdClass>) -> Vec<GdClass> {
        classes
            .into_iter()
            .map(|mut class| {
                if class.name == self.sentinel {
                    class.name = self.display_name.clone();
                }
                class
            })
            .collect()
    }

    pub fn is_root(&self, class: &GdClass) -> bool {
        class.name == self.display_name
    }

    pub fn permalink(&self) -> String {
        format!("/{}", self.display_name.to_lowercase())
    }

    /// Navigation segment of the entry script, never turned into a section.
    pub fn segment(&self) -> String {
        self.sentinel.to_lowercase()
    }
}
