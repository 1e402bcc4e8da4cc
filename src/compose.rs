//! Document composition: indexed classes into ordered page lines.
//!
//! Every function here is pure over the index; the only side channel is the
//! [`WarningSink`] that reference resolution reports to.

use crate::config::{Config, RootClass};
use crate::error::Result;
use crate::index::{Ancestor, ClassIndex};
use crate::model::{GdClass, ProjectInfo, Symbol};
use crate::render::markdown::{
    bold, code_block, front_matter, heading, link, section, small, table_header, table_row,
    wrap_in_newlines,
};
use crate::render::nested::{section_segments, SECTION_NAV_ORDER};
use crate::render::{category_label, Layout};
use crate::resolve::resolve;
use crate::toc::render_toc;
use crate::warning::WarningSink;
use std::collections::BTreeSet;

/// File stem of the flat index page.
pub const INDEX_DOCUMENT: &str = "index";

/// Extension of every written page.
pub const EXTENSION: &str = "md";

/// A named page: ordered text lines plus a file stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub lines: Vec<String>,
}

impl Document {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    /// Lines joined with newlines, ending in one.
    pub fn text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, EXTENSION)
    }
}

/// Compose every page of a run.
///
/// Order: the index page (flat format), one page per class in input order,
/// then navigation section pages (nested format). The index pages are only
/// produced when `config.make_index` is set. Fails without output when class
/// names collide.
pub fn generate(
    classes: Vec<GdClass>,
    project: &ProjectInfo,
    config: &Config,
    sink: &mut dyn WarningSink,
) -> Result<Vec<Document>> {
    let index = ClassIndex::build(config.root.apply(classes))?;
    let layout = config.format.layout(&config.root);

    let mut documents = Vec::with_capacity(index.len() + 1);
    if config.make_index && layout.has_index_document() {
        documents.push(compose_index_document(&index, project, &config.skip));
    }
    for class in index.classes() {
        documents.push(compose_class_document(&index, class, &*layout, sink));
    }
    if config.make_index && layout.has_navigation_groups() {
        documents.extend(compose_navigation_group_documents(
            index.classes(),
            &config.root,
        ));
    }
    Ok(documents)
}

/// Page of a single class.
pub fn compose_class_document(
    index: &ClassIndex,
    class: &GdClass,
    layout: &dyn Layout,
    sink: &mut dyn WarningSink,
) -> Document {
    let mut lines = layout.preamble(class);

    if class.extends.is_some() {
        lines.push(extends_line(index, class));
        lines.push(String::new());
    }

    let description = resolve(index, &class.name, &class.description, sink);
    lines.extend(section("Description", 2, vec![description]));

    if let Some(table) = summary_table(&class.properties) {
        lines.extend(section("Properties", 2, table));
    }
    if let Some(table) = summary_table(&class.functions) {
        lines.extend(section("Functions", 2, table));
    }

    if !class.signals.is_empty() {
        let signals = class
            .signals
            .iter()
            .map(|s| {
                let description = resolve(index, &class.name, &s.description, sink);
                format!("- {}: {}", s.signature, description)
            })
            .collect();
        lines.extend(section("Signals", 2, signals));
    }

    if !class.enums.is_empty() {
        let details = write_details(index, class, &class.enums, sink);
        lines.extend(section("Enumerations", 2, details));
    }
    if !class.properties.is_empty() {
        let details = write_details(index, class, &class.properties, sink);
        lines.extend(section("Property Descriptions", 2, details));
    }
    if !class.functions.is_empty() {
        let details = write_details(index, class, &class.functions, sink);
        lines.extend(section("Method Descriptions", 2, details));
    }

    Document::new(class.name.clone(), lines)
}

/// `**Extends:** A < B < C`, linking the ancestors the index knows.
fn extends_line(index: &ClassIndex, class: &GdClass) -> String {
    let chain: Vec<String> = index
        .inheritance_chain(class)
        .into_iter()
        .map(|ancestor| match ancestor {
            Ancestor::Known(name) => link(name, name),
            Ancestor::Unknown(name) => name.to_string(),
        })
        .collect();
    format!("{} {}", bold("Extends:"), chain.join(" < "))
}

/// `| Type | Name |` table, `None` for an empty list.
fn summary_table<S: Symbol>(symbols: &[S]) -> Option<Vec<String>> {
    if symbols.is_empty() {
        return None;
    }
    let mut table = table_header(&["Type", "Name"]);
    table.extend(symbols.iter().map(|s| table_row(&s.summary())));
    Some(table)
}

/// Heading, signature block, attributes and description of each member,
/// separated by blank lines.
fn write_details<S: Symbol>(
    index: &ClassIndex,
    class: &GdClass,
    symbols: &[S],
    sink: &mut dyn WarningSink,
) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, symbol) in symbols.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(heading(&symbol.heading(), 3));
        lines.push(code_block(symbol.signature()));

        let attributes = symbol.unique_attributes();
        if attributes.is_empty() {
            lines.push(String::new());
        } else {
            lines.extend(wrap_in_newlines(attributes));
        }

        lines.push(resolve(index, &class.name, symbol.description(), sink));
    }
    lines
}

/// Flat-format landing page: project title and the category table of contents.
pub fn compose_index_document(
    index: &ClassIndex,
    project: &ProjectInfo,
    excluded: &BTreeSet<String>,
) -> Document {
    let title = format!("{} ({})", project.name, small(&project.version));
    let mut lines = section(&title, 1, vec![project.description.clone()]);
    let toc = render_toc(&index.grouped_by_category(), excluded);
    lines.extend(section("Contents", 2, toc));
    Document::new(INDEX_DOCUMENT, lines)
}

/// Front-matter-only section pages for the intermediate navigation segments.
///
/// Every class counts, skipped ones included: their pages still name a
/// `parent:` section.
pub fn compose_navigation_group_documents(
    classes: &[GdClass],
    root: &RootClass,
) -> Vec<Document> {
    section_segments(classes, root)
        .into_iter()
        .map(|segment| {
            let lines = front_matter(&[
                format!("title: {}", category_label(&segment)),
                format!("permalink: /{}", segment),
                format!("nav_order: {}", SECTION_NAV_ORDER),
                "has_children: true".to_string(),
                "has_toc: true".to_string(),
            ]);
            Document::new(segment, lines)
        })
        .collect()
}
