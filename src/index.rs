//! Read-only class registry every page is composed from.

use crate::error::DuplicateClassError;
use crate::model::GdClass;
use std::collections::{BTreeSet, HashMap, HashSet};

/// All classes of a run, with name and member lookups.
#[derive(Debug, Default)]
pub struct ClassIndex {
    /// Input order, used for page order and category grouping
    classes: Vec<GdClass>,
    by_name: HashMap<String, usize>,
    members: HashMap<String, BTreeSet<String>>,
}

/// One entry of an inheritance chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ancestor<'a> {
    /// Documented class, rendered as a link
    Known(&'a str),
    /// Name missing from the index, rendered as plain text
    Unknown(&'a str),
}

impl ClassIndex {
    pub fn build(classes: Vec<GdClass>) -> Result<Self, DuplicateClassError> {
        let mut by_name = HashMap::with_capacity(classes.len());
        let mut members = HashMap::with_capacity(classes.len());
        for (i, class) in classes.iter().enumerate() {
            if by_name.insert(class.name.clone(), i).is_some() {
                return Err(DuplicateClassError {
                    name: class.name.clone(),
                });
            }
            members.insert(class.name.clone(), class.member_names());
        }
        Ok(Self {
            classes,
            by_name,
            members,
        })
    }

    pub fn lookup(&self, name: &str) -> Option<&GdClass> {
        self.by_name.get(name).map(|&i| &self.classes[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Member names of a class; `None` when the class is not indexed.
    pub fn members_of(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.members.get(name)
    }

    /// Classes in input order.
    pub fn classes(&self) -> &[GdClass] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Classes grouped by category: groups in first-seen order, classes in
    /// input order within each group.
    pub fn grouped_by_category(&self) -> Vec<(&str, Vec<&GdClass>)> {
        let mut groups: Vec<(&str, Vec<&GdClass>)> = Vec::new();
        for class in &self.classes {
            match groups.iter().position(|(c, _)| *c == class.category) {
                Some(i) => groups[i].1.push(class),
                None => groups.push((class.category.as_str(), vec![class])),
            }
        }
        groups
    }

    /// The class itself followed by its ancestors.
    ///
    /// Walks `extends` through the index and stops after a class without
    /// parent, at a name the index does not know, or when a name repeats.
    pub fn inheritance_chain<'a>(&'a self, class: &'a GdClass) -> Vec<Ancestor<'a>> {
        let mut chain = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut current: Option<&str> = Some(class.name.as_str());

        while let Some(name) = current {
            if !seen.insert(name) {
                break;
            }
            match self.lookup(name) {
                Some(found) => {
                    chain.push(Ancestor::Known(name));
                    current = found.extends.as_deref();
                }
                None if name == class.name => {
                    // Composing a class that was never indexed
                    chain.push(Ancestor::Unknown(name));
                    current = class.extends.as_deref();
                }
                None => {
                    chain.push(Ancestor::Unknown(name));
                    current = None;
                }
            }
        }
        chain
    }
}
