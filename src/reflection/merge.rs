//! Combine several reflection dumps into one run.
//!
//! A project may be dumped in parts (e.g. one file per addon). Classes are
//! concatenated in input order; project metadata comes from the first dump
//! that provides each field. Duplicate class names are left for the class
//! index to reject.

use super::Reflection;
use crate::model::ProjectInfo;

pub fn merge(dumps: Vec<Reflection>) -> Reflection {
    let mut merged = Reflection::default();

    for dump in dumps {
        fill_project(&mut merged.project, dump.project);
        merged.classes.extend(dump.classes);
    }

    merged
}

/// Fill empty fields of `target` from `source`.
fn fill_project(target: &mut ProjectInfo, source: ProjectInfo) {
    if target.name.is_empty() {
        target.name = source.name;
    }
    if target.version.is_empty() {
        target.version = source.version;
    }
    if target.description.is_empty() {
        target.description = source.description;
    }
}
