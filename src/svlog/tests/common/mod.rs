// Copyright (c) 2016-2021 Fabian Schuiki
#![allow(dead_code)]

//! Utilities for hierarchy tests.

pub use svgraph_svlog::errors::*;
pub use svgraph_svlog::source::Source;
pub use svgraph_svlog::*;

use std::cell::RefCell;

/// Extract the hierarchy of `input`, discarding any diagnostics.
pub fn extract(input: &str) -> Hierarchy {
    extract_with_diags(input).0
}

/// Extract the hierarchy of `input` and return the diagnostics emitted along
/// the way.
pub fn extract_with_diags(input: &str) -> (Hierarchy, Vec<DiagBuilder>) {
    use std::cell::Cell;
    thread_local!(static INDEX: Cell<usize> = Cell::new(0));
    let idx = INDEX.with(|i| {
        let v = i.get();
        i.set(v + 1);
        v
    });
    let source = Source::new(format!("test_{}.sv", idx), input);
    let diags = RefCell::new(Vec::new());
    let hierarchy = extract_hierarchy(&source, &diags);
    (hierarchy, diags.into_inner())
}

/// The children of `name`, which must have an entry.
pub fn children<'a>(hierarchy: &'a Hierarchy, name: &str) -> Vec<&'a str> {
    hierarchy
        .children(name)
        .unwrap_or_else(|| panic!("module `{}` should have an entry", name))
        .iter()
        .map(|c| c.as_str())
        .collect()
}
