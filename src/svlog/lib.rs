// Copyright (c) 2016-2021 Fabian Schuiki

//! This crate extracts the module hierarchy from SystemVerilog source files.
//!
//! No full parser is involved. Comments are stripped, the text is split into
//! coarse tokens, and two linear passes over the tokens find module
//! definitions and the instantiations inside them. This is fast and works on
//! code that a real front end would reject, at the price of occasionally
//! misreading unusual constructs.

#[macro_use]
extern crate log;

pub mod comment;
pub mod hierarchy;
pub mod lexer;
pub mod token;

pub use crate::hierarchy::{Definitions, Hierarchy};
pub use svgraph_common::*;

use crate::comment::strip_comments;
use crate::hierarchy::{assemble, collect_definitions, scan_instantiations, ScanContext};
use crate::lexer::tokenize;
use std::path::Path;
use svgraph_common::errors::{DiagBuilder, DiagEmitter};
use svgraph_common::source::Source;

/// Extract the module hierarchy from a source file.
///
/// Never fails. Anything the lexer does not understand is skipped, and
/// suspicious structure is reported to `emitter` as warnings.
pub fn extract_hierarchy(source: &Source, emitter: &dyn DiagEmitter) -> Hierarchy {
    let cx = ScanContext { source, emitter };
    let text = source.get_content().replace('\u{a0}', " ");
    let text = strip_comments(&text);
    let tokens = tokenize(&text);

    let mut hierarchy = Hierarchy::new();
    let defs = collect_definitions(&cx, &tokens, &mut hierarchy);
    scan_instantiations(&cx, &tokens, &defs, &mut hierarchy);
    let hierarchy = assemble(&defs, hierarchy);

    info!(
        "found {} modules and {} instantiations in `{}`",
        hierarchy.len(),
        hierarchy.edge_count(),
        source
    );
    hierarchy
}

/// Load the file at `path` and extract its module hierarchy.
///
/// If the file cannot be read, an error is emitted and an empty hierarchy is
/// returned.
pub fn scan_file<P: AsRef<Path>>(path: P, emitter: &dyn DiagEmitter) -> Hierarchy {
    let path = path.as_ref();
    match Source::open(path) {
        Ok(source) => extract_hierarchy(&source, emitter),
        Err(err) => {
            let diag = if err.kind() == std::io::ErrorKind::NotFound {
                DiagBuilder::error(format!("input file `{}` not found", path.display()))
            } else {
                DiagBuilder::error(format!("unable to read `{}`: {}", path.display(), err))
            };
            emitter.emit(diag);
            Hierarchy::new()
        }
    }
}
