// Copyright (c) 2016-2021 Fabian Schuiki

//! Extraction of the module hierarchy from a token stream.
//!
//! This is done in two passes over the tokens. The first pass collects the
//! names of all defined modules. The second pass tracks which module it is in
//! and looks for one of the defined names followed by either an instance name
//! and an opening parenthesis, or by a parameter override `#(`. Anything in
//! between is skipped over, so module bodies may contain arbitrary code.
//!
//! The resulting graph is directed but not necessarily a tree: a module may be
//! instantiated from many parents, and cycles are not rejected.

use crate::token::*;
use std::collections::{BTreeMap, BTreeSet};
use svgraph_common::errors::*;
use svgraph_common::source::Source;

/// The set of module names defined in a source file.
pub type Definitions = BTreeSet<String>;

/// A mapping from each module to the module types it instantiates.
///
/// Every defined module has an entry, possibly with no children. Children are
/// kept in the order they were first found, and each appears at most once. A
/// module never appears among its own children. Children that are not defined
/// in the scanned source show up as children only.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Hierarchy {
    modules: BTreeMap<String, Vec<String>>,
}

impl Hierarchy {
    /// Create an empty hierarchy.
    pub fn new() -> Hierarchy {
        Hierarchy::default()
    }

    /// Make sure `name` has an entry. Returns `true` if it was added.
    pub fn define(&mut self, name: &str) -> bool {
        if self.modules.contains_key(name) {
            return false;
        }
        self.modules.insert(name.to_string(), Vec::new());
        true
    }

    /// Record that `parent` instantiates `child`. Self instantiations and
    /// repeated instantiations are ignored. Returns `true` if a new edge was
    /// added.
    pub fn add_child(&mut self, parent: &str, child: &str) -> bool {
        if parent == child {
            return false;
        }
        let children = self.modules.entry(parent.to_string()).or_default();
        if children.iter().any(|c| c == child) {
            return false;
        }
        children.push(child.to_string());
        true
    }

    /// Check whether `name` is a module with an entry.
    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// The module types instantiated by `name`, if it has an entry.
    pub fn children(&self, name: &str) -> Option<&[String]> {
        self.modules.get(name).map(|c| c.as_slice())
    }

    /// Iterate over all modules with an entry and their children, sorted by
    /// module name.
    pub fn modules(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.modules
            .iter()
            .map(|(name, children)| (name.as_str(), children.as_slice()))
    }

    /// All names in the graph, defined or merely instantiated.
    pub fn nodes(&self) -> BTreeSet<&str> {
        self.modules()
            .flat_map(|(name, children)| {
                std::iter::once(name).chain(children.iter().map(|c| c.as_str()))
            })
            .collect()
    }

    /// Iterate over every `(parent, child)` pair.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.modules()
            .flat_map(|(name, children)| children.iter().map(move |c| (name, c.as_str())))
    }

    /// The number of modules with an entry.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check whether no modules were found.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// The number of `(parent, child)` pairs.
    pub fn edge_count(&self) -> usize {
        self.modules.values().map(|c| c.len()).sum()
    }
}

/// Where diagnostics found while scanning are reported.
pub struct ScanContext<'a> {
    pub source: &'a Source,
    pub emitter: &'a dyn DiagEmitter,
}

/// The first pass. Records the token after every `module` keyword as a
/// defined module and gives it an entry in `hierarchy`.
///
/// The name token is skipped, but module bodies are not. A `module` that
/// shows up in an unexpected place therefore still defines a name.
pub fn collect_definitions(
    cx: &ScanContext,
    tokens: &[Token],
    hierarchy: &mut Hierarchy,
) -> Definitions {
    let mut defs = Definitions::new();
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].is(MODULE) {
            if let Some(name) = tokens.get(i + 1) {
                if !defs.insert(name.text.clone()) {
                    cx.emitter.emit(
                        DiagBuilder::warning(format!(
                            "module `{}` is defined more than once",
                            name
                        ))
                        .location(cx.source.location(name.line))
                        .add_note("all definitions are merged into one node of the hierarchy"),
                    );
                }
                hierarchy.define(&name.text);
                i += 1;
            }
        }
        i += 1;
    }
    debug!("defined modules: {:?}", defs);
    defs
}

/// The state of the second pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ScanState<'a> {
    Outside,
    InsideModule(&'a Token),
}

/// The second pass. Finds instantiations of defined modules inside module
/// bodies and records them in `hierarchy`.
///
/// Advances one token at a time, whether or not an instantiation matched. A
/// `module` that appears before the current module is closed switches over to
/// the new module without closing the old one; a warning is emitted when this
/// happens.
pub fn scan_instantiations(
    cx: &ScanContext,
    tokens: &[Token],
    defs: &Definitions,
    hierarchy: &mut Hierarchy,
) {
    let mut state = ScanState::Outside;
    for (i, token) in tokens.iter().enumerate() {
        if token.is(ENDMODULE) {
            state = ScanState::Outside;
            continue;
        }
        if token.is(MODULE) {
            if let Some(name) = tokens.get(i + 1).filter(|t| t.kind == Ident) {
                if let ScanState::InsideModule(current) = state {
                    cx.emitter.emit(
                        DiagBuilder::warning(format!(
                            "module `{}` starts before module `{}` is closed",
                            name, current
                        ))
                        .location(cx.source.location(name.line))
                        .add_note(format!(
                            "`{}` (line {}) is missing its `endmodule`",
                            current, current.line
                        ))
                        .add_note(format!(
                            "instantiations from here on are attributed to `{}`",
                            name
                        )),
                    );
                }
                state = ScanState::InsideModule(name);
                continue;
            }
        }
        let current = match state {
            ScanState::InsideModule(current) => current,
            ScanState::Outside => continue,
        };
        if let Some(child) = match_instantiation(tokens, i, defs) {
            if hierarchy.add_child(&current.text, child) {
                trace!(
                    "`{}` instantiates `{}` (line {})",
                    current,
                    child,
                    token.line
                );
            }
        }
    }
}

/// Check whether the tokens at `i` look like an instantiation of a defined
/// module, either `type name (` or `type #(`. Returns the module type.
fn match_instantiation<'a>(tokens: &'a [Token], i: usize, defs: &Definitions) -> Option<&'a str> {
    let ty = &tokens[i];
    if !defs.contains(&ty.text) {
        return None;
    }
    let next = tokens.get(i + 1)?;
    let unparameterized = next.is_plain_ident() && tokens.get(i + 2).map_or(false, |t| t.is("("));
    let parameterized = next.is(PARAM_OPEN);
    if unparameterized || parameterized {
        Some(ty.text.as_str())
    } else {
        None
    }
}

/// Give every defined module an entry, even those without children, and hand
/// out the finished hierarchy.
pub fn assemble(defs: &Definitions, mut hierarchy: Hierarchy) -> Hierarchy {
    for name in defs {
        hierarchy.define(name);
    }
    hierarchy
}
