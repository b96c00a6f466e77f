// Copyright (c) 2016-2021 Fabian Schuiki

//! This crate contains the fundamental utilities used by the rest of the
//! svgraph crates: diagnostics and source file handling.

#[macro_use]
extern crate log;

pub mod errors;
pub mod source;

use crate::errors::{DiagBuilder, DiagEmitter, Severity};
use std::cell::Cell;

/// The state of a single invocation of the tool.
///
/// Diagnostics emitted through the session are printed to stderr. The session
/// remembers whether anything of error severity or worse went by, such that
/// the caller can decide whether to continue.
#[derive(Debug, Default)]
pub struct Session {
    failed: Cell<bool>,
}

impl Session {
    /// Create a new session.
    pub fn new() -> Session {
        Session::default()
    }

    /// Check whether an error has been emitted.
    pub fn failed(&self) -> bool {
        self.failed.get()
    }
}

impl DiagEmitter for Session {
    fn emit(&self, diag: DiagBuilder) {
        if diag.get_severity() >= Severity::Error {
            self.failed.set(true);
        }
        trace!("emitting {:?}", diag);
        eprintln!("{}", diag);
    }
}
