// Copyright (c) 2016-2021 Fabian Schuiki

//! Utilities to implement diagnostics and error reporting facilities.

use crate::source::Location;
use std::cell::RefCell;
use std::fmt;

/// Emits diagnostic messages.
pub trait DiagEmitter {
    /// Emit a diagnostic message.
    fn emit(&self, diag: DiagBuilder);
}

impl<'a, T> DiagEmitter for &'a T
where
    T: DiagEmitter + ?Sized,
{
    fn emit(&self, diag: DiagBuilder) {
        (*self).emit(diag)
    }
}

/// Collects diagnostics instead of printing them.
impl DiagEmitter for RefCell<Vec<DiagBuilder>> {
    fn emit(&self, diag: DiagBuilder) {
        self.borrow_mut().push(diag);
    }
}

/// Used to emit structured error messages.
#[must_use]
#[derive(Clone, Debug)]
pub struct DiagBuilder {
    pub severity: Severity,
    pub message: String,
    pub segments: Vec<DiagSegment>,
}

#[derive(Clone, Debug)]
pub enum DiagSegment {
    Location(Location),
    Note(String),
}

/// A diagnostic result type. Either carries the result `T` in the Ok variant,
/// or an assembled diagnostic in the Err variant.
pub type DiagResult<T> = Result<T, DiagBuilder>;

impl DiagBuilder {
    pub fn new<S: Into<String>>(severity: Severity, message: S) -> DiagBuilder {
        DiagBuilder {
            severity,
            message: message.into(),
            segments: Vec::new(),
        }
    }

    pub fn error<S: Into<String>>(message: S) -> DiagBuilder {
        DiagBuilder::new(Severity::Error, message)
    }

    pub fn warning<S: Into<String>>(message: S) -> DiagBuilder {
        DiagBuilder::new(Severity::Warning, message)
    }

    pub fn note<S: Into<String>>(message: S) -> DiagBuilder {
        DiagBuilder::new(Severity::Note, message)
    }

    pub fn segment(mut self, segment: DiagSegment) -> DiagBuilder {
        self.segments.push(segment);
        self
    }

    pub fn location(self, location: Location) -> DiagBuilder {
        self.segment(DiagSegment::Location(location))
    }

    pub fn add_note<S: Into<String>>(self, message: S) -> DiagBuilder {
        self.segment(DiagSegment::Note(message.into()))
    }

    pub fn get_severity(&self) -> Severity {
        self.severity
    }

    pub fn get_message(&self) -> &String {
        &self.message
    }

    pub fn get_segments(&self) -> &[DiagSegment] {
        &self.segments
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Severity {
    Note,
    Warning,
    Error,
}

impl Severity {
    pub fn to_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl fmt::Display for DiagBuilder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let colorcode = match self.get_severity() {
            Severity::Error => "\x1B[31;1m",
            Severity::Warning => "\x1B[33;1m",
            Severity::Note => "\x1B[36;1m",
        };
        writeln!(
            f,
            "{}{}:\x1B[m\x1B[1m {}\x1B[m",
            colorcode,
            self.get_severity(),
            self.get_message()
        )?;

        for segment in &self.segments {
            match *segment {
                DiagSegment::Location(ref loc) => {
                    writeln!(f, "  --> {}", loc)?;
                    if let Some(text) = loc.text() {
                        writeln!(f, "   | ")?;
                        write!(f, "   | ")?;
                        for c in text.chars() {
                            match c {
                                '\t' => write!(f, "    ")?,
                                c => write!(f, "{}", c)?,
                            }
                        }
                        writeln!(f)?;
                    }
                }
                DiagSegment::Note(ref message) => {
                    writeln!(f, "   = \x1B[1mnote:\x1B[m {}", message)?
                }
            }
        }

        Ok(())
    }
}
