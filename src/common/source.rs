// Copyright (c) 2016-2021 Fabian Schuiki

//! Source files and locations within them.
//!
//! A `Source` is a cheap handle to the path and full text of an input file.
//! Handles are owned by whoever scans the file; there is no global table of
//! open files.

use std::fmt;
use std::path::Path;
use std::rc::Rc;

/// The contents of a source file, together with the path it was loaded from.
#[derive(Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
}

/// A reference-counted handle to a source file.
#[derive(Clone, PartialEq, Eq)]
pub struct Source(Rc<SourceFile>);

impl Source {
    /// Create a source from text that is already in memory.
    pub fn new<P: Into<String>, C: Into<String>>(path: P, content: C) -> Source {
        Source(Rc::new(SourceFile {
            path: path.into(),
            content: content.into(),
        }))
    }

    /// Load a source file from disk.
    ///
    /// The file must be valid UTF-8. Errors are passed on as they are, such
    /// that the caller can distinguish a missing file from other failures.
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Source> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        debug!("loaded `{}` ({} bytes)", path.display(), content.len());
        Ok(Source::new(path.display().to_string(), content))
    }

    /// Return the path of this source file.
    pub fn get_path(&self) -> &str {
        &self.0.path
    }

    /// Access the contents of this source file.
    pub fn get_content(&self) -> &str {
        &self.0.content
    }

    /// Obtain the text of the 1-based line `line`, without the line break.
    pub fn line(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        self.0
            .content
            .split('\n')
            .nth(line - 1)
            .map(|l| l.trim_end_matches('\r'))
    }

    /// Obtain a location pointing at a line of this file.
    pub fn location(&self, line: usize) -> Location {
        Location {
            source: self.clone(),
            line,
        }
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Source(\"{}\")", self.get_path())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self.get_path(), f)
    }
}

/// A line within a source file. Lines are counted from 1.
#[derive(Clone, PartialEq, Eq)]
pub struct Location {
    pub source: Source,
    pub line: usize,
}

impl Location {
    /// Obtain the text of the line this location points at.
    pub fn text(&self) -> Option<&str> {
        self.source.line(self.line)
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}:{}", self.source, self.line)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.line)
    }
}
