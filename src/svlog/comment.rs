// Copyright (c) 2016-2021 Fabian Schuiki

//! Removal of comments from SystemVerilog source text.
//!
//! Block comments `/* ... */` are removed first, then line comments `// ...`.
//! The line breaks inside a block comment survive, so line numbers in the
//! stripped text match the original. String literals are not recognized: a
//! `//` inside a string starts a comment just like anywhere else.

/// Remove all block and line comments from `text`.
pub fn strip_comments(text: &str) -> String {
    strip_line_comments(&strip_block_comments(text))
}

/// Remove `/* ... */` comments, keeping any line breaks they contain. An
/// unterminated comment is left untouched.
fn strip_block_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("/*") {
        let len = match rest[start + 2..].find("*/") {
            Some(len) => len,
            None => break,
        };
        let end = start + 2 + len + 2;
        out.push_str(&rest[..start]);
        out.extend(rest[start..end].chars().filter(|&c| c == '\n'));
        rest = &rest[end..];
    }
    out.push_str(rest);
    out
}

/// Remove `//` comments up to the end of the line.
fn strip_line_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("//") {
        out.push_str(&rest[..start]);
        rest = match rest[start..].find('\n') {
            Some(nl) => &rest[start + nl..],
            None => "",
        };
    }
    out.push_str(rest);
    out
}
