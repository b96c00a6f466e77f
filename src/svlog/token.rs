// Copyright (c) 2016-2021 Fabian Schuiki

//! Defines the tokens that result from performing lexical analysis on a
//! SystemVerilog source file. Only the handful of categories needed to spot
//! module definitions and instantiations are distinguished.

use std::fmt;

pub use self::TokenKind::*;

/// The keyword that opens a module definition.
pub const MODULE: &str = "module";
/// The keyword that closes a module definition.
pub const ENDMODULE: &str = "endmodule";
/// The parameter-override opener, as in `fifo #(.DEPTH(4)) i_fifo (...)`.
pub const PARAM_OPEN: &str = "#(";

/// The reserved words recognized by the lexer, in the order they are tried.
pub const KEYWORDS: &[&str] = &[
    "module",
    "endmodule",
    "input",
    "output",
    "logic",
    "assign",
    "always_ff",
    "always_comb",
    "if",
    "else",
    "case",
    "endcase",
    "for",
    "int",
    "posedge",
    "or",
    "default",
    "begin",
    "end",
    "generate",
    "genvar",
];

/// The category of a token.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TokenKind {
    /// A reserved word, e.g. `module`.
    Keyword,
    /// The `#(` that introduces a parameter override list.
    ParamOpen,
    /// An identifier, e.g. `i_fifo` or `n$657`.
    Ident,
    /// A sized or plain integer literal, e.g. `8'hff` or `42`.
    Number,
    /// An operator or punctuation.
    Symbol,
}

/// A token emitted by the lexer.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// The 1-based line in the source file the token was found on.
    pub line: usize,
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, text: S, line: usize) -> Token {
        Token {
            kind,
            text: text.into(),
            line,
        }
    }

    /// Check whether the token's text equals `text`.
    pub fn is(&self, text: &str) -> bool {
        self.text == text
    }

    /// Check whether the token is a plain identifier: a letter or underscore
    /// followed by word characters. Keywords qualify, identifiers that contain
    /// a `$` do not.
    pub fn is_plain_ident(&self) -> bool {
        let mut chars = self.text.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => chars.all(is_word_char),
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.text, f)
    }
}

/// Check whether a character counts towards a word for the purpose of word
/// boundaries.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// The zero of every run of ten decimal digits (general category Nd) outside
/// ASCII and the mathematical alphanumerics.
const DECIMAL_ZEROS: &[u32] = &[
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6,
    0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0,
    0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0,
    0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0, 0x112F0,
    0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0,
    0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Check whether a character is a decimal digit in any script, such as `7`,
/// `٣` or `９`. Other numeric characters like `²` or `Ⅻ` do not count.
pub fn is_decimal_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    let cp = c as u32;
    (0x1D7CE..=0x1D7FF).contains(&cp)
        || DECIMAL_ZEROS
            .iter()
            .any(|&zero| cp >= zero && cp < zero + 10)
}
