// Copyright (c) 2016-2021 Fabian Schuiki

//! A lexical analyzer that approximates SystemVerilog tokens closely enough to
//! find module definitions and instantiations.
//!
//! Input is processed one line at a time. At every position the token classes
//! are tried in a fixed order (keyword, `#(`, identifier, number, symbol) and
//! the first one that matches wins, even if a later class would have matched
//! more characters. Characters that start no token are dropped. The lexer
//! never fails.

use crate::comment::strip_comments;
pub use crate::token::*;

/// Punctuation and operators that consist of a single character.
const SINGLE_SYMBOLS: &str = "{}()[].,;:=*/+-";

/// Multi-character operators, tried in order after `SINGLE_SYMBOLS`. Note that
/// `==` never matches since `=` is tried first.
const MULTI_SYMBOLS: &[&str] = &["<=", "==", "!=", "<", ">", "&&", "||", "~&", "~|"];

/// A lexical analyzer for a single line of comment-free text.
pub struct Lexer<'a> {
    line: &'a str,
    lineno: usize,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the text of line `lineno`.
    pub fn new(line: &'a str, lineno: usize) -> Lexer<'a> {
        Lexer {
            line,
            lineno,
            pos: 0,
        }
    }

    /// Try all token classes at the current position, in order.
    fn match_token(&self) -> Option<(TokenKind, usize)> {
        let rest = &self.line[self.pos..];
        let prev = self.line[..self.pos].chars().next_back();
        match_keyword(prev, rest)
            .map(|len| (Keyword, len))
            .or_else(|| match_param_open(rest).map(|len| (ParamOpen, len)))
            .or_else(|| match_ident(rest).map(|len| (Ident, len)))
            .or_else(|| match_number(rest).map(|len| (Number, len)))
            .or_else(|| match_symbol(rest).map(|len| (Symbol, len)))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.pos < self.line.len() {
            if let Some((kind, len)) = self.match_token() {
                let text = &self.line[self.pos..self.pos + len];
                self.pos += len;
                return Some(Token::new(kind, text, self.lineno));
            }
            let skip = self.line[self.pos..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            self.pos += skip;
        }
        None
    }
}

/// Split comment-free `text` into tokens.
///
/// Each line is stripped of comments once more and trimmed; lines that end up
/// empty produce no tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for (index, line) in text.split('\n').enumerate() {
        let cleaned = strip_comments(line);
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            continue;
        }
        tokens.extend(Lexer::new(cleaned, index + 1));
    }
    debug!("lexed {} tokens", tokens.len());
    tokens
}

/// Match a keyword that stands on word boundaries on both sides.
fn match_keyword(prev: Option<char>, rest: &str) -> Option<usize> {
    if prev.map_or(false, is_word_char) {
        return None;
    }
    KEYWORDS
        .iter()
        .find(|kw| rest.starts_with(**kw) && !rest[kw.len()..].starts_with(is_word_char))
        .map(|kw| kw.len())
}

fn match_param_open(rest: &str) -> Option<usize> {
    if rest.starts_with(PARAM_OPEN) {
        Some(PARAM_OPEN.len())
    } else {
        None
    }
}

/// Match `[a-zA-Z_][a-zA-Z0-9_$]*`.
fn match_ident(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() || c == '_' => (),
        _ => return None,
    }
    let len = chars
        .find(|&(_, c)| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
        .map_or(rest.len(), |(i, _)| i);
    Some(len)
}

/// Match a sized literal such as `8'hff` or `4b1010`, or failing that a plain
/// decimal number. The leading digits may come from any script; the radix and
/// the value are ASCII.
fn match_number(rest: &str) -> Option<usize> {
    let digits: usize = rest
        .chars()
        .take_while(|&c| is_decimal_digit(c))
        .map(char::len_utf8)
        .sum();
    let bytes = rest.as_bytes();
    if digits == 0 {
        return None;
    }
    let radix = if bytes.get(digits) == Some(&b'\'') {
        digits + 1
    } else {
        digits
    };
    if let Some(b) = bytes.get(radix) {
        if b"bdhBHD".contains(b) {
            let body = bytes[radix + 1..]
                .iter()
                .take_while(|&&b| b.is_ascii_hexdigit() || b == b'_')
                .count();
            if body > 0 {
                return Some(radix + 1 + body);
            }
        }
    }
    Some(digits)
}

/// Match an operator, punctuation, an apostrophe followed by one word
/// character, or a backtick followed by a word.
fn match_symbol(rest: &str) -> Option<usize> {
    let mut chars = rest.chars();
    let c0 = chars.next()?;
    if SINGLE_SYMBOLS.contains(c0) {
        return Some(1);
    }
    if let Some(sym) = MULTI_SYMBOLS.iter().find(|sym| rest.starts_with(**sym)) {
        return Some(sym.len());
    }
    match c0 {
        '\'' => chars
            .next()
            .filter(|&c| is_word_char(c))
            .map(|c| 1 + c.len_utf8()),
        '`' => {
            let len: usize = chars
                .take_while(|&c| is_word_char(c))
                .map(char::len_utf8)
                .sum();
            if len > 0 {
                Some(1 + len)
            } else {
                None
            }
        }
        _ => None,
    }
}
