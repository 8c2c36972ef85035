//! `urlmap.js` reader/writer.
//!
//! Documentation generators ship the map as a tiny script:
//!
//! ```text
//! // A map between namespaces and base URLs for their online documentation
//! baseURLs = [
//!     [ 'GLib', 'https://docs.gtk.org/glib/' ],
//!     [ 'Gio', 'https://docs.gtk.org/gio/' ],
//! ]
//! ```
//!
//! Only this assignment is understood: comments, either quote style, trailing
//! commas, an optional `var`/`let`/`const` and an optional final `;`.

use crate::entry::Entry;
use crate::error::FormatError;

const VARIABLE: &str = "baseURLs";
const HEADER: &str = "// A map between namespaces and base URLs for their online documentation";

pub(super) fn parse(text: &str) -> Result<Vec<Entry>, FormatError> {
    // Editors on some platforms save scripts with a UTF-8 byte-order mark.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut s = Scanner::new(text);

    s.skip_trivia()?;
    let mut ident = s.ident()?;
    if matches!(ident.as_str(), "var" | "let" | "const") {
        s.skip_trivia()?;
        ident = s.ident()?;
    }
    if ident != VARIABLE {
        return Err(s.error(format!("expected '{VARIABLE}', found '{ident}'")));
    }
    s.skip_trivia()?;
    s.expect('=')?;
    s.skip_trivia()?;

    let entries = s.entry_list()?;

    s.skip_trivia()?;
    if s.peek() == Some(';') {
        s.bump();
        s.skip_trivia()?;
    }
    if let Some(c) = s.peek() {
        return Err(s.error(format!("unexpected '{c}' after url map")));
    }
    Ok(entries)
}

pub(super) fn render(entries: &[Entry]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(VARIABLE);
    out.push_str(" = [\n");
    for entry in entries {
        out.push_str("    [ ");
        push_quoted(&mut out, &entry.namespace);
        out.push_str(", ");
        push_quoted(&mut out, &entry.base_url);
        out.push_str(" ],\n");
    }
    out.push_str("]\n");
    out
}

fn push_quoted(out: &mut String, value: &str) {
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
}

/// Character cursor tracking 1-based line/column for error messages.
struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.src[self.pos..].chars().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn error(&self, message: impl Into<String>) -> FormatError {
        FormatError::Syntax {
            line: self.line,
            column: self.column,
            message: message.into(),
        }
    }

    fn expect(&mut self, want: char) -> Result<(), FormatError> {
        match self.peek() {
            Some(c) if c == want => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected '{want}', found '{c}'"))),
            None => Err(self.error(format!("expected '{want}', found end of input"))),
        }
    }

    /// Skips whitespace, `// line` and `/* block */` comments.
    fn skip_trivia(&mut self) -> Result<(), FormatError> {
        loop {
            match (self.peek(), self.peek_second()) {
                (Some(c), _) if c.is_whitespace() => {
                    self.bump();
                }
                (Some('/'), Some('/')) => {
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                (Some('/'), Some('*')) => {
                    let (line, column) = (self.line, self.column);
                    self.bump();
                    self.bump();
                    loop {
                        match self.bump() {
                            Some('*') if self.peek() == Some('/') => {
                                self.bump();
                                break;
                            }
                            Some(_) => {}
                            None => {
                                return Err(FormatError::Syntax {
                                    line,
                                    column,
                                    message: "unterminated block comment".to_string(),
                                })
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn ident(&mut self) -> Result<String, FormatError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '$' {
                self.bump();
            } else {
                break;
            }
        }
        if self.pos == start {
            return match self.peek() {
                Some(c) => Err(self.error(format!("expected identifier, found '{c}'"))),
                None => Err(self.error("expected identifier, found end of input")),
            };
        }
        Ok(self.src[start..self.pos].to_string())
    }

    /// `[ entry, entry, ... ]` with an optional trailing comma.
    fn entry_list(&mut self) -> Result<Vec<Entry>, FormatError> {
        self.expect('[')?;
        let mut entries = Vec::new();
        loop {
            self.skip_trivia()?;
            if self.peek() == Some(']') {
                self.bump();
                return Ok(entries);
            }
            entries.push(self.entry()?);
            self.skip_trivia()?;
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(']') => {}
                Some(c) => return Err(self.error(format!("expected ',' or ']', found '{c}'"))),
                None => return Err(self.error("unterminated url map, expected ']'")),
            }
        }
    }

    /// `[ 'namespace', 'base_url' ]`
    fn entry(&mut self) -> Result<Entry, FormatError> {
        if self.peek() != Some('[') {
            return Err(self.error("expected '[' starting a [namespace, base_url] pair"));
        }
        self.bump();
        self.skip_trivia()?;
        let namespace = self.string()?;
        self.skip_trivia()?;
        self.expect(',')?;
        self.skip_trivia()?;
        let base_url = self.string()?;
        self.skip_trivia()?;
        if self.peek() == Some(',') {
            self.bump();
            self.skip_trivia()?;
        }
        if self.peek() != Some(']') {
            return Err(self.error("entry must have exactly two elements: [namespace, base_url]"));
        }
        self.bump();
        Ok(Entry {
            namespace,
            base_url,
        })
    }

    fn string(&mut self) -> Result<String, FormatError> {
        let quote = match self.peek() {
            Some(q @ ('\'' | '"')) => q,
            Some(c) => return Err(self.error(format!("expected string literal, found '{c}'"))),
            None => return Err(self.error("expected string literal, found end of input")),
        };
        let (line, column) = (self.line, self.column);
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                Some(c) if c == quote => return Ok(out),
                Some('\\') => {
                    let escaped = match self.bump() {
                        Some('\\') => '\\',
                        Some('\'') => '\'',
                        Some('"') => '"',
                        Some('/') => '/',
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some(c) => return Err(self.error(format!("unsupported escape '\\{c}'"))),
                        None => break,
                    };
                    out.push(escaped);
                }
                Some('\n') | None => break,
                Some(c) => out.push(c),
            }
        }
        Err(FormatError::Syntax {
            line,
            column,
            message: "unterminated string literal".to_string(),
        })
    }
}
