//! Logos-based scanner for import prologues.
//!
//! Tokenizes source text and reads the leading run of import statements
//! into [`ImportDeclaration`] views. Everything after the first top-level
//! token that does not start an import statement is ignored; malformed
//! text inside an import statement is an error.

use logos::Logos;
use text_size::{TextRange, TextSize};
use thiserror::Error;
use tracing::debug;

use crate::base::{LineIndex, LineRange};
use crate::syntax::{ImportBinding, ImportDeclaration};

/// A token with its kind, text, and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    /// One past the last byte of this token's text.
    pub fn end(&self) -> TextSize {
        self.offset + TextSize::of(self.text)
    }
}

/// Lexer wrapping the logos-generated tokenizer.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, RawToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: RawToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match raw {
            Ok(token) => token.into(),
            Err(()) => TokenKind::Error,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Token classification seen by the import reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Whitespace,
    LineComment,
    BlockComment,
    ImportKw,
    FromKw,
    AsKw,
    Star,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    StringLit,
    Ident,
    /// A character no pattern matches.
    Error,
}

impl TokenKind {
    /// Whitespace or a comment.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment
        )
    }
}

/// Logos token enum - maps to TokenKind.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    BlockComment,

    // =========================================================================
    // KEYWORDS
    // =========================================================================
    #[token("import")]
    ImportKw,

    #[token("from")]
    FromKw,

    #[token("as")]
    AsKw,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("*")]
    Star,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"'([^'\\\n]|\\.)*'")]
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    StringLit,

    #[regex(r"[\p{XID_Start}_$][\p{XID_Continue}$]*")]
    Ident,
}

impl From<RawToken> for TokenKind {
    fn from(token: RawToken) -> Self {
        match token {
            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::LineComment => TokenKind::LineComment,
            RawToken::BlockComment => TokenKind::BlockComment,
            RawToken::ImportKw => TokenKind::ImportKw,
            RawToken::FromKw => TokenKind::FromKw,
            RawToken::AsKw => TokenKind::AsKw,
            RawToken::Star => TokenKind::Star,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::StringLit => TokenKind::StringLit,
            RawToken::Ident => TokenKind::Ident,
        }
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Malformed text inside an import statement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("unexpected character at offset {offset}")]
    UnexpectedCharacter { offset: u32 },
    #[error("unexpected end of input while reading an import statement")]
    UnexpectedEof,
    #[error("expected {expected} at offset {offset}")]
    Expected {
        expected: &'static str,
        offset: u32,
    },
}

// ============================================================================
// IMPORT READER
// ============================================================================

/// Read the leading import statements of `source`, in source order.
///
/// Stops at the first top-level token that is not the `import` keyword;
/// the rest of the module is not scanned. Comment presence flags are
/// attached to braced members: a comment between a member and the
/// following `,` or `}` sets `trailing`, a comment between `{` or `,` and
/// the next member sets `leading`. Comments inside a member's own text
/// (around `as`) stay part of the member slice and set no flag.
pub fn scan_imports(source: &str) -> Result<Vec<ImportDeclaration>, ScanError> {
    let line_index = LineIndex::new(source);
    let mut reader = Reader {
        tokens: tokenize(source),
        pos: 0,
    };

    let mut declarations = Vec::new();
    loop {
        reader.skip_trivia();
        if reader.peek_kind() != Some(TokenKind::ImportKw) {
            break;
        }
        declarations.push(reader.read_import(&line_index)?);
    }

    debug!(count = declarations.len(), "scanned import prologue");
    Ok(declarations)
}

struct Reader<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|token| token.kind)
    }

    /// Skip whitespace and comments; report whether any comment was seen.
    fn skip_trivia(&mut self) -> bool {
        let mut saw_comment = false;
        while let Some(kind) = self.peek_kind() {
            match kind {
                TokenKind::Whitespace => {}
                TokenKind::LineComment | TokenKind::BlockComment => saw_comment = true,
                _ => break,
            }
            self.pos += 1;
        }
        saw_comment
    }

    fn expect(&mut self, kind: TokenKind, what: &'static str) -> Result<Token<'a>, ScanError> {
        match self.tokens.get(self.pos) {
            Some(token) if token.kind == kind => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(unexpected(token, what)),
            None => Err(ScanError::UnexpectedEof),
        }
    }

    /// The error for an unexpected token (or end of input) at the cursor.
    fn expected_here(&self, what: &'static str) -> ScanError {
        match self.tokens.get(self.pos) {
            Some(token) => unexpected(token, what),
            None => ScanError::UnexpectedEof,
        }
    }

    /// Read one full import statement; the cursor sits on `import`.
    fn read_import(&mut self, line_index: &LineIndex) -> Result<ImportDeclaration, ScanError> {
        let import_token = self.expect(TokenKind::ImportKw, "'import'")?;
        let start = import_token.offset;
        self.skip_trivia();

        let (bindings, module_token) = match self.peek_kind() {
            Some(TokenKind::StringLit) => {
                // Side-effect form: no bindings at all.
                let module = self.expect(TokenKind::StringLit, "a module string")?;
                (Vec::new(), module)
            }
            _ => {
                let bindings = self.read_clauses()?;
                self.skip_trivia();
                self.expect(TokenKind::FromKw, "'from'")?;
                self.skip_trivia();
                let module = self.expect(TokenKind::StringLit, "a module string")?;
                (bindings, module)
            }
        };

        // The statement range covers a trailing semicolon when present.
        let mut end = module_token.end();
        let checkpoint = self.pos;
        self.skip_trivia();
        if self.peek_kind() == Some(TokenKind::Semicolon) {
            let semi = self.expect(TokenKind::Semicolon, "';'")?;
            end = semi.end();
        } else {
            self.pos = checkpoint;
        }

        let range = TextRange::new(start, end);
        let line_range = LineRange::new(
            line_index.line_of(range.start()),
            line_index.line_of(range.end()),
        );
        Ok(ImportDeclaration::new(
            unquote(module_token.text),
            bindings,
            range,
            line_range,
        ))
    }

    /// Read the bindings between `import` and `from`.
    fn read_clauses(&mut self) -> Result<Vec<ImportBinding>, ScanError> {
        let mut bindings = Vec::new();
        match self.peek_kind() {
            Some(TokenKind::Ident) => {
                let name = self.expect(TokenKind::Ident, "an import clause")?;
                bindings.push(ImportBinding::default_import(
                    name.text,
                    TextRange::new(name.offset, name.end()),
                ));
                self.skip_trivia();
                if self.peek_kind() == Some(TokenKind::Comma) {
                    self.expect(TokenKind::Comma, "','")?;
                    self.skip_trivia();
                    match self.peek_kind() {
                        Some(TokenKind::Star) => bindings.push(self.read_namespace()?),
                        Some(TokenKind::LBrace) => self.read_named_list(&mut bindings)?,
                        _ => return Err(self.expected_here("'*' or '{'")),
                    }
                }
            }
            Some(TokenKind::Star) => bindings.push(self.read_namespace()?),
            Some(TokenKind::LBrace) => self.read_named_list(&mut bindings)?,
            _ => return Err(self.expected_here("an import clause")),
        }
        Ok(bindings)
    }

    /// `* as name`, with the binding range spanning the whole clause.
    fn read_namespace(&mut self) -> Result<ImportBinding, ScanError> {
        let star = self.expect(TokenKind::Star, "'*'")?;
        self.skip_trivia();
        self.expect(TokenKind::AsKw, "'as'")?;
        self.skip_trivia();
        let name = self.expect(TokenKind::Ident, "a namespace alias")?;
        Ok(ImportBinding::namespace(
            name.text,
            TextRange::new(star.offset, name.end()),
        ))
    }

    /// The braced member list, including comment presence flags.
    fn read_named_list(&mut self, bindings: &mut Vec<ImportBinding>) -> Result<(), ScanError> {
        self.expect(TokenKind::LBrace, "'{'")?;
        let mut leading = false;
        loop {
            leading |= self.skip_trivia();
            match self.peek_kind() {
                Some(TokenKind::RBrace) => {
                    self.pos += 1;
                    if leading {
                        // A comment between the last separator and `}`
                        // trails the last member.
                        if let Some(last) = bindings.last_mut() {
                            last.comments.trailing = true;
                        }
                    }
                    return Ok(());
                }
                Some(TokenKind::Ident) => {
                    let mut binding = self.read_member()?;
                    binding.comments.leading = leading;
                    leading = false;
                    binding.comments.trailing = self.skip_trivia();
                    bindings.push(binding);
                    match self.peek_kind() {
                        Some(TokenKind::Comma) => self.pos += 1,
                        Some(TokenKind::RBrace) => {}
                        _ => return Err(self.expected_here("',' or '}'")),
                    }
                }
                _ => return Err(self.expected_here("a member name or '}'")),
            }
        }
    }

    /// One braced member, `name` or `imported as local`.
    fn read_member(&mut self) -> Result<ImportBinding, ScanError> {
        let imported = self.expect(TokenKind::Ident, "a member name")?;
        let mut local = imported.clone();
        let mut end = imported.end();

        // Rename lookahead: rewind when the trivia was not followed by
        // `as`, so it can be re-read as the member's trailing context.
        let checkpoint = self.pos;
        self.skip_trivia();
        if self.peek_kind() == Some(TokenKind::AsKw) {
            self.pos += 1;
            self.skip_trivia();
            local = self.expect(TokenKind::Ident, "a local alias")?;
            end = local.end();
        } else {
            self.pos = checkpoint;
        }

        Ok(ImportBinding::named(
            imported.text,
            local.text,
            TextRange::new(imported.offset, end),
        ))
    }
}

fn unexpected(token: &Token<'_>, what: &'static str) -> ScanError {
    if token.kind == TokenKind::Error {
        ScanError::UnexpectedCharacter {
            offset: token.offset.into(),
        }
    } else {
        ScanError::Expected {
            expected: what,
            offset: token.offset.into(),
        }
    }
}

/// Strip the surrounding quote characters from a string literal's text.
fn unquote(text: &str) -> &str {
    &text[1..text.len() - 1]
}
