//! Token types produced by the lexer.

use std::fmt;
use std::ops::Index;

use crate::SourceSpan;

/// Reserved words. Matching is exact and case-sensitive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    Var,
    Out,
    Print,
    Map,
    Reduce,
}

impl Keyword {
    /// Classify an identifier-shaped word.
    pub fn from_ident(text: &str) -> Option<Keyword> {
        match text {
            "var" => Some(Keyword::Var),
            "out" => Some(Keyword::Out),
            "print" => Some(Keyword::Print),
            "map" => Some(Keyword::Map),
            "reduce" => Some(Keyword::Reduce),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Var => "var",
            Keyword::Out => "out",
            Keyword::Print => "print",
            Keyword::Map => "map",
            Keyword::Reduce => "reduce",
        }
    }

    /// Keywords that begin a statement.
    pub const fn starts_statement(self) -> bool {
        matches!(self, Keyword::Var | Keyword::Out | Keyword::Print)
    }
}

/// Punctuation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Symbol {
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Eq,
}

impl Symbol {
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            '(' => Some(Symbol::LParen),
            ')' => Some(Symbol::RParen),
            '{' => Some(Symbol::LBrace),
            '}' => Some(Symbol::RBrace),
            ',' => Some(Symbol::Comma),
            '=' => Some(Symbol::Eq),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Symbol::LParen => '(',
            Symbol::RParen => ')',
            Symbol::LBrace => '{',
            Symbol::RBrace => '}',
            Symbol::Comma => ',',
            Symbol::Eq => '=',
        }
    }
}

/// Arithmetic operator characters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Star),
            '/' => Some(Operator::Slash),
            '^' => Some(Operator::Caret),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Star => '*',
            Operator::Slash => '/',
            Operator::Caret => '^',
        }
    }
}

/// Token category.
///
/// The payload-carrying variants let the parser match on the exact keyword,
/// symbol or operator without comparing text; highlighters only need the
/// outer variant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Identifier,
    Number,
    String,
    Keyword(Keyword),
    Symbol(Symbol),
    Operator(Operator),
    /// `->`
    Arrow,
    Eof,
}

impl TokenKind {
    /// Human-readable category name, used by token dumps.
    pub const fn category(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Symbol(_) => "symbol",
            TokenKind::Operator(_) => "operator",
            TokenKind::Arrow => "arrow",
            TokenKind::Eof => "eof",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(kw) => write!(f, "keyword `{}`", kw.as_str()),
            TokenKind::Symbol(sym) => write!(f, "`{}`", sym.as_char()),
            TokenKind::Operator(op) => write!(f, "`{}`", op.as_char()),
            TokenKind::Arrow => write!(f, "`->`"),
            other => write!(f, "{}", other.category()),
        }
    }
}

/// A token: kind plus location. Text is not stored; see [`TokenList::text`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: SourceSpan,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: SourceSpan) -> Self {
        Token { kind, span }
    }
}

/// Lexer output: the token vector plus the source it was cut from.
///
/// Token text is sliced from the borrowed source on request. Nothing is
/// copied, and the slice for a given token is always the same.
///
/// # Invariant
///
/// A list produced by the lexer is never empty and its last token is the
/// only `Eof`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TokenList<'src> {
    source: &'src str,
    tokens: Vec<Token>,
}

impl<'src> TokenList<'src> {
    pub fn new(source: &'src str) -> Self {
        TokenList {
            source,
            tokens: Vec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// The source text these tokens index into.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Source text covered by `token`.
    ///
    /// Returns `""` for zero-length tokens and for spans that do not fall on
    /// character boundaries of this source.
    pub fn text(&self, token: &Token) -> &'src str {
        self.source.get(token.span.to_range()).unwrap_or("")
    }
}

impl Index<usize> for TokenList<'_> {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList<'_> {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
