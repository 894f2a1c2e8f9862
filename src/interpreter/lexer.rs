use std::fmt;

use logos::Logos;

/// Literal text carried by every [`TokenKind::Illegal`] token.
pub const ILLEGAL_LITERAL: &str = "ILLEGAL";

/// The kind of a lexical token.
///
/// Keywords are literal `#[token]` rules and therefore outrank the identifier
/// regex when both match the same text, so `let` is always [`TokenKind::Let`]
/// while `letter` stays an identifier.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Never produced by the logos rules themselves.
    Eof,
    /// A byte that matches no other rule.
    Illegal,

    /// Integer literal tokens, such as `42`. The text is kept raw and parsed
    /// by the parser.
    #[regex(r"[0-9]+")]
    Int,
    /// Identifier tokens, such as `x` or `add`.
    #[regex(r"[a-zA-Z]+")]
    Ident,

    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `let`
    #[token("let")]
    Let,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `fn`
    #[token("fn")]
    Function,
    /// `return`
    #[token("return")]
    Return,

    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `!`
    #[token("!")]
    Bang,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,

    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n]+", logos::skip)]
    Ignored,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
            Self::Int => "INT",
            Self::Ident => "IDENT",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Let => "LET",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Function => "FN",
            Self::Return => "RETURN",
            Self::Assign => "=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::Bang => "!",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Ignored => "WHITESPACE",
        };
        f.write_str(name)
    }
}

/// A lexical token: its kind plus the exact source text it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:    TokenKind,
    /// The source text of the token (`""` for end of input).
    pub literal: String,
}

impl Token {
    /// Creates a token of `kind` with the given literal text.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self { kind,
               literal: literal.into() }
    }

    /// The end-of-input token.
    #[must_use]
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type: {}, literal: {}", self.kind, self.literal)
    }
}

/// Pull-based tokenizer over a source string.
///
/// Each call to [`Lexer::next_token`] yields exactly one token. Every byte of
/// unrecognized input becomes an [`TokenKind::Illegal`] token and scanning
/// resumes right after it. Once the input is exhausted every further call yields
/// [`TokenKind::Eof`].
///
/// # Example
/// ```
/// use forklang::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x == 10");
/// assert_eq!(lexer.next_token().kind, TokenKind::Ident);
/// assert_eq!(lexer.next_token().kind, TokenKind::Equal);
/// assert_eq!(lexer.next_token().literal, "10");
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
/// ```
pub struct Lexer<'src> {
    inner:           logos::Lexer<'src, TokenKind>,
    /// Bytes of the last unmatched slice not yet reported.
    pending_illegal: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:           TokenKind::lexer(source),
               pending_illegal: 0, }
    }

    /// Returns the next token and advances past it.
    pub fn next_token(&mut self) -> Token {
        if self.pending_illegal > 0 {
            self.pending_illegal -= 1;
            return Token::new(TokenKind::Illegal, ILLEGAL_LITERAL);
        }

        match self.inner.next() {
            Some(Ok(kind)) => Token::new(kind, self.inner.slice()),
            Some(Err(())) => {
                log::trace!("illegal input {:?} at {:?}",
                            self.inner.slice(),
                            self.inner.span());
                self.pending_illegal = self.inner.slice().len().saturating_sub(1);
                Token::new(TokenKind::Illegal, ILLEGAL_LITERAL)
            },
            None => Token::eof(),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, the end of input.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (token.kind != TokenKind::Eof).then_some(token)
    }
}

/// Collects every token of `source`, excluding the final end-of-input token.
///
/// # Example
/// ```
/// use forklang::interpreter::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("let x = 5;").into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Let, TokenKind::Ident, TokenKind::Assign, TokenKind::Int, TokenKind::Semicolon]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
