use std::fmt;

use serde::{Deserialize, Serialize};

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
    /// Line number where the token appears (1-indexed)
    pub line: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: String, line: usize) -> Self {
        Token { kind, lexeme, line }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.kind == TokenKind::Eof {
            write!(f, "end of input [line {}]", self.line)
        } else {
            write!(f, "'{}' [line {}]", self.lexeme, self.line)
        }
    }
}

/// All possible token types in Typelet
///
/// Literal values ride inside their variant: a `Number` token carries the
/// parsed `f64`, a `Str` token the unquoted string contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    // Single-character punctuation
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Left brace {
    LeftBrace,
    /// Right brace }
    RightBrace,
    /// Colon delimiter (type annotations)
    Colon,
    /// Comma delimiter
    Comma,
    /// Dot operator
    Dot,
    /// Semicolon delimiter
    Semicolon,

    // Operators
    /// Plus operator (+)
    Plus,
    /// Minus operator (-)
    Minus,
    /// Star operator (*)
    Star,
    /// Slash operator (/)
    Slash,
    /// Assignment operator (=)
    Equal,
    /// Less than operator (<)
    Less,
    /// Less than or equal operator (<=)
    LessEqual,
    /// Greater than operator (>)
    Greater,
    /// Greater than or equal operator (>=)
    GreaterEqual,

    // Literals
    /// Number literal (always double-precision)
    Number(f64),
    /// String literal (quotes stripped)
    Str(String),
    /// Boolean true literal
    True,
    /// Boolean false literal
    False,

    // Identifiers
    /// Identifier
    Identifier(String),

    // Keywords
    /// LET keyword (mutable binding)
    Let,
    /// CONST keyword (immutable binding)
    Const,
    /// IF keyword
    If,
    /// ELSE keyword
    Else,
    /// PRINT keyword
    Print,
    /// AND keyword (reserved, not in the statement grammar)
    And,
    /// OR keyword (reserved, not in the statement grammar)
    Or,
    /// FOR keyword (reserved, not in the statement grammar)
    For,
    /// WHILE keyword (reserved, not in the statement grammar)
    While,

    // Type annotation keywords
    /// `number` type keyword
    NumberType,
    /// `string` type keyword
    StringType,
    /// `boolean` type keyword
    BooleanType,

    // Special
    /// End of file marker (sentinel, always the last token)
    Eof,
}

impl TokenKind {
    /// Looks up the keyword kind for an identifier-shaped lexeme
    ///
    /// Reserved words, including the three type-annotation keywords,
    /// override identifier classification.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "and" => Some(TokenKind::And),
            "or" => Some(TokenKind::Or),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "for" => Some(TokenKind::For),
            "while" => Some(TokenKind::While),
            "print" => Some(TokenKind::Print),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            "let" => Some(TokenKind::Let),
            "const" => Some(TokenKind::Const),
            "number" => Some(TokenKind::NumberType),
            "string" => Some(TokenKind::StringType),
            "boolean" => Some(TokenKind::BooleanType),
            _ => None,
        }
    }

    /// Check if token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Or
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::For
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Let
                | TokenKind::Const
                | TokenKind::NumberType
                | TokenKind::StringType
                | TokenKind::BooleanType
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Str(s) => write!(f, "\"{}\"", s),
            TokenKind::Identifier(id) => write!(f, "{}", id),
            _ => write!(f, "{:?}", self),
        }
    }
}
