use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Scanner for Typelet source text
///
/// Performs a single forward scan with two cursors (token start, current
/// position) and a line counter. The first unrecognized character or
/// unterminated string aborts the scan; nothing after it is tokenized.
pub struct Scanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
}

impl Scanner {
    /// Creates a new scanner from source code
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans all tokens from the source and returns them as a vector
    ///
    /// The returned sequence always ends with a single EOF token at the
    /// final line.
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, String::new(), self.line));

        Ok(std::mem::take(&mut self.tokens))
    }

    fn scan_token(&mut self) -> Result<()> {
        let c = self.advance();

        match c {
            ':' => self.add_token(TokenKind::Colon),
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '=' => self.add_token(TokenKind::Equal),

            // Maximal munch: try the two-character form first
            '<' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::LessEqual);
                } else {
                    self.add_token(TokenKind::Less);
                }
            }
            '>' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::GreaterEqual);
                } else {
                    self.add_token(TokenKind::Greater);
                }
            }

            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            // Whitespace produces no token
            ' ' | '\r' | '\t' => {}

            '\n' => {
                self.line += 1;
            }

            '"' => self.scan_string()?,

            c if c.is_ascii_digit() => self.scan_number()?,

            c if is_alpha(c) => self.scan_identifier_or_keyword(),

            _ => {
                return Err(Error::lexing("Unexpected character.", self.line));
            }
        }

        Ok(())
    }

    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    fn scan_string(&mut self) -> Result<()> {
        while !self.is_at_end() && self.peek() != '"' {
            // Newlines inside a string do not terminate it
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(Error::lexing("Unterminated string.", self.line));
        }

        // Closing "
        self.advance();

        // Trim the surrounding quotes
        let value: String = self.source[self.start + 1..self.current - 1]
            .iter()
            .collect();
        self.add_token(TokenKind::Str(value));
        Ok(())
    }

    fn scan_number(&mut self) -> Result<()> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A trailing '.' with no digit after it is not part of the number
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume .
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text: String = self.source[self.start..self.current].iter().collect();
        let value: f64 = text
            .parse()
            .map_err(|_| Error::lexing(format!("Invalid number: {}", text), self.line))?;
        self.add_token(TokenKind::Number(value));
        Ok(())
    }

    fn scan_identifier_or_keyword(&mut self) {
        while is_alphanumeric(self.peek()) {
            self.advance();
        }

        let text: String = self.source[self.start..self.current].iter().collect();
        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Identifier(text));
        self.add_token(kind);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            '\0'
        } else {
            self.source[self.current + 1]
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            false
        } else {
            self.current += 1;
            true
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.tokens.push(Token::new(kind, lexeme, self.line));
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Vec<Token> {
        Scanner::new(source).scan_tokens().unwrap()
    }

    #[test]
    fn test_simple_addition() {
        let tokens = scan("1 + 2");

        assert_eq!(tokens.len(), 4); // 1 + 2 EOF
        assert_eq!(tokens[0].kind, TokenKind::Number(1.0));
        assert_eq!(tokens[1].kind, TokenKind::Plus);
        assert_eq!(tokens[2].kind, TokenKind::Number(2.0));
        assert_eq!(tokens[3].kind, TokenKind::Eof);
        assert!(tokens.iter().all(|t| t.line == 1));
    }

    #[test]
    fn test_declaration_tokens() {
        let tokens = scan("let x: number = 5;");

        let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Let,
                TokenKind::Identifier("x".to_string()),
                TokenKind::Colon,
                TokenKind::NumberType,
                TokenKind::Equal,
                TokenKind::Number(5.0),
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_maximal_munch_comparisons() {
        let tokens = scan("< <= > >= =");

        assert_eq!(tokens[0].kind, TokenKind::Less);
        assert_eq!(tokens[1].kind, TokenKind::LessEqual);
        assert_eq!(tokens[2].kind, TokenKind::Greater);
        assert_eq!(tokens[3].kind, TokenKind::GreaterEqual);
        assert_eq!(tokens[4].kind, TokenKind::Equal);
    }

    #[test]
    fn test_line_counting() {
        let tokens = scan("1\n2\n3");

        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[2].line, 3);
        assert_eq!(tokens[3].line, 3); // EOF at final line
    }

    #[test]
    fn test_comment_skipped_to_end_of_line() {
        let tokens = scan("// a comment\nprint 1;");

        assert_eq!(tokens[0].kind, TokenKind::Print);
        assert_eq!(tokens[0].line, 2);
    }

    #[test]
    fn test_comment_at_end_of_input() {
        let tokens = scan("1 // trailing");

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Number(1.0));
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn test_string_literal() {
        let tokens = scan("\"hello\"");

        assert_eq!(tokens[0].kind, TokenKind::Str("hello".to_string()));
        assert_eq!(tokens[0].lexeme, "\"hello\"");
    }

    #[test]
    fn test_multiline_string_counts_lines() {
        let tokens = scan("\"a\nb\" 1");

        assert_eq!(tokens[0].kind, TokenKind::Str("a\nb".to_string()));
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_unterminated_string() {
        let err = Scanner::new("\"abc").scan_tokens().unwrap_err();
        assert_eq!(
            err,
            Error::Lexing {
                message: "Unterminated string.".to_string(),
                line: 1,
            }
        );
    }

    #[test]
    fn test_unterminated_string_reports_final_line() {
        // The string spans lines; the error points at the line reached
        // by end of input, not the opening quote's line.
        let err = Scanner::new("\"abc\ndef\nghi").scan_tokens().unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_number_trailing_dot_not_consumed() {
        let tokens = scan("5.");

        assert_eq!(tokens[0].kind, TokenKind::Number(5.0));
        assert_eq!(tokens[1].kind, TokenKind::Dot);
    }

    #[test]
    fn test_fractional_number() {
        let tokens = scan("3.25");
        assert_eq!(tokens[0].kind, TokenKind::Number(3.25));
        assert_eq!(tokens[0].lexeme, "3.25");
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let tokens = scan("const flag: boolean = true;");

        assert_eq!(tokens[0].kind, TokenKind::Const);
        assert_eq!(tokens[1].kind, TokenKind::Identifier("flag".to_string()));
        assert_eq!(tokens[3].kind, TokenKind::BooleanType);
        assert_eq!(tokens[5].kind, TokenKind::True);
    }

    #[test]
    fn test_underscore_identifier() {
        let tokens = scan("_private_1");
        assert_eq!(
            tokens[0].kind,
            TokenKind::Identifier("_private_1".to_string())
        );
    }

    #[test]
    fn test_unexpected_character() {
        let err = Scanner::new("let x = @;").scan_tokens().unwrap_err();
        assert_eq!(
            err,
            Error::Lexing {
                message: "Unexpected character.".to_string(),
                line: 1,
            }
        );
    }

    #[test]
    fn test_whitespace_produces_no_tokens() {
        let tokens = scan(" \t\r\n ");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].line, 2);
    }
}
