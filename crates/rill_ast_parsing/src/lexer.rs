//! Responsible for converting source text into a token stream, one token per
//! pull.
//!
//! A newline is appended to the source before lexing, so every stream ends
//! with a newline token followed by [TokenKind::Eof] and the
//! missing-closing-quote check never has to special-case end of input.

use crate::error::SyntaxError;
use log::trace;
use rill_tokens::spanned::{Location, Position};
use rill_tokens::token::{Token, TokenKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The maximum length of an identifier, in characters
const MAX_IDENTIFIER_LENGTH: usize = 32;

/// Produces tokens on demand from source text
#[derive(Debug)]
pub struct Lexer {
    chars: Vec<char>,
    file: Option<Arc<Path>>,
    index: usize,
    current: char,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Creates a new lexer over `source`, tagging every location with `file`
    /// when one is given.
    pub fn new(source: &str, file: Option<PathBuf>) -> Self {
        let mut chars: Vec<char> = source.chars().collect();
        chars.push('\n');
        let current = chars[0];
        Self {
            chars,
            file: file.map(Arc::from),
            index: 0,
            current,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token.
    ///
    /// Callable repeatedly; once the end of input is reached every further
    /// call returns an [TokenKind::Eof] token. Malformed input fails with a
    /// location-tagged [SyntaxError].
    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        self.skip_whitespace();
        self.skip_comment();

        let token = match self.current {
            '\0' => {
                let position = self.position();
                Token::new(
                    Location::new(self.file.clone(), position, position),
                    TokenKind::Eof,
                )
            }
            '\n' => self.one_char_token(TokenKind::Nl),
            '+' => self.one_char_token(TokenKind::Plus),
            '-' => self.one_char_token(TokenKind::Minus),
            '*' => self.one_char_token(TokenKind::Star),
            '/' => self.one_char_token(TokenKind::Div),
            '%' => self.one_char_token(TokenKind::Rem),
            '{' => self.one_char_token(TokenKind::LCurly),
            '}' => self.one_char_token(TokenKind::RCurly),
            '(' => self.one_char_token(TokenKind::LParen),
            ')' => self.one_char_token(TokenKind::RParen),
            '=' => self.two_char_token('=', TokenKind::Eq, Some(TokenKind::Assign))?,
            '!' => self.two_char_token('=', TokenKind::Neq, None)?,
            '<' => self.two_char_token('=', TokenKind::Lte, Some(TokenKind::Lt))?,
            '>' => self.two_char_token('=', TokenKind::Gte, Some(TokenKind::Gt))?,
            '"' => self.string_token()?,
            c if c.is_ascii_digit() || c == '.' => self.number_token()?,
            c if c.is_alphabetic() || c == '_' => self.identifier_token()?,
            other => {
                return Err(SyntaxError::new(
                    self.spanning(self.position()),
                    format!("Got unexpected token: {other:?}"),
                ));
            }
        };

        self.advance();
        trace!("lexed {:?}", token.kind());
        Ok(token)
    }

    /// Advances the cursor by one character, updating the line/column
    /// counters for the character being left behind.
    fn advance(&mut self) {
        if self.current == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.index += 1;
        self.current = self.chars.get(self.index).copied().unwrap_or('\0');
    }

    fn peek(&self) -> char {
        self.chars.get(self.index + 1).copied().unwrap_or('\0')
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// A location from `start` through the current character, inclusive
    fn spanning(&self, start: Position) -> Location {
        Location::new(
            self.file.clone(),
            start,
            Position::new(self.line, self.column + 1),
        )
    }

    fn skip_whitespace(&mut self) {
        while self.current == ' ' || self.current == '\t' {
            self.advance();
        }
    }

    fn skip_comment(&mut self) {
        if self.current == '#' {
            while self.current != '\n' {
                self.advance();
            }
        }
    }

    fn one_char_token(&self, kind: TokenKind) -> Token {
        Token::new(self.spanning(self.position()), kind)
    }

    /// Recognizes a two-character operator, falling back to `otherwise` (or a
    /// syntax error when there is no one-character form) if the second
    /// character does not match.
    fn two_char_token(
        &mut self,
        next: char,
        if_next: TokenKind,
        otherwise: Option<TokenKind>,
    ) -> Result<Token, SyntaxError> {
        let start = self.position();

        let peek = self.peek();
        if peek != next {
            let location = self.spanning(start);
            return match otherwise {
                Some(kind) => Ok(Token::new(location, kind)),
                None => Err(SyntaxError::new(
                    location,
                    format!("Got unexpected token: {peek:?}"),
                )),
            };
        }

        self.advance();
        Ok(Token::new(self.spanning(start), if_next))
    }

    fn string_token(&mut self) -> Result<Token, SyntaxError> {
        let start_position = self.position();
        self.advance();

        let start = self.index;
        while self.current != '"' {
            if self.current == '\n' {
                let location = Location::new(self.file.clone(), start_position, self.position());
                return Err(SyntaxError::new(location, "Missing closing quote"));
            }
            self.advance();
        }

        let value: String = self.chars[start..self.index].iter().collect();
        Ok(Token::new(
            self.spanning(start_position),
            TokenKind::String(value),
        ))
    }

    /// Recognizes one or more digits with at most one decimal point.
    ///
    /// A second `.` starts a fresh token, so `1.2.3` lexes as `1.2` then
    /// `.3`; a `.` with no digits on either side is rejected.
    fn number_token(&mut self) -> Result<Token, SyntaxError> {
        let start_position = self.position();

        let start = self.index;
        while self.peek().is_ascii_digit() {
            self.advance();
        }
        if self.peek() == '.' {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text: String = self.chars[start..=self.index].iter().collect();
        let location = self.spanning(start_position);
        match text.parse::<f64>() {
            Ok(value) if text != "." => Ok(Token::new(location, TokenKind::Number(value))),
            _ => Err(SyntaxError::new(location, "Invalid number")),
        }
    }

    fn identifier_token(&mut self) -> Result<Token, SyntaxError> {
        let start_position = self.position();

        let start = self.index;
        while self.peek().is_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let name: String = self.chars[start..=self.index].iter().collect();
        let location = self.spanning(start_position);

        let kind = match name.as_str() {
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "input" => TokenKind::Input,
            "print" => TokenKind::Print,
            "let" => TokenKind::Let,
            _ => {
                if name.chars().count() > MAX_IDENTIFIER_LENGTH {
                    return Err(SyntaxError::new(location, "Identifier is too long"));
                }
                TokenKind::Identifier(name)
            }
        };
        Ok(Token::new(location, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rill_tokens::spanned::Spanned;

    /// Pulls every token kind up to and including EOF
    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source, None);
        let mut kinds = vec![];
        loop {
            let token = lexer.next_token().expect("lexing should succeed");
            let eof = token.kind() == &TokenKind::Eof;
            kinds.push(token.kind().clone());
            if eof {
                return kinds;
            }
        }
    }

    fn first_error(source: &str) -> SyntaxError {
        let mut lexer = Lexer::new(source, None);
        loop {
            match lexer.next_token() {
                Ok(token) if token.kind() == &TokenKind::Eof => {
                    panic!("expected a syntax error in {source:?}")
                }
                Ok(_) => {}
                Err(error) => return error,
            }
        }
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(kinds(""), vec![TokenKind::Nl, TokenKind::Eof]);
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(kinds(" \t"), vec![TokenKind::Nl, TokenKind::Eof]);
    }

    #[test]
    fn test_comment_only() {
        assert_eq!(kinds("# comment"), vec![TokenKind::Nl, TokenKind::Eof]);
    }

    #[test]
    fn test_comment_after_code() {
        assert_eq!(
            kinds("print 1 # say one"),
            vec![
                TokenKind::Print,
                TokenKind::Number(1.0),
                TokenKind::Nl,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_string() {
        assert_eq!(
            kinds("\"string\""),
            vec![
                TokenKind::String("string".to_string()),
                TokenKind::Nl,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let error = first_error("\"abc");
        assert_eq!(error.message, "Missing closing quote");
    }

    #[test]
    fn test_bare_dot() {
        assert_eq!(first_error(".").message, "Invalid number");
    }

    #[test]
    fn test_left_dot_number() {
        assert_eq!(
            kinds(".0"),
            vec![TokenKind::Number(0.0), TokenKind::Nl, TokenKind::Eof]
        );
    }

    #[test]
    fn test_right_dot_number() {
        assert_eq!(
            kinds("0."),
            vec![TokenKind::Number(0.0), TokenKind::Nl, TokenKind::Eof]
        );
    }

    #[test]
    fn test_consecutive_numbers() {
        assert_eq!(
            kinds("1.2.3"),
            vec![
                TokenKind::Number(1.2),
                TokenKind::Number(0.3),
                TokenKind::Nl,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_number() {
        assert_eq!(
            kinds("123.456"),
            vec![TokenKind::Number(123.456), TokenKind::Nl, TokenKind::Eof]
        );
    }

    #[test]
    fn test_number_then_identifier() {
        assert_eq!(
            kinds("0identifier"),
            vec![
                TokenKind::Number(0.0),
                TokenKind::Identifier("identifier".to_string()),
                TokenKind::Nl,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_identifier() {
        assert_eq!(
            kinds("_identifier64"),
            vec![
                TokenKind::Identifier("_identifier64".to_string()),
                TokenKind::Nl,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_identifier_too_long() {
        let name = "a".repeat(33);
        assert_eq!(first_error(&name).message, "Identifier is too long");
        let name = "a".repeat(32);
        assert_eq!(
            kinds(&name),
            vec![TokenKind::Identifier(name), TokenKind::Nl, TokenKind::Eof]
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            kinds("if else while input print let"),
            vec![
                TokenKind::If,
                TokenKind::Else,
                TokenKind::While,
                TokenKind::Input,
                TokenKind::Print,
                TokenKind::Let,
                TokenKind::Nl,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("+ - * / % = == != < <= > >="),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Div,
                TokenKind::Rem,
                TokenKind::Assign,
                TokenKind::Eq,
                TokenKind::Neq,
                TokenKind::Lt,
                TokenKind::Lte,
                TokenKind::Gt,
                TokenKind::Gte,
                TokenKind::Nl,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(first_error("@").message, "Got unexpected token: '@'");
    }

    #[test]
    fn test_bare_bang() {
        let error = first_error("!a");
        assert_eq!(error.message, "Got unexpected token: 'a'");
        assert_eq!(error.location.start(), Position::new(1, 1));
    }

    #[test]
    fn test_token_locations() {
        let mut lexer = Lexer::new("let x\n x", None);

        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind(), &TokenKind::Let);
        assert_eq!(token.location().start(), Position::new(1, 1));
        assert_eq!(token.location().end(), Position::new(1, 4));

        let token = lexer.next_token().unwrap();
        assert_eq!(token.location().start(), Position::new(1, 5));
        assert_eq!(token.location().end(), Position::new(1, 6));

        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind(), &TokenKind::Nl);
        assert_eq!(token.location().start(), Position::new(1, 6));

        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind(), &TokenKind::Identifier("x".to_string()));
        assert_eq!(token.location().start(), Position::new(2, 2));
        assert_eq!(token.location().end(), Position::new(2, 3));
    }

    #[test]
    fn test_eof_location_is_empty() {
        let mut lexer = Lexer::new("", None);
        lexer.next_token().unwrap();
        let eof = lexer.next_token().unwrap();
        assert_eq!(eof.kind(), &TokenKind::Eof);
        assert_eq!(eof.location().start(), eof.location().end());
    }

    #[test]
    fn test_error_location_is_tagged_with_file() {
        let mut lexer = Lexer::new("@", Some(PathBuf::from("bad.rill")));
        let error = lexer.next_token().unwrap_err();
        assert_eq!(
            error.to_string(),
            "bad.rill:1:1: SyntaxError: Got unexpected token: '@'"
        );
    }
}
