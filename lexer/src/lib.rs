mod token;

pub use token::{Token, TokenType};

use std::rc::Rc;

/// Pull-based scanner. Call `scan_token` repeatedly until it yields `EOF`;
/// each call advances past exactly one token's worth of source.
pub struct Lexer {
    source: Rc<str>,
    start: usize,
    current: usize,
    line: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            source: Rc::from(source),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    pub fn scan_token(&mut self) -> Token {
        self.skip_whitespace();
        self.start = self.current;

        if self.is_at_end() {
            return self.make_token(TokenType::EOF);
        }

        let c = self.advance();

        if is_alpha(c) {
            return self.identifier();
        }
        if c.is_ascii_digit() {
            return self.number();
        }

        match c {
            '(' => self.make_token(TokenType::OParen),
            ')' => self.make_token(TokenType::CParen),
            '{' => self.make_token(TokenType::OBrace),
            '}' => self.make_token(TokenType::CBrace),
            ',' => self.make_token(TokenType::Comma),
            '.' => self.make_token(TokenType::Dot),
            '-' => self.make_token(TokenType::Minus),
            '+' => self.make_token(TokenType::Plus),
            ';' => self.make_token(TokenType::Semicolon),
            '*' => self.make_token(TokenType::Star),
            '/' => self.make_token(TokenType::Slash),
            '!' => {
                let typ = if self.eat('=') {
                    TokenType::BangEqual
                } else {
                    TokenType::Bang
                };
                self.make_token(typ)
            }
            '=' => {
                let typ = if self.eat('=') {
                    TokenType::DEqual
                } else {
                    TokenType::Equal
                };
                self.make_token(typ)
            }
            '<' => {
                let typ = if self.eat('=') {
                    TokenType::LessEqual
                } else {
                    TokenType::Less
                };
                self.make_token(typ)
            }
            '>' => {
                let typ = if self.eat('=') {
                    TokenType::GreaterEqual
                } else {
                    TokenType::Greater
                };
                self.make_token(typ)
            }
            '"' => self.string(),
            _ => self.error_token("Unexpected character."),
        }
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.peek(0) {
                Some(' ') | Some('\r') | Some('\t') => {
                    self.current += 1;
                }
                Some('\n') => {
                    self.line += 1;
                    self.current += 1;
                }
                Some('/') if self.peek(1) == Some('/') => {
                    while self.peek(0) != Some('\n') && !self.is_at_end() {
                        self.current += 1;
                    }
                }
                _ => return,
            }
        }
    }

    fn identifier(&mut self) -> Token {
        while self.peek(0).is_some_and(is_alpha_numeric) {
            self.current += 1;
        }
        let typ = TokenType::keyword(self.lexeme()).unwrap_or(TokenType::Identifier);
        self.make_token(typ)
    }

    fn number(&mut self) -> Token {
        while self.peek(0).is_some_and(|c| c.is_ascii_digit()) {
            self.current += 1;
        }
        if self.peek(0) == Some('.') && self.peek(1).is_some_and(|c| c.is_ascii_digit()) {
            self.current += 1;
            while self.peek(0).is_some_and(|c| c.is_ascii_digit()) {
                self.current += 1;
            }
        }
        self.make_token(TokenType::Number)
    }

    fn string(&mut self) -> Token {
        while self.peek(0) != Some('"') && !self.is_at_end() {
            if self.peek(0) == Some('\n') {
                self.line += 1;
            }
            self.current += 1;
        }
        if self.is_at_end() {
            return self.error_token("Unterminated string.");
        }
        self.current += 1; // closing quote
        self.make_token(TokenType::String)
    }

    fn advance(&mut self) -> char {
        let c = self.peek(0).expect("advance called at end of source");
        self.current += c.len_utf8();
        c
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek(0) == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn peek(&self, distance: usize) -> Option<char> {
        self.source[self.current..].chars().nth(distance)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn lexeme(&self) -> &str {
        &self.source[self.start..self.current]
    }

    fn make_token(&self, typ: TokenType) -> Token {
        Token::new(
            typ,
            Rc::clone(&self.source),
            self.start,
            self.current - self.start,
            self.line,
        )
    }

    fn error_token(&self, msg: &'static str) -> Token {
        Token::new(TokenType::Error, Rc::from(msg), 0, msg.len(), self.line)
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}
