//! Very small hand-written lexer for one line of turtle script.
//!
//! At this stage we *only* break a single line into `Token`s.
//! No keywords are recognised yet – `forward`, `for`, `range` etc. all
//! come out as `Ident("forward")`, … The recognizer interprets them
//! later.
//
//  Lexical items:
//
//      Ident    ::= [A-Za-z_][A-Za-z0-9_]*
//      Number   ::= [0-9]+ ('.' [0-9]+)?   (kept as text, checked later)
//      Text     ::= '\'' .*? '\''  |  '"' .*? '"'
//      Symbols  ::= '(' | ')' | '.' | ':' | ',' | '-' | '+'
//      Whitespace is discarded, '#' starts a comment that runs to the
//      end of the line.

use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Ident(String),
    Number(String),
    Text(String), // everything between matching quotes
    LParen,
    RParen,
    Dot,
    Colon,
    Comma,
    Minus,
    Plus,
}

#[derive(Clone)]
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            chars: src.chars().peekable(),
            finished: false,
        }
    }

    fn next_char(&mut self) -> Option<char> {
        self.chars.next()
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn consume_while<F: Fn(char) -> bool>(&mut self, pred: F, buf: &mut String) {
        while let Some(c) = self.peek_char() {
            if pred(c) {
                buf.push(c);
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self, first: char) -> String {
        let mut id = String::new();
        id.push(first);
        self.consume_while(|c| c.is_ascii_alphanumeric() || c == '_', &mut id);
        id
    }

    fn read_number(&mut self, first: char) -> String {
        let mut num = String::new();
        num.push(first);
        self.consume_while(|c| c.is_ascii_digit(), &mut num);

        // a fraction only if a digit follows the dot, so `1.` stays Number + Dot
        let mut ahead = self.chars.clone();
        if ahead.next() == Some('.') && ahead.next().is_some_and(|c| c.is_ascii_digit()) {
            self.next_char();
            num.push('.');
            self.consume_while(|c| c.is_ascii_digit(), &mut num);
        }
        num
    }

    fn read_text(&mut self, quote: char) -> Result<String, String> {
        let mut txt = String::new();
        while let Some(c) = self.next_char() {
            if c == quote {
                return Ok(txt);
            }
            txt.push(c);
        }
        Err(format!("no closing {quote} found"))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }

        let ch = match self.next_char() {
            Some('#') | None => {
                self.finished = true;
                return None;
            }
            Some(c) => c,
        };

        let tok_res = match ch {
            '(' => Ok(Token::LParen),
            ')' => Ok(Token::RParen),
            '.' => Ok(Token::Dot),
            ':' => Ok(Token::Colon),
            ',' => Ok(Token::Comma),
            '-' => Ok(Token::Minus),
            '+' => Ok(Token::Plus),
            '\'' | '"' => self.read_text(ch).map(Token::Text),
            c if c.is_ascii_digit() => Ok(Token::Number(self.read_number(c))),
            c if c.is_ascii_alphabetic() || c == '_' => Ok(Token::Ident(self.read_identifier(c))),
            e => Err(format!("unexpected character {e}")),
        };

        if tok_res.is_err() {
            self.finished = true;
        }
        Some(tok_res)
    }
}

/// Cheap check used by the block scanner: does this line open a loop?
pub fn starts_with_for(line: &str) -> bool {
    matches!(Lexer::new(line).next(), Some(Ok(Token::Ident(word))) if word == "for")
}
