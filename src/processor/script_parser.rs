//! Parser that consumes the lexer and classifies one line of script.
//
//  Grammar (one line):
//
//      line    ::= blank | header | command | <anything else>
//      header  ::= "for" IDENT "in" "range" "(" NUMBER ")" ":"
//      command ::= [IDENT "."] KEYWORD "(" [arg] ")"
//      arg     ::= ["-" | "+"] NUMBER | TEXT
//
//  A line that doesn't start with `for` or a known keyword is not a
//  command and is skipped by the driver. Once a keyword matched, the rest
//  of the line has to parse or the run fails.

use super::ast::{Command, Keyword, Line, LoopHeader};
use super::error::ScriptError;
use super::lexer::{Lexer, Token};

/// Classify one trimmed line. `line` is the 1-based number used in errors.
pub fn classify(text: &str, line: usize) -> Result<Line, ScriptError> {
    Parser::new(text).classify(line)
}

struct Parser<'a> {
    lex: std::iter::Peekable<Lexer<'a>>,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            lex: Lexer::new(src).peekable(),
        }
    }

    fn classify(&mut self, line: usize) -> Result<Line, ScriptError> {
        let word = match self.lex.next() {
            None => return Ok(Line::Blank),
            Some(Ok(Token::Ident(word))) => word,
            // free text the lexer chokes on is not a command either
            Some(_) => return Ok(Line::NotACommand),
        };

        if word == "for" {
            return self
                .parse_header()
                .map(Line::Header)
                .map_err(|detail| ScriptError::MalformedRepetitionCount { line, detail });
        }

        // optional `turtle.` / `t.` qualifier
        let word = if self.lex.peek() == Some(&Ok(Token::Dot)) {
            self.lex.next();
            match self.lex.next() {
                Some(Ok(Token::Ident(word))) => word,
                _ => return Ok(Line::NotACommand),
            }
        } else {
            word
        };

        let Some(keyword) = Keyword::lookup(&word) else {
            return Ok(Line::NotACommand);
        };

        self.parse_cmd(keyword)
            .map(Line::Command)
            .map_err(|detail| ScriptError::MalformedArgument {
                line,
                keyword: word,
                detail,
            })
    }

    fn parse_cmd(&mut self, keyword: Keyword) -> Result<Command, String> {
        self.expect(Token::LParen, "expected `(`")?;
        let cmd = match keyword {
            Keyword::Forward => Command::Forward(self.parse_distance()?),
            Keyword::Backward => Command::Backward(self.parse_distance()?),
            Keyword::Left => Command::Left(self.parse_angle()?),
            Keyword::Right => Command::Right(self.parse_angle()?),
            Keyword::PenColor => Command::PenColor(self.parse_text()?),
            Keyword::PenUp => Command::PenUp,
            Keyword::PenDown => Command::PenDown,
        };
        self.expect(Token::RParen, "expected `)`")?;
        self.expect_end()?;
        Ok(cmd)
    }

    fn parse_header(&mut self) -> Result<LoopHeader, String> {
        let variable = match self.next_token()? {
            Some(Token::Ident(v)) => v,
            _ => return Err("expected a loop variable after `for`".to_string()),
        };
        self.expect_ident("in")?;
        self.expect_ident("range")?;
        self.expect(Token::LParen, "expected `(` after `range`")?;
        let count = match self.next_token()? {
            Some(Token::Number(raw)) => loop_count(&raw)?,
            Some(Token::Minus) => return Err("count can't be negative".to_string()),
            Some(Token::Ident(name)) => return Err(format!("`{name}` is not a number")),
            _ => return Err("expected a count inside `range(...)`".to_string()),
        };
        self.expect(Token::RParen, "expected `)` after the count")?;
        self.expect(Token::Colon, "expected `:` at the end of the loop header")?;
        self.expect_end()?;
        Ok(LoopHeader { variable, count })
    }

    fn parse_distance(&mut self) -> Result<f64, String> {
        match self.next_token()? {
            Some(Token::Number(raw)) => whole_number(&raw),
            Some(Token::Minus) => Err("distance can't be negative".to_string()),
            other => Err(not_a_number(other)),
        }
    }

    fn parse_angle(&mut self) -> Result<f64, String> {
        let negative = matches!(self.lex.peek(), Some(Ok(Token::Minus)));
        if negative || matches!(self.lex.peek(), Some(Ok(Token::Plus))) {
            self.lex.next();
        }
        match self.next_token()? {
            Some(Token::Number(raw)) => {
                let deg = whole_number(&raw)?;
                Ok(if negative { -deg } else { deg })
            }
            other => Err(not_a_number(other)),
        }
    }

    fn parse_text(&mut self) -> Result<String, String> {
        match self.next_token()? {
            Some(Token::Text(text)) => Ok(text),
            _ => Err("expected a quoted colour name".to_string()),
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>, String> {
        self.lex.next().transpose()
    }

    fn expect(&mut self, want: Token, msg: &str) -> Result<(), String> {
        match self.next_token()? {
            Some(tok) if tok == want => Ok(()),
            _ => Err(msg.to_string()),
        }
    }

    fn expect_ident(&mut self, want: &str) -> Result<(), String> {
        match self.next_token()? {
            Some(Token::Ident(word)) if word == want => Ok(()),
            _ => Err(format!("expected `{want}`")),
        }
    }

    fn expect_end(&mut self) -> Result<(), String> {
        match self.next_token()? {
            None => Ok(()),
            Some(tok) => Err(format!("unexpected {tok:?} at end of line")),
        }
    }
}

/// Distance or angle: any run of digits, no width limit.
fn whole_number(raw: &str) -> Result<f64, String> {
    if raw.contains('.') {
        return Err(format!("`{raw}` is not a whole number"));
    }
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(format!("`{raw}` is too large")),
    }
}

/// Loop count: digits only, saturating instead of overflowing.
fn loop_count(raw: &str) -> Result<u64, String> {
    if raw.contains('.') {
        return Err(format!("`{raw}` is not a whole number"));
    }
    Ok(raw.parse::<u64>().unwrap_or(u64::MAX))
}

fn not_a_number(tok: Option<Token>) -> String {
    match tok {
        Some(Token::Ident(name)) => format!("`{name}` is not a number"),
        Some(Token::Text(text)) => format!("'{text}' is not a number"),
        Some(Token::RParen) | None => "missing number".to_string(),
        Some(tok) => format!("expected a number, found {tok:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_commands() {
        let test_cases = vec![
            ("forward(100)", Command::Forward(100.0)),
            ("fd( 20 )", Command::Forward(20.0)),
            ("turtle.forward(5)", Command::Forward(5.0)),
            ("t.backward(7)", Command::Backward(7.0)),
            ("bk(7)  # reverse", Command::Backward(7.0)),
            ("back(0)", Command::Backward(0.0)),
            ("left(90)", Command::Left(90.0)),
            ("lt(-45)", Command::Left(-45.0)),
            ("right(+72)", Command::Right(72.0)),
            ("rt(120)", Command::Right(120.0)),
            ("forward(99999999999)", Command::Forward(99_999_999_999.0)),
            ("rt(5000000000)", Command::Right(5_000_000_000.0)),
            ("pencolor('red')", Command::PenColor("red".into())),
            ("t.pencolor(\"#ff00ff\")", Command::PenColor("#ff00ff".into())),
            ("color('sky blue')", Command::PenColor("sky blue".into())),
            ("penup()", Command::PenUp),
            ("pd()", Command::PenDown),
        ];

        for (input, expected) in test_cases {
            assert_eq!(classify(input, 1), Ok(Line::Command(expected)), "{input}");
        }
    }

    #[test]
    fn test_not_commands() {
        let test_cases = vec![
            "pass",
            "print('hello')",
            "forwrd(100)",
            "Forward(100)",
            "turtle.",
            "x = 5",
            "@@@",
            "42",
        ];
        for input in test_cases {
            assert_eq!(classify(input, 1), Ok(Line::NotACommand), "{input}");
        }
    }

    #[test]
    fn test_blank_lines() {
        for input in ["", "# comment", "#forward(100)"] {
            assert_eq!(classify(input, 1), Ok(Line::Blank), "{input}");
        }
    }

    #[test]
    fn test_malformed_arguments() {
        let test_cases = vec![
            ("forward(abc)", "`abc` is not a number"),
            ("forward(1.5)", "`1.5` is not a whole number"),
            ("forward(-10)", "distance can't be negative"),
            ("forward()", "missing number"),
            ("forward 100", "expected `(`"),
            ("forward(100", "expected `)`"),
            ("left(90))", "unexpected RParen at end of line"),
            ("right('x')", "'x' is not a number"),
            ("pencolor(red)", "expected a quoted colour name"),
            ("pencolor('red)", "no closing ' found"),
            ("penup(3)", "expected `)`"),
        ];

        for (input, detail) in test_cases {
            match classify(input, 4) {
                Err(ScriptError::MalformedArgument {
                    line, detail: got, ..
                }) => {
                    assert_eq!(line, 4, "{input}");
                    assert_eq!(got, detail, "{input}");
                }
                other => panic!("{input}: expected malformed argument, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_malformed_argument_keeps_spelling() {
        let err = classify("t.fd(x)", 2).unwrap_err();
        assert_eq!(
            err,
            ScriptError::MalformedArgument {
                line: 2,
                keyword: "fd".into(),
                detail: "`x` is not a number".into(),
            }
        );
    }

    #[test]
    fn test_parse_header() {
        let test_cases = vec![
            ("for i in range(4):", "i", 4),
            ("for side in range( 0 ):", "side", 0),
            ("for _ in range(10000):   # lots", "_", 10000),
            ("for i in range(10000000000):", "i", 10_000_000_000),
            ("for i in range(99999999999999999999999):", "i", u64::MAX),
        ];
        for (input, variable, count) in test_cases {
            assert_eq!(
                classify(input, 1),
                Ok(Line::Header(LoopHeader {
                    variable: variable.into(),
                    count,
                })),
                "{input}"
            );
        }
    }

    #[test]
    fn test_malformed_header() {
        let test_cases = vec![
            "for i in range(abc):",
            "for i in range(-1):",
            "for i in range(2.5):",
            "for i in range(4)",
            "for i in range():",
            "for i in rnge(4):",
            "for in range(4):",
            "for",
        ];
        for input in test_cases {
            assert!(
                matches!(
                    classify(input, 9),
                    Err(ScriptError::MalformedRepetitionCount { line: 9, .. })
                ),
                "{input}"
            );
        }
    }
}
