use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    identifier::{identifier::Argument, types::DataType},
    Position,
};

use super::tokens::Token;

lazy_static! {
    static ref ALLOWED_FIRST_CHARS: Regex = Regex::new("^[a-zA-Z_]$").unwrap();
}

const RETURNS_KEYWORD: &[u8] = b"RETURNS ";

/// Single-use cursor over one identifier expression. Construct a fresh
/// one per parse; the scan position only moves forward.
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: String::from(source),
            pos: 0,
        }
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32)
    }

    fn at(&self) -> u8 {
        self.source.as_bytes()[self.pos]
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn consume_space(&mut self) {
        while !self.at_eof() && self.at() == b' ' {
            self.advance_n(1);
        }
    }

    // The keyword is an 8 byte literal including its trailing space. With
    // fewer than 8 bytes left the branch must not be taken.
    fn at_returns_keyword(&self) -> bool {
        let bytes = self.source.as_bytes();
        let end = self.pos + RETURNS_KEYWORD.len();

        end <= bytes.len() && bytes[self.pos..end].eq_ignore_ascii_case(RETURNS_KEYWORD)
    }

    pub fn next(&mut self) -> Result<Token, Error> {
        self.consume_space();

        if self.at_eof() {
            return Ok(Token::EndOfStream);
        }

        let c = self.at();
        if c == b'.' {
            self.advance_n(1);
            return Ok(Token::Delimiter);
        } else if c == b'"' {
            return Ok(self.scan_quoted_identifier());
        } else if c == b'(' {
            return self.scan_arguments();
        }

        if self.at_returns_keyword() {
            return self.scan_returns();
        }

        self.scan_bare_word()
    }

    fn scan_bare_word(&mut self) -> Result<Token, Error> {
        let c = self.at() as char;
        if !ALLOWED_FIRST_CHARS.is_match(&c.to_string()) {
            return Err(Error::new(
                ErrorImpl::InvalidLeadingCharacter { character: c },
                self.position(),
            ));
        }

        let start = self.pos;
        while !self.at_eof() {
            if self.at() == b'.' || self.at() == b'(' {
                break;
            }
            self.advance_n(1);
        }

        Ok(Token::String(
            self.source[start..self.pos].to_ascii_uppercase(),
        ))
    }

    fn scan_quoted_identifier(&mut self) -> Token {
        self.advance_n(1);

        let mut value = Vec::new();
        while !self.at_eof() {
            let c = self.at();
            self.advance_n(1);

            if c == b'"' {
                if !self.at_eof() && self.at() == b'"' {
                    // a doubled quote is an escaped literal quote
                    value.push(b'"');
                    self.advance_n(1);
                    continue;
                }

                // closing quote, consumed but not part of the value
                break;
            }

            value.push(c);
        }

        Token::String(String::from_utf8_lossy(&value).into_owned())
    }

    fn scan_arguments(&mut self) -> Result<Token, Error> {
        self.advance_n(1);

        let mut arguments = Vec::new();
        while !self.at_eof() {
            let c = self.at();

            if c == b')' {
                self.advance_n(1);
                break;
            }
            if c == b' ' || c == b',' {
                self.advance_n(1);
                continue;
            }

            let data_type = self.scan_data_type().into_data_type(self.position())?;
            arguments.push(Argument::positional(data_type));
        }

        Ok(Token::Arguments(arguments))
    }

    fn scan_data_type(&mut self) -> Token {
        let start = self.pos;
        while !self.at_eof() {
            if self.at() == b',' || self.at() == b')' {
                break;
            }
            self.advance_n(1);
        }

        Token::DataType(DataType::new(&self.source[start..self.pos]))
    }

    fn scan_returns(&mut self) -> Result<Token, Error> {
        self.advance_n(RETURNS_KEYWORD.len());

        let data_type = self.scan_data_type().into_data_type(self.position())?;
        Ok(Token::Returns(data_type))
    }
}
