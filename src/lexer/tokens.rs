use std::fmt::Display;

use crate::{
    errors::errors::{Error, ErrorImpl},
    identifier::{identifier::Argument, types::DataType},
    Position,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    String,
    Arguments,
    DataType,
    Delimiter,
    Returns,
    EndOfStream,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    String(String),
    Arguments(Vec<Argument>),
    DataType(DataType),
    Delimiter,
    Returns(DataType),
    EndOfStream,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::String(_) => TokenKind::String,
            Token::Arguments(_) => TokenKind::Arguments,
            Token::DataType(_) => TokenKind::DataType,
            Token::Delimiter => TokenKind::Delimiter,
            Token::Returns(_) => TokenKind::Returns,
            Token::EndOfStream => TokenKind::EndOfStream,
        }
    }

    /// Checked access to a data-type payload. Any other kind here is an
    /// implementation bug, not a user input error.
    pub fn into_data_type(self, position: Position) -> Result<DataType, Error> {
        match self {
            Token::DataType(data_type) => Ok(data_type),
            _ => Err(Error::new(
                ErrorImpl::LogicError {
                    detail: "expected a data type token",
                },
                position,
            )),
        }
    }
}
