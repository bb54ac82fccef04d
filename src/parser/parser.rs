//! Parser implementation for assembling the structured identifier.
//!
//! The parser drives the lexer one token at a time and folds each token
//! into the accumulating `FullyQualifiedIdentifier`. A token whose kind
//! is not in the current state's whitelist aborts the parse immediately;
//! there is no recovery and no partial result.

use crate::{
    errors::errors::{Error, ErrorImpl},
    identifier::identifier::FullyQualifiedIdentifier,
    lexer::{lexer::Lexer, tokens::Token},
    Position,
};

use super::state::ParserState;

/// The parser structure that maintains parsing state.
///
/// This struct holds the accumulating identifier and the grammar state
/// that decides which token kinds are legal next.
pub struct Parser {
    state: ParserState,
    identifier: FullyQualifiedIdentifier,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            state: ParserState::AwaitingPart,
            identifier: FullyQualifiedIdentifier::default(),
        }
    }

    /// Assigns a part value to the first unfilled part, left to right,
    /// and moves the grammar state accordingly.
    ///
    /// # Arguments
    ///
    /// * `value` - The part text produced by the lexer
    /// * `position` - Where the token started, for error reporting
    ///
    /// # Returns
    ///
    /// Returns Ok(()) on assignment. A fifth part is unreachable through
    /// the state whitelist, so hitting it is reported as a logic error
    /// rather than a syntax error.
    fn assign_part(&mut self, value: String, position: Position) -> Result<(), Error> {
        if self.identifier.part1.is_empty() {
            self.identifier.part1 = value;
            self.state = ParserState::AwaitingDelimiterOrEnd;
        } else if self.identifier.part2.is_empty() {
            self.identifier.part2 = value;
            self.state = ParserState::AwaitingDelimiterOrEnd;
        } else if self.identifier.part3.is_empty() {
            self.identifier.part3 = value;
            self.state = ParserState::AwaitingArgumentsDelimiterOrEnd;
        } else if self.identifier.part4.is_empty() {
            self.identifier.part4 = value;
            self.state = ParserState::AwaitingEndOnly;
        } else {
            return Err(Error::new(
                ErrorImpl::LogicError {
                    detail: "all four identifier parts are already filled",
                },
                position,
            ));
        }

        Ok(())
    }
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}

/// Parses an identifier expression into a `FullyQualifiedIdentifier`.
///
/// This is the crate's entry point. It constructs a fresh lexer over the
/// input and folds tokens until the end of the stream; any lexical or
/// grammatical failure is returned to the caller unchanged.
///
/// # Arguments
///
/// * `input` - The raw identifier expression
///
/// # Returns
///
/// The structured identifier, or the first error encountered.
pub fn parse(input: &str) -> Result<FullyQualifiedIdentifier, Error> {
    let mut lexer = Lexer::new(input);
    let mut parser = Parser::new();

    loop {
        let position = lexer.position();
        let token = lexer.next()?;

        if !parser.state.accepts(token.kind()) {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: parser.state.expected().to_vec(),
                    found: token.kind(),
                },
                position,
            ));
        }

        match token {
            Token::String(value) => parser.assign_part(value, position)?,
            Token::Delimiter => parser.state = ParserState::AwaitingPart,
            Token::Arguments(arguments) => {
                parser.identifier.arguments = Some(arguments);
                parser.state = ParserState::AwaitingReturnsOrEnd;
            }
            Token::Returns(data_type) => {
                parser.identifier.return_type = Some(data_type);
                parser.state = ParserState::AwaitingEndOnly;
            }
            Token::DataType(_) => {
                // data type tokens are consumed inside the lexer's
                // argument and returns scans, never surfaced here
                return Err(Error::new(
                    ErrorImpl::LogicError {
                        detail: "data type token outside an argument or returns clause",
                    },
                    position,
                ));
            }
            Token::EndOfStream => return Ok(parser.identifier),
        }
    }
}
