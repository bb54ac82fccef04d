//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Bare words and upper-casing
//! - Quoted identifiers with escape sequences
//! - Delimiters, argument lists and the RETURNS keyword
//! - Error cases

use crate::identifier::{identifier::Argument, types::DataType};
use crate::Position;

use super::{
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

#[test]
fn test_tokenize_bare_word() {
    let mut lexer = Lexer::new("my_db");

    assert_eq!(lexer.next().unwrap(), Token::String("MY_DB".to_string()));
    assert_eq!(lexer.next().unwrap(), Token::EndOfStream);
}

#[test]
fn test_tokenize_bare_word_stops_at_delimiter() {
    let mut lexer = Lexer::new("db.schema");

    assert_eq!(lexer.next().unwrap(), Token::String("DB".to_string()));
    assert_eq!(lexer.next().unwrap(), Token::Delimiter);
    assert_eq!(lexer.next().unwrap(), Token::String("SCHEMA".to_string()));
    assert_eq!(lexer.next().unwrap(), Token::EndOfStream);
}

#[test]
fn test_tokenize_bare_word_stops_at_open_paren() {
    let mut lexer = Lexer::new("my_proc()");

    assert_eq!(lexer.next().unwrap(), Token::String("MY_PROC".to_string()));
    assert_eq!(lexer.next().unwrap(), Token::Arguments(vec![]));
}

#[test]
fn test_tokenize_skips_leading_spaces() {
    let mut lexer = Lexer::new("   my_db");

    assert_eq!(lexer.next().unwrap(), Token::String("MY_DB".to_string()));
}

#[test]
fn test_tokenize_space_is_part_of_bare_word() {
    // the grammar has no space terminator for bare words
    let mut lexer = Lexer::new("my db");

    assert_eq!(lexer.next().unwrap(), Token::String("MY DB".to_string()));
    assert_eq!(lexer.next().unwrap(), Token::EndOfStream);
}

#[test]
fn test_tokenize_quoted_preserves_case() {
    let mut lexer = Lexer::new("\"MyDb\"");

    assert_eq!(lexer.next().unwrap(), Token::String("MyDb".to_string()));
    assert_eq!(lexer.next().unwrap(), Token::EndOfStream);
}

#[test]
fn test_tokenize_quoted_escaped_quote() {
    let mut lexer = Lexer::new("\"my\"\"_db\"");

    assert_eq!(lexer.next().unwrap(), Token::String("my\"_db".to_string()));
    assert_eq!(lexer.next().unwrap(), Token::EndOfStream);
}

#[test]
fn test_tokenize_quoted_dot_is_not_a_delimiter() {
    let mut lexer = Lexer::new("\"my.db\"");

    assert_eq!(lexer.next().unwrap(), Token::String("my.db".to_string()));
    assert_eq!(lexer.next().unwrap(), Token::EndOfStream);
}

#[test]
fn test_tokenize_unterminated_quote_reads_to_end() {
    let mut lexer = Lexer::new("\"my_db");

    assert_eq!(lexer.next().unwrap(), Token::String("my_db".to_string()));
    assert_eq!(lexer.next().unwrap(), Token::EndOfStream);
}

#[test]
fn test_tokenize_empty_argument_list() {
    let mut lexer = Lexer::new("()");

    assert_eq!(lexer.next().unwrap(), Token::Arguments(vec![]));
    assert_eq!(lexer.next().unwrap(), Token::EndOfStream);
}

#[test]
fn test_tokenize_argument_list() {
    let mut lexer = Lexer::new("(VARCHAR, NUMBER)");

    assert_eq!(
        lexer.next().unwrap(),
        Token::Arguments(vec![
            Argument::positional(DataType::from("VARCHAR")),
            Argument::positional(DataType::from("NUMBER")),
        ])
    );
    assert_eq!(lexer.next().unwrap(), Token::EndOfStream);
}

#[test]
fn test_tokenize_argument_types_are_upper_cased() {
    let mut lexer = Lexer::new("(varchar)");

    assert_eq!(
        lexer.next().unwrap(),
        Token::Arguments(vec![Argument::positional(DataType::from("VARCHAR"))])
    );
}

#[test]
fn test_tokenize_returns_clause() {
    let mut lexer = Lexer::new("RETURNS VARCHAR");

    assert_eq!(
        lexer.next().unwrap(),
        Token::Returns(DataType::from("VARCHAR"))
    );
    assert_eq!(lexer.next().unwrap(), Token::EndOfStream);
}

#[test]
fn test_tokenize_returns_is_case_insensitive() {
    let mut lexer = Lexer::new("returns number");

    assert_eq!(
        lexer.next().unwrap(),
        Token::Returns(DataType::from("NUMBER"))
    );
}

#[test]
fn test_tokenize_returns_needs_eight_bytes() {
    // without the trailing space the keyword branch must not be taken
    let mut lexer = Lexer::new("RETURNS");

    assert_eq!(lexer.next().unwrap(), Token::String("RETURNS".to_string()));
    assert_eq!(lexer.next().unwrap(), Token::EndOfStream);
}

#[test]
fn test_tokenize_returns_prefix_is_a_bare_word() {
    let mut lexer = Lexer::new("RETURNSX");

    assert_eq!(lexer.next().unwrap(), Token::String("RETURNSX".to_string()));
}

#[test]
fn test_tokenize_delimiter() {
    let mut lexer = Lexer::new(".");

    assert_eq!(lexer.next().unwrap(), Token::Delimiter);
    assert_eq!(lexer.next().unwrap(), Token::EndOfStream);
}

#[test]
fn test_tokenize_empty_input() {
    let mut lexer = Lexer::new("");

    assert_eq!(lexer.next().unwrap(), Token::EndOfStream);
}

#[test]
fn test_tokenize_invalid_leading_character() {
    let mut lexer = Lexer::new("1ABC");
    let error = lexer.next().unwrap_err();

    assert_eq!(error.get_error_name(), "InvalidLeadingCharacter");
    assert_eq!(error.get_position().0, 0);
}

#[test]
fn test_tokenize_invalid_leading_character_position() {
    let mut lexer = Lexer::new("MY_DB.1ABC");

    assert_eq!(lexer.next().unwrap(), Token::String("MY_DB".to_string()));
    assert_eq!(lexer.next().unwrap(), Token::Delimiter);

    let error = lexer.next().unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidLeadingCharacter");
    assert_eq!(error.get_position().0, 6);
}

#[test]
fn test_token_kinds() {
    assert_eq!(Token::String(String::new()).kind(), TokenKind::String);
    assert_eq!(Token::Arguments(vec![]).kind(), TokenKind::Arguments);
    assert_eq!(
        Token::DataType(DataType::from("VARCHAR")).kind(),
        TokenKind::DataType
    );
    assert_eq!(Token::Delimiter.kind(), TokenKind::Delimiter);
    assert_eq!(
        Token::Returns(DataType::from("VARCHAR")).kind(),
        TokenKind::Returns
    );
    assert_eq!(Token::EndOfStream.kind(), TokenKind::EndOfStream);
}

#[test]
fn test_into_data_type_rejects_other_kinds() {
    let error = Token::Delimiter.into_data_type(Position::null()).unwrap_err();

    assert_eq!(error.get_error_name(), "LogicError");
}
