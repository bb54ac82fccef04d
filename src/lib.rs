#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod identifier;
pub mod lexer;
pub mod parser;

pub use parser::parser::parse;

/// Byte offset into the input expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position(pub u32);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

pub fn render_error(error: &Error, input: &str) -> String {
    /*
        Error: UnexpectedToken (Expected one of [String], received Delimiter)
        -> MY_DB..MY_TABLE
           ------^
    */

    let position = error.get_position().0 as usize;

    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }

    rendered.push_str(&format!("-> {}\n", input));

    let arrows = position + 1;
    rendered.push_str(&format!("   {:->arrows$}", "^"));

    rendered
}
