use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

use super::types::DataType;

lazy_static! {
    static ref BARE_PART: Regex = Regex::new("^[A-Z_][A-Z0-9_]*$").unwrap();
}

/// A positional entry in a callable object's signature. The grammar
/// never names arguments, so `name` is always `None` here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: Option<String>,
    pub data_type: DataType,
}

impl Argument {
    pub fn positional(data_type: DataType) -> Self {
        Argument {
            name: None,
            data_type,
        }
    }
}

/// A dotted reference of up to four parts locating a namespaced object,
/// optionally carrying a callable object's argument types and return
/// type.
///
/// Parts fill strictly left to right; `part2` is never set while
/// `part1` is empty. `arguments` distinguishes a seen-but-empty list
/// (`Some(vec![])`, from `()`) from no list at all (`None`), and
/// `return_type` is only ever present together with `arguments`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FullyQualifiedIdentifier {
    pub part1: String,
    pub part2: String,
    pub part3: String,
    pub part4: String,
    pub arguments: Option<Vec<Argument>>,
    pub return_type: Option<DataType>,
}

impl FullyQualifiedIdentifier {
    /// The filled parts, in order.
    pub fn parts(&self) -> Vec<&str> {
        [&self.part1, &self.part2, &self.part3, &self.part4]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect()
    }

    /// True when the identifier names a callable object, i.e. an
    /// argument list was seen (even an empty one).
    pub fn is_callable(&self) -> bool {
        self.arguments.is_some()
    }
}

fn write_part(f: &mut std::fmt::Formatter<'_>, part: &str) -> std::fmt::Result {
    if BARE_PART.is_match(part) {
        write!(f, "{}", part)
    } else {
        write!(f, "\"{}\"", part.replace('"', "\"\""))
    }
}

impl Display for FullyQualifiedIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, part) in self.parts().into_iter().enumerate() {
            if index > 0 {
                write!(f, ".")?;
            }
            write_part(f, part)?;
        }

        if let Some(arguments) = &self.arguments {
            let types = arguments
                .iter()
                .map(|argument| argument.data_type.as_str())
                .collect::<Vec<&str>>();
            write!(f, "({})", types.join(", "))?;
        }

        if let Some(return_type) = &self.return_type {
            write!(f, " RETURNS {}", return_type)?;
        }

        Ok(())
    }
}
