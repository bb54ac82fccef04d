use std::fmt::Display;

/// An opaque data-type name, normalized to ASCII upper case on
/// construction. Not validated against a fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataType(String);

impl DataType {
    pub fn new(raw: &str) -> Self {
        DataType(raw.to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DataType {
    fn from(raw: &str) -> Self {
        DataType::new(raw)
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
