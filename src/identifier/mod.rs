/// Identifier data model module
/// Contains the structured output of a parse
///
/// Submodules:
/// - identifier: FullyQualifiedIdentifier and Argument definitions
/// - types: the opaque data-type name
pub mod identifier;
pub mod types;
