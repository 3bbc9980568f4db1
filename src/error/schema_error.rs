//! Decoder construction errors.

/// Errors raised while building a decoder from an invalid definition.
///
/// These are programmer errors reported at construction time. Decoding itself
/// never fails this way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A union was declared without alternatives.
    #[error("union requires at least one alternative")]
    EmptyUnion,

    /// A variant was declared without alternatives.
    #[error("variant requires at least one alternative")]
    EmptyVariant,

    /// The same field name (or variant tag) was declared twice.
    #[error("'{0}' is declared more than once")]
    DuplicateField(String),
}
