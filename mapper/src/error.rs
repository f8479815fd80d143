//! Mapping error taxonomy.

use xsdmap_model::JsonPrimitive;

/// An error produced by the mapping layer.
///
/// Both variants surface immediately to the caller. The mapping is pure and
/// deterministic, so no retry or recovery applies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input is not one of the seven JSON-Schema primitive type names.
    #[error("unrecognized JSON-Schema primitive type name `{name}`")]
    Unrecognized {
        /// The offending input, verbatim.
        name: String,
    },

    /// The input is a recognized JSON-Schema primitive, but a structural one
    /// (`object`, `array`, `null`) with no XSD simple-type equivalent.
    #[error("JSON-Schema primitive `{primitive}` has no XSD simple-type equivalent")]
    NoXsdEquivalent {
        /// The recognized but unmappable primitive.
        primitive: JsonPrimitive,
    },
}
