//! JSON-Schema → XSD mapping tables and the [`TypeMapper`].
//!
//! Deterministic mapping from JSON-Schema primitive type names to qualified
//! XSD simple-type identifiers.

use std::collections::HashMap;

use xsdmap_model::consts::XML_SCHEMA_PREFIX;
use xsdmap_model::{JsonPrimitive, XsdDatatype};

use crate::error::Error;

/// Returns the standard XSD simple type for a scalar primitive, or `None`
/// for the structural primitives (`object`, `array`, `null`).
#[must_use]
pub fn default_xsd_type(primitive: JsonPrimitive) -> Option<XsdDatatype> {
    match primitive {
        JsonPrimitive::Boolean => Some(XsdDatatype::Boolean),
        JsonPrimitive::Number => Some(XsdDatatype::Decimal),
        JsonPrimitive::String => Some(XsdDatatype::String),
        JsonPrimitive::Integer => Some(XsdDatatype::Integer),
        JsonPrimitive::Object | JsonPrimitive::Array | JsonPrimitive::Null => None,
    }
}

/// Maps JSON-Schema primitive type names to qualified XSD type identifiers.
///
/// A mapper holds only its configuration (prefix and mapping overrides);
/// every lookup is a pure computation over that configuration, so a single
/// instance may be shared across threads freely.
#[derive(Debug, Clone)]
pub struct TypeMapper {
    prefix: String,
    overrides: HashMap<JsonPrimitive, XsdDatatype>,
}

impl TypeMapper {
    /// Creates a mapper with the standard table and the `xs` prefix.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: XML_SCHEMA_PREFIX.to_string(),
            overrides: HashMap::new(),
        }
    }

    /// Starts building a mapper with explicit configuration.
    #[must_use]
    pub fn builder() -> TypeMapperBuilder {
        TypeMapperBuilder::new()
    }

    /// Returns the namespace prefix this mapper qualifies type names with.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Resolves the XSD simple type for a primitive, honoring configured
    /// overrides before the standard table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoXsdEquivalent`] for `object`, `array`, and `null`
    /// unless an override has been configured for them.
    pub fn xsd_type_of(&self, primitive: JsonPrimitive) -> Result<XsdDatatype, Error> {
        if let Some(datatype) = self.overrides.get(&primitive) {
            return Ok(*datatype);
        }
        default_xsd_type(primitive).ok_or(Error::NoXsdEquivalent { primitive })
    }

    /// Formats a datatype as a qualified name under this mapper's prefix,
    /// e.g. `xs:decimal`.
    #[must_use]
    pub fn qualify(&self, datatype: XsdDatatype) -> String {
        format!("{}:{}", self.prefix, datatype.local_name())
    }

    /// Maps a JSON-Schema primitive type name to its qualified XSD type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unrecognized`] if `name` is not a JSON-Schema
    /// primitive type name, and [`Error::NoXsdEquivalent`] for recognized
    /// primitives without an XSD simple-type counterpart.
    pub fn to_xsd_type(&self, name: &str) -> Result<String, Error> {
        let primitive = JsonPrimitive::parse_str(name).ok_or_else(|| Error::Unrecognized {
            name: name.to_string(),
        })?;
        let datatype = self.xsd_type_of(primitive)?;
        Ok(self.qualify(datatype))
    }
}

impl Default for TypeMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`TypeMapper`].
///
/// All configuration is passed explicitly; there is no ambient registry to
/// consult and nothing is wired up behind the caller's back.
#[derive(Debug, Clone)]
pub struct TypeMapperBuilder {
    prefix: String,
    overrides: HashMap<JsonPrimitive, XsdDatatype>,
}

impl TypeMapperBuilder {
    /// Creates a builder preloaded with the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: XML_SCHEMA_PREFIX.to_string(),
            overrides: HashMap::new(),
        }
    }

    /// Sets the namespace prefix used to qualify type names. Generated
    /// documents that bind the XML-Schema namespace to another prefix
    /// (commonly `xsd`) set it here.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Overrides the datatype a primitive maps to. An override for a
    /// structural primitive makes it mappable; an override for a scalar
    /// replaces the standard table entry.
    #[must_use]
    pub fn map(mut self, primitive: JsonPrimitive, datatype: XsdDatatype) -> Self {
        self.overrides.insert(primitive, datatype);
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> TypeMapper {
        TypeMapper {
            prefix: self.prefix,
            overrides: self.overrides,
        }
    }
}

impl Default for TypeMapperBuilder {
    fn default() -> Self {
        Self::new()
    }
}
