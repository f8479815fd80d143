//! The XSD simple-type vocabulary and XML-Schema namespace constants.

/// Standard XML-Schema constants used across the workspace.
pub mod consts {
    /// Conventional prefix bound to the XML-Schema namespace in generated
    /// documents.
    pub const XML_SCHEMA_PREFIX: &str = "xs";
    /// XML-Schema namespace.
    pub const XML_SCHEMA_NS: &str = "http://www.w3.org/2001/XMLSchema#";

    // XSD datatype IRIs
    /// `xs:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
    /// `xs:decimal`.
    pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
    /// `xs:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xs:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
}

/// An XSD simple type producible by the mapping layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum XsdDatatype {
    /// `xs:boolean`.
    Boolean,
    /// `xs:decimal` — arbitrary-precision decimal, the XSD counterpart of a
    /// JSON-Schema `number`.
    Decimal,
    /// `xs:string`.
    String,
    /// `xs:integer`.
    Integer,
}

impl XsdDatatype {
    /// All simple types in this vocabulary.
    pub const ALL: [XsdDatatype; 4] = [
        XsdDatatype::Boolean,
        XsdDatatype::Decimal,
        XsdDatatype::String,
        XsdDatatype::Integer,
    ];

    /// Returns the local name within the XML-Schema namespace.
    #[must_use]
    pub fn local_name(self) -> &'static str {
        match self {
            XsdDatatype::Boolean => "boolean",
            XsdDatatype::Decimal => "decimal",
            XsdDatatype::String => "string",
            XsdDatatype::Integer => "integer",
        }
    }

    /// Returns the full datatype IRI.
    #[must_use]
    pub fn iri(self) -> &'static str {
        match self {
            XsdDatatype::Boolean => consts::XSD_BOOLEAN,
            XsdDatatype::Decimal => consts::XSD_DECIMAL,
            XsdDatatype::String => consts::XSD_STRING,
            XsdDatatype::Integer => consts::XSD_INTEGER,
        }
    }
}

impl std::fmt::Display for XsdDatatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.local_name())
    }
}
