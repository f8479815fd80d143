//! JSON-Schema and XSD type vocabularies encoded as typed Rust data.
//!
//! The `xsdmap-model` crate provides the two closed vocabularies the mapping
//! layer works over: the JSON-Schema primitive type names
//! ([`JsonPrimitive`]) and the XSD simple types they translate to
//! ([`XsdDatatype`]), along with the XML-Schema namespace constants.
//!
//! # Entry Point
//!
//! ```
//! use xsdmap_model::JsonPrimitive;
//!
//! let primitive = JsonPrimitive::parse_str("integer");
//! assert_eq!(primitive, Some(JsonPrimitive::Integer));
//! assert!(JsonPrimitive::Integer.is_scalar());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod primitive;
pub mod xsd;

pub use primitive::JsonPrimitive;
pub use xsd::{consts, XsdDatatype};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_round_trip() {
        for primitive in JsonPrimitive::ALL {
            assert_eq!(JsonPrimitive::parse_str(primitive.as_str()), Some(primitive));
        }
    }

    #[test]
    fn all_primitive_names_unique() {
        let mut names = std::collections::HashSet::new();
        for primitive in JsonPrimitive::ALL {
            assert!(
                names.insert(primitive.as_str()),
                "Duplicate primitive name: {}",
                primitive.as_str()
            );
        }
    }

    #[test]
    fn all_datatype_iris_unique() {
        let mut iris = std::collections::HashSet::new();
        for datatype in XsdDatatype::ALL {
            assert!(
                iris.insert(datatype.iri()),
                "Duplicate datatype IRI: {}",
                datatype.iri()
            );
        }
    }

    #[test]
    fn datatype_iris_in_xml_schema_namespace() {
        for datatype in XsdDatatype::ALL {
            assert!(datatype.iri().starts_with(consts::XML_SCHEMA_NS));
            assert!(datatype.iri().ends_with(datatype.local_name()));
        }
    }
}
