//! JSON-Schema primitive → qualified XSD type mapping.
//!
//! Generated XML schema fragments need XSD type references for the scalar
//! fields an API description declares with JSON-Schema type names. This
//! crate performs that translation: `boolean` → `xs:boolean`, `number` →
//! `xs:decimal`, `string` → `xs:string`, `integer` → `xs:integer`.
//!
//! The mapping is a total, pure, stateless function over a closed input set;
//! a [`TypeMapper`] may be shared and called concurrently without
//! coordination.
//!
//! # Entry Point
//!
//! ```
//! assert_eq!(xsdmap::to_xsd_type("number").unwrap(), "xs:decimal");
//! ```
//!
//! # Configuration
//!
//! All configuration is explicit, through [`TypeMapperBuilder`] — there is
//! no registry discovery and no reflective wiring:
//!
//! ```
//! use xsdmap::TypeMapper;
//!
//! let mapper = TypeMapper::builder().prefix("xsd").build();
//! assert_eq!(mapper.to_xsd_type("integer").unwrap(), "xsd:integer");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod mapping;

pub use error::Error;
pub use mapping::{TypeMapper, TypeMapperBuilder};

/// Maps a JSON-Schema primitive type name to its qualified XSD type using
/// the default mapper (prefix `xs`, standard mapping table).
///
/// # Errors
///
/// Returns [`Error::Unrecognized`] if `name` is not a JSON-Schema primitive
/// type name, and [`Error::NoXsdEquivalent`] for `object`, `array`, and
/// `null`, which have no XSD simple-type counterpart.
pub fn to_xsd_type(name: &str) -> Result<String, Error> {
    TypeMapper::new().to_xsd_type(name)
}
