//! Property-based tests for the mapping layer.
//!
//! Uses proptest to verify the output shape invariant: every successful
//! mapping is the configured prefix, a colon, and an XSD local name.

use proptest::prelude::*;
use proptest::sample::select;

use xsdmap::TypeMapper;
use xsdmap_model::JsonPrimitive;

fn scalar_primitives() -> Vec<JsonPrimitive> {
    JsonPrimitive::ALL
        .into_iter()
        .filter(|p| p.is_scalar())
        .collect()
}

proptest! {
    /// Output always begins with the default prefix followed by a colon.
    #[test]
    fn prop_output_starts_with_prefix(primitive in select(scalar_primitives())) {
        let mapper = TypeMapper::new();
        let qualified = mapper.to_xsd_type(primitive.as_str()).unwrap();
        prop_assert!(qualified.starts_with("xs:"));
    }

    /// The invariant holds for arbitrary configured prefixes too.
    #[test]
    fn prop_output_starts_with_configured_prefix(
        primitive in select(scalar_primitives()),
        prefix in "[a-z][a-z0-9]{0,7}",
    ) {
        let mapper = TypeMapper::builder().prefix(prefix.clone()).build();
        let qualified = mapper.to_xsd_type(primitive.as_str()).unwrap();
        let expected_prefix = format!("{}:", prefix);
        prop_assert!(qualified.starts_with(&expected_prefix));
    }

    /// What follows the colon is always a known XSD local name.
    #[test]
    fn prop_local_name_is_xsd(primitive in select(scalar_primitives())) {
        let mapper = TypeMapper::new();
        let qualified = mapper.to_xsd_type(primitive.as_str()).unwrap();
        let local = qualified.split(':').nth(1).unwrap();
        prop_assert!(["boolean", "decimal", "string", "integer"].contains(&local));
    }

    /// Arbitrary strings never panic the mapper; they map or fail cleanly.
    #[test]
    fn prop_arbitrary_input_never_panics(name in ".*") {
        let mapper = TypeMapper::new();
        let _ = mapper.to_xsd_type(&name);
    }
}
