//! Property-based tests for JSON-LD structured data emission.
//!
//! For any JSON-serializable mapping, the emitted script body must parse
//! back to a value deep-equal to the input.

use proptest::prelude::*;
use serde_json::{Map, Value};

use toolhub::services::seo_emitter::{SeoEmitter, SeoEmitterTrait};

/// Strategy for JSON leaf values.
fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[ -~]{0,20}".prop_map(Value::String),
    ]
}

/// Strategy for string-keyed mappings with leaves, arrays, and one level of
/// nested objects — the shapes structured data actually takes.
fn arb_structured_data() -> impl Strategy<Value = Map<String, Value>> {
    let nested = prop_oneof![
        arb_leaf(),
        proptest::collection::vec(arb_leaf(), 0..4).prop_map(Value::Array),
        proptest::collection::hash_map("[a-zA-Z@][a-zA-Z0-9_]{0,10}", arb_leaf(), 0..4)
            .prop_map(|m| Value::Object(m.into_iter().collect())),
    ];
    proptest::collection::hash_map("[a-zA-Z@][a-zA-Z0-9_]{0,10}", nested, 0..6)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn script_body_roundtrips_to_input(data in arb_structured_data()) {
        let emitter = SeoEmitter::new("https://toolhub.dev", "Toolhub");
        let script = emitter.structured_data_script(&data).unwrap();

        prop_assert!(script.starts_with("<script type=\"application/ld+json\">"));
        prop_assert!(script.ends_with("</script>"));

        let body = script
            .strip_prefix("<script type=\"application/ld+json\">")
            .unwrap()
            .strip_suffix("</script>")
            .unwrap();
        let parsed: Value = serde_json::from_str(body).unwrap();
        prop_assert_eq!(parsed, Value::Object(data));
    }
}
