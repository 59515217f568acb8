#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use fql_builder::output::to_json;
    use fql_builder::query::{value, var};
    use fql_builder::{Encode, Error, Expr, Value};
    use serde_json::json;

    fn json(expr: &Expr) -> String {
        to_json(expr).unwrap()
    }

    fn encoded<T: Encode + ?Sized>(host: &T) -> String {
        json(&value(host).unwrap())
    }

    // ========================================================================
    // Scalar Encoding Tests
    // ========================================================================

    #[test]
    fn test_encode_scalars() {
        assert_eq!(encoded("bob"), r#""bob""#);
        assert_eq!(encoded(&String::from("bob")), r#""bob""#);
        assert_eq!(encoded(&true), "true");
        assert_eq!(encoded(&7i32), "7");
        assert_eq!(encoded(&7i64), "7");
        assert_eq!(encoded(&7u32), "7");
        assert_eq!(encoded(&7u64), "7");
        assert_eq!(encoded(&2.5f64), "2.5");
    }

    #[test]
    fn test_encode_u64_overflow_is_rejected() {
        match value(&u64::MAX) {
            Err(Error::InvalidLiteral { kind, .. }) => assert_eq!(kind, "long"),
            other => panic!("expected invalid long literal, got {other:?}"),
        }
    }

    #[test]
    fn test_encode_non_finite_double_is_rejected() {
        assert!(matches!(
            value(&f64::NAN),
            Err(Error::InvalidLiteral { kind: "double", .. })
        ));
    }

    #[test]
    fn test_encode_option() {
        assert_eq!(encoded(&Some(3)), "3");
        assert_eq!(encoded(&None::<i32>), "null");
    }

    #[test]
    fn test_encode_expr_and_value_pass_through() {
        assert_eq!(encoded(&var("x")), r#"{"var":"x"}"#);
        assert_eq!(
            encoded(&Value::reference("keys/1").unwrap()),
            r#"{"@ref":"keys/1"}"#
        );
    }

    // ========================================================================
    // Collection Encoding Tests
    // ========================================================================

    #[test]
    fn test_encode_vec_and_slice() {
        assert_eq!(encoded(&vec![1, 2, 3]), "[1,2,3]");
        assert_eq!(encoded(&[Some("a"), None][..]), r#"["a",null]"#);
    }

    #[test]
    fn test_encode_single_element_vec_stays_array() {
        assert_eq!(encoded(&vec![1]), "[1]");
    }

    #[test]
    fn test_encode_btree_map_is_wrapped_and_sorted() {
        let mut map = BTreeMap::new();
        map.insert("zeta".to_string(), 1);
        map.insert("alpha".to_string(), 2);
        map.insert("let".to_string(), 3);
        assert_eq!(encoded(&map), r#"{"object":{"alpha":2,"let":3,"zeta":1}}"#);
    }

    #[test]
    fn test_encode_error_inside_collection_propagates() {
        let values = vec![1.0, f64::INFINITY];
        assert!(value(&values).is_err());
    }

    // ========================================================================
    // JSON Document Encoding Tests
    // ========================================================================

    #[test]
    fn test_encode_json_document_keeps_key_order() {
        let doc = json!({
            "name": "bob",
            "tags": ["a", "b"],
            "n": 1,
            "x": 1.5,
            "none": null
        });
        assert_eq!(
            encoded(&doc),
            r#"{"object":{"name":"bob","tags":["a","b"],"n":1,"x":1.5,"none":null}}"#
        );
    }

    #[test]
    fn test_encode_json_nested_objects_are_wrapped() {
        let doc = json!({"data": {"let": {"in": 1}}});
        assert_eq!(
            encoded(&doc),
            r#"{"object":{"data":{"object":{"let":{"object":{"in":1}}}}}}"#
        );
    }

    #[test]
    fn test_encode_json_large_unsigned_is_rejected() {
        let doc = json!({"big": u64::MAX});
        assert!(matches!(value(&doc), Err(Error::InvalidLiteral { kind: "long", .. })));
    }

    #[test]
    fn test_encode_json_scalars() {
        assert_eq!(encoded(&json!(null)), "null");
        assert_eq!(encoded(&json!(false)), "false");
        assert_eq!(encoded(&json!(-4)), "-4");
        assert_eq!(encoded(&json!("s")), r#""s""#);
        assert_eq!(encoded(&json!([])), "[]");
    }
}
