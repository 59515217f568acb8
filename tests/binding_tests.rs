#[cfg(test)]
mod tests {
    use fql_builder::output::to_json;
    use fql_builder::query::{add, let_, obj, var};
    use fql_builder::{Error, Expr, LetBinding};

    fn json(expr: &Expr) -> String {
        to_json(expr).unwrap()
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    // ========================================================================
    // Emission Tests
    // ========================================================================

    #[test]
    fn test_let_in() {
        let mut binding = let_([("a", 1), ("b", 2)]);
        let expr = binding.in_(add([var("a"), var("b")])).unwrap();
        assert_eq!(
            json(&expr),
            r#"{"let":{"a":1,"b":2},"in":{"add":[{"var":"a"},{"var":"b"}]}}"#
        );
    }

    #[test]
    fn test_let_bindings_keep_order() {
        let mut binding = let_([("z", 1), ("a", 2), ("m", 3)]);
        assert_eq!(binding.names(), vec!["z", "a", "m"]);

        let expr = binding.in_(var("m")).unwrap();
        assert_eq!(json(&expr), r#"{"let":{"z":1,"a":2,"m":3},"in":{"var":"m"}}"#);
    }

    #[test]
    fn test_later_binding_may_reference_earlier() {
        let mut binding = let_([("x", Expr::from(1))]);
        binding.bind("y", add([var("x"), 1.into()])).unwrap();
        let expr = binding.in_(var("y")).unwrap();
        assert_eq!(
            json(&expr),
            r#"{"let":{"x":1,"y":{"add":[{"var":"x"},1]}},"in":{"var":"y"}}"#
        );
    }

    #[test]
    fn test_empty_bindings_are_allowed() {
        let mut binding = let_(Vec::<(&str, Expr)>::new());
        assert!(binding.names().is_empty());
        let expr = binding.in_(1).unwrap();
        assert_eq!(json(&expr), r#"{"let":{},"in":1}"#);
    }

    #[test]
    fn test_duplicate_binding_replaces_in_place() {
        let mut binding = let_([("a", 1), ("b", 2)]);
        binding.bind("a", 3).unwrap();
        let expr = binding.in_(var("a")).unwrap();
        assert_eq!(json(&expr), r#"{"let":{"a":3,"b":2},"in":{"var":"a"}}"#);
    }

    #[test]
    fn test_reserved_binding_names_stay_in_let_object() {
        let mut binding = let_([("in", 1), ("let", 2)]);
        let expr = binding.in_(var("in")).unwrap();
        assert_eq!(json(&expr), r#"{"let":{"in":1,"let":2},"in":{"var":"in"}}"#);
    }

    #[test]
    fn test_binding_user_object_is_wrapped() {
        let mut binding = let_([("user", obj([("name", "bob")]))]);
        let expr = binding.in_(var("user")).unwrap();
        assert_eq!(
            json(&expr),
            r#"{"let":{"user":{"object":{"name":"bob"}}},"in":{"var":"user"}}"#
        );
    }

    #[test]
    fn test_into_expr() {
        let expr = LetBinding::new([("a", 1)]).into_expr(var("a")).unwrap();
        assert_eq!(json(&expr), r#"{"let":{"a":1},"in":{"var":"a"}}"#);
    }

    #[test]
    fn test_bind_chains() {
        let mut binding = let_(Vec::<(&str, Expr)>::new());
        binding.bind("a", 1).unwrap().bind("b", 2).unwrap();
        assert_eq!(binding.names(), vec!["a", "b"]);
    }

    // ========================================================================
    // Misuse Tests
    // ========================================================================

    #[test]
    fn test_second_in_is_rejected() {
        init_tracing();
        let mut binding = let_([("a", 1)]);
        assert!(!binding.is_finalized());

        binding.in_(var("a")).unwrap();
        assert!(binding.is_finalized());
        assert!(binding.names().is_empty());

        match binding.in_(var("a")) {
            Err(Error::BuilderMisuse(reason)) => assert!(reason.contains("in_")),
            other => panic!("expected builder misuse, got {other:?}"),
        }
    }

    #[test]
    fn test_bind_after_in_is_rejected() {
        init_tracing();
        let mut binding = let_([("a", 1)]);
        binding.in_(var("a")).unwrap();

        let err = binding.bind("b", 2).unwrap_err();
        assert!(matches!(err, Error::BuilderMisuse(_)));
        assert!(err.to_string().starts_with("Builder misuse:"));
    }

    #[test]
    fn test_first_result_survives_misuse() {
        let mut binding = let_([("a", 1)]);
        let first = binding.in_(var("a")).unwrap();
        let _ = binding.in_(var("b"));
        assert_eq!(json(&first), r#"{"let":{"a":1},"in":{"var":"a"}}"#);
    }
}
