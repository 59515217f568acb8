#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use fql_builder::output::{to_json, to_json_pretty};
    use fql_builder::query::*;
    use fql_builder::{Expr, Pagination, Request, RequestOptions, Transport, prepare};
    use serde_json::json;

    fn json(expr: &Expr) -> String {
        to_json(expr).unwrap()
    }

    /// Records submitted bodies instead of sending them anywhere.
    #[derive(Default)]
    struct RecordingTransport {
        sent: RefCell<Vec<String>>,
    }

    impl Transport for RecordingTransport {
        type Response = usize;
        type Error = String;

        fn submit(&self, request: &Request) -> Result<usize, String> {
            if request.body().is_empty() {
                return Err("empty body".to_string());
            }
            self.sent.borrow_mut().push(request.body().to_string());
            Ok(self.sent.borrow().len())
        }
    }

    // ========================================================================
    // Pagination Tests
    // ========================================================================

    #[test]
    fn test_paginate_defaults() {
        let page = paginate(match_(index("all_users"))).build();
        assert_eq!(json(&page), r#"{"paginate":{"match":{"index":"all_users"}}}"#);
    }

    #[test]
    fn test_paginate_field_order_is_fixed() {
        let page = Pagination::new(var("set"))
            .sources(true)
            .events(true)
            .size(10)
            .before("b")
            .after("a")
            .ts(5)
            .build();
        assert_eq!(
            json(&page),
            r#"{"paginate":{"var":"set"},"ts":5,"after":"a","before":"b","size":10,"events":true,"sources":true}"#
        );
    }

    #[test]
    fn test_paginate_false_flags_are_omitted() {
        let page = paginate(var("set")).events(false).sources(false).build();
        assert_eq!(json(&page), r#"{"paginate":{"var":"set"}}"#);
    }

    #[test]
    fn test_paginate_flag_can_be_cleared() {
        let page = paginate(var("set")).events(true).events(false).build();
        assert_eq!(json(&page), r#"{"paginate":{"var":"set"}}"#);
    }

    #[test]
    fn test_paginate_cursor_can_be_array() {
        let page = paginate(var("set")).after(arr([var("r")])).build();
        assert_eq!(json(&page), r#"{"paginate":{"var":"set"},"after":[{"var":"r"}]}"#);
    }

    #[test]
    fn test_map_over_page() {
        let page = paginate(match_(index("all_users"))).size(2);
        let expr = map(page, lambda("u", get(var("u"))));
        assert_eq!(
            json(&expr),
            r#"{"map":{"lambda":"u","expr":{"get":{"var":"u"}}},"collection":{"paginate":{"match":{"index":"all_users"}},"size":2}}"#
        );
    }

    // ========================================================================
    // Request Tests
    // ========================================================================

    #[test]
    fn test_prepare_compact() {
        let expr = add([1, 2]);
        let request = prepare(&expr, &RequestOptions::default()).unwrap();

        assert_eq!(request.body(), r#"{"add":[1,2]}"#);
        assert_eq!(request.document(), &json!({"add": [1, 2]}));
        assert_eq!(request.into_body(), json(&expr));
    }

    #[test]
    fn test_prepare_pretty() {
        let expr = add([1, 2]);
        let request = prepare(&expr, &RequestOptions { pretty: true }).unwrap();

        assert_eq!(request.body(), to_json_pretty(&expr).unwrap());
        assert!(request.body().contains('\n'));
        assert_eq!(request.document(), &json!({"add": [1, 2]}));
    }

    #[test]
    fn test_prepare_keeps_document_key_order() {
        let expr = obj([("z", 1), ("a", 2)]);
        let request = prepare(&expr, &RequestOptions::default()).unwrap();

        let keys: Vec<&String> = request.document()["object"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_repeated_call_field_keeps_every_occurrence_in_body() {
        let expr = fql_builder::ast::call("f", 1).field("x", 2).field("x", 3).build();
        let request = prepare(&expr, &RequestOptions::default()).unwrap();

        assert_eq!(request.body(), r#"{"f":1,"x":2,"x":3}"#);
        assert_eq!(request.document(), &json!({"f": 1, "x": 3}));
    }

    #[test]
    fn test_transport_receives_rendered_body() {
        let transport = RecordingTransport::default();
        let expr = get(ref_in(class("users"), "1"));
        let request = prepare(&expr, &RequestOptions::default()).unwrap();

        assert_eq!(transport.submit(&request), Ok(1));
        assert_eq!(
            transport.sent.borrow().as_slice(),
            [r#"{"get":{"ref":{"class":"users"},"id":"1"}}"#.to_string()]
        );
    }
}
