//! Convenience macros for structured logging

/// Build a [`Context`](crate::Context) from key/value pairs.
///
/// Keys are either string literals with `=>` or identifiers with `=`.
/// Values are anything `serde::Serialize`; a value that fails to serialize
/// is left out.
///
/// ```rust
/// use strata_log::context;
///
/// let ctx = context! { "port" => 8080, "tls" => false };
/// assert_eq!(ctx["port"], 8080);
///
/// let ctx = context!(request_id = "req-123", attempt = 2);
/// assert_eq!(ctx["request_id"], "req-123");
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::Context::new()
    };
    ($($key:literal => $value:expr),+ $(,)?) => {{
        let mut ctx = $crate::Context::new();
        $( $crate::entry::insert_field(&mut ctx, $key, &$value); )+
        ctx
    }};
    ($($key:ident = $value:expr),+ $(,)?) => {{
        let mut ctx = $crate::Context::new();
        $( $crate::entry::insert_field(&mut ctx, stringify!($key), &$value); )+
        ctx
    }};
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    #[test]
    fn test_context_literal_keys() {
        let ctx = context! { "port" => 8080, "host" => "localhost", "tags" => json!(["a", "b"]) };
        let keys: Vec<_> = ctx.keys().map(String::as_str).collect();
        assert_eq!(keys, ["port", "host", "tags"]);
        assert_eq!(ctx["tags"], json!(["a", "b"]));
    }

    #[test]
    fn test_context_ident_keys() {
        let user = String::from("alice");
        let ctx = context!(user = user, admin = true,);
        assert_eq!(ctx["user"], "alice");
        assert_eq!(ctx["admin"], true);
    }

    #[test]
    fn test_context_empty() {
        assert!(context!().is_empty());
    }
}
